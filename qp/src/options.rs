// -*- coding: utf-8 -*-
//
// Copyright (C) 2024-2025 Michael Büsch <m@bues.ch>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::scalar::Ranged;

/// Default value and constraints for parsing one query key.
///
/// Range methods are only available for [Ranged] types, the string
/// allow-list only for `String`. Booleans and lists take a default only.
#[derive(Debug, Clone, PartialEq)]
pub struct Options<T> {
    pub(crate) default: Option<T>,
    /// Sorted (min, max).
    pub(crate) bounds: Option<(T, T)>,
    pub(crate) others: Vec<T>,
}

impl<T> Default for Options<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Options<T> {
    /// No default (the zero value is used) and no constraints.
    pub fn new() -> Self {
        Self {
            default: None,
            bounds: None,
            others: vec![],
        }
    }

    pub fn default_value(value: T) -> Self {
        Self::new().with_default(value)
    }

    /// Replace the default value.
    #[must_use]
    pub fn with_default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }
}

impl<T: Ranged> Options<T> {
    /// Accept values in the inclusive range spanned by `a` and `b`.
    ///
    /// The bounds may be given in any order. The default value is `a`,
    /// not the smaller of the two.
    pub fn range(a: T, b: T) -> Self {
        let bounds = if b < a { (b, a.clone()) } else { (a.clone(), b) };
        Self {
            default: Some(a),
            bounds: Some(bounds),
            others: vec![],
        }
    }

    /// Additionally accept these discrete values.
    #[must_use]
    pub fn or_one_of(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.others.extend(values);
        self
    }
}

impl Options<String> {
    /// Accept `default` or one of `alternatives`.
    ///
    /// The allow-list contains the default itself. Without alternatives
    /// any string is accepted.
    pub fn one_of(
        default: impl Into<String>,
        alternatives: impl IntoIterator<Item: Into<String>>,
    ) -> Self {
        let default = default.into();
        let mut others: Vec<String> = alternatives.into_iter().map(Into::into).collect();
        if !others.is_empty() {
            others.insert(0, default.clone());
        }
        Self {
            default: Some(default),
            bounds: None,
            others,
        }
    }
}

impl<T: PartialOrd> Options<T> {
    pub fn is_constrained(&self) -> bool {
        self.bounds.is_some() || !self.others.is_empty()
    }

    /// Check a converted value against the range and the allow-list.
    pub fn admits(&self, value: &T) -> bool {
        if !self.is_constrained() {
            return true;
        }
        let in_range = self
            .bounds
            .as_ref()
            .is_some_and(|(min, max)| min <= value && value <= max);
        in_range || self.others.contains(value)
    }
}


// vim: ts=4 sw=4 expandtab
