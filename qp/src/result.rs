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

use crate::{error::Error, options::Options};
use anyhow::{self as ah, format_err as err};

/// The outcome of parsing one query key.
///
/// `value` always holds something usable: the parsed value, or the
/// default if the key is absent, empty or invalid.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult<T> {
    pub(crate) key: String,
    pub(crate) value: T,
    pub(crate) default: T,
    pub(crate) min: T,
    pub(crate) max: T,
    pub(crate) others: Vec<T>,
    pub(crate) empty: bool,
    pub(crate) contains: bool,
    pub(crate) error: Option<Error>,
}

impl<T: Clone + Default> ParseResult<T> {
    /// A result for a present key, with `value` set to the default.
    pub(crate) fn new(key: &str, options: &Options<T>) -> Self {
        let default = options.default.clone().unwrap_or_default();
        let (min, max) = options.bounds.clone().unwrap_or_default();
        Self {
            key: key.to_string(),
            value: default.clone(),
            default,
            min,
            max,
            others: options.others.clone(),
            empty: false,
            contains: true,
            error: None,
        }
    }
}

impl<T> ParseResult<T> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    pub fn min(&self) -> &T {
        &self.min
    }

    pub fn max(&self) -> &T {
        &self.max
    }

    pub fn others(&self) -> &[T] {
        &self.others
    }

    /// The key is absent or its first value is empty.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// The key is present in the query.
    pub fn contains(&self) -> bool {
        self.contains
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// The key is present, not empty, and its value was accepted.
    pub fn is_valid(&self) -> bool {
        self.contains && !self.empty && self.error.is_none()
    }

    /// Value and validity.
    pub fn get(self) -> (T, bool) {
        let valid = self.is_valid();
        (self.value, valid)
    }

    /// `None` if the key is absent, otherwise the (possibly defaulted) value.
    pub fn pull(self) -> Option<T> {
        self.contains.then_some(self.value)
    }

    /// The value if it is valid, otherwise an error.
    pub fn require(self) -> ah::Result<T> {
        if let Some(e) = self.error {
            return Err(e.into());
        }
        if self.empty {
            return Err(err!("Missing value for key {}", self.key));
        }
        Ok(self.value)
    }
}


// vim: ts=4 sw=4 expandtab
