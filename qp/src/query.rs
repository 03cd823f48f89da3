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

use anyhow::{self as ah, Context as _};
use std::{collections::HashMap, str::FromStr};
use url::{Url, form_urlencoded};

/// A decoded URL query string.
///
/// Every key maps to all of its raw values, in the order they appear in the
/// query string. A key without `=` is present with one empty value.
#[derive(Debug, Clone, Default)]
pub struct Query {
    items: HashMap<String, Vec<String>>,
}

impl Query {
    /// Decode an `application/x-www-form-urlencoded` query string.
    /// A leading `?` is ignored.
    pub fn new(qs: &str) -> Self {
        let qs = qs.strip_prefix('?').unwrap_or(qs);

        let mut items: HashMap<_, Vec<String>> = HashMap::with_capacity(8);
        for (name, value) in form_urlencoded::parse(qs.as_bytes()) {
            items
                .entry(name.into_owned())
                .or_default()
                .push(value.into_owned());
        }
        Self { items }
    }

    pub fn from_url(url: &Url) -> Self {
        Self::new(url.query().unwrap_or_default())
    }

    /// All raw values of `key`, or `None` if the key is absent.
    /// The returned slice is never empty.
    pub fn all(&self, key: &str) -> Option<&[String]> {
        self.items.get(key).map(|l| &**l)
    }

    /// The first raw value of `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.all(key).and_then(|l| l.first()).map(|v| v.as_str())
    }

    /// Check whether `key` is present, with or without a value.
    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Check whether the first value of `key` is empty.
    ///
    /// An absent key is empty, too. Use [Query::contains] to tell the two apart.
    pub fn is_empty(&self, key: &str) -> bool {
        self.first(key).unwrap_or_default().is_empty()
    }
}

impl From<&Url> for Query {
    fn from(url: &Url) -> Self {
        Self::from_url(url)
    }
}

impl FromStr for Query {
    type Err = ah::Error;

    /// Parse an absolute URL and take its query string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(s).context("Parse URL")?;
        Ok(Self::from_url(&url))
    }
}


// vim: ts=4 sw=4 expandtab
