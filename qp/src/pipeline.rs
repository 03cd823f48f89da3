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

use crate::{error::Error, options::Options, query::Query, result::ParseResult, scalar::Scalar};

fn convert<T: Scalar>(key: &str, raw: &str) -> Result<T, Error> {
    T::from_raw(raw).map_err(|e| {
        log::debug!("Query key '{key}': Invalid value '{raw}': {e}");
        Error::Conversion {
            key: key.to_string(),
            raw: raw.to_string(),
        }
    })
}

/// Convert every piece. The first failure discards everything.
fn convert_all<'a, T: Scalar>(
    key: &str,
    pieces: impl Iterator<Item = &'a str>,
) -> Result<Vec<T>, Error> {
    pieces.map(|raw| convert(key, raw)).collect()
}

impl Query {
    /// Parse the first value of `key` as `T`.
    ///
    /// Errors never escape: a conversion failure or a rejected value is
    /// recorded in the result and `value` stays at the default.
    pub fn parse<T: Scalar>(&self, key: &str, options: Options<T>) -> ParseResult<T> {
        let mut res = ParseResult::new(key, &options);

        let Some(raw) = self.first(key) else {
            res.contains = false;
            res.empty = true;
            return res;
        };
        if raw.is_empty() {
            res.empty = true;
            return res;
        }

        let value = match convert::<T>(key, raw) {
            Ok(value) => value,
            Err(e) => {
                res.error = Some(e);
                return res;
            }
        };

        if options.admits(&value) {
            res.value = value;
        } else {
            log::debug!("Query key '{key}': Value '{value}' out of range");
            res.error = Some(Error::Constraint {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        res
    }

    pub fn get<T: Scalar>(&self, key: &str, options: Options<T>) -> (T, bool) {
        self.parse(key, options).get()
    }

    pub fn pull<T: Scalar>(&self, key: &str, options: Options<T>) -> Option<T> {
        self.parse(key, options).pull()
    }

    /// Parse `key` as a list of `T`.
    ///
    /// Both `k=a,b,c` and `k=a&k=b&k=c` are accepted. If the key occurs more
    /// than once, the values are not split on `,`. On any invalid element
    /// the value is an empty list.
    pub fn parse_list<T: Scalar>(
        &self,
        key: &str,
        options: Options<Vec<T>>,
    ) -> ParseResult<Vec<T>> {
        let mut res = ParseResult::new(key, &options);

        let Some(raws) = self.all(key) else {
            res.contains = false;
            res.empty = true;
            return res;
        };
        if raws.first().is_none_or(|raw| raw.is_empty()) {
            res.empty = true;
            return res;
        }

        let parsed = match raws {
            [single] => convert_all(key, single.split(',')),
            repeated => convert_all(key, repeated.iter().map(|raw| raw.as_str())),
        };
        match parsed {
            Ok(values) => res.value = values,
            Err(e) => {
                res.value = vec![];
                res.error = Some(e);
            }
        }
        res
    }

    pub fn get_list<T: Scalar>(&self, key: &str, options: Options<Vec<T>>) -> (Vec<T>, bool) {
        self.parse_list(key, options).get()
    }

    pub fn pull_list<T: Scalar>(&self, key: &str, options: Options<Vec<T>>) -> Option<Vec<T>> {
        self.parse_list(key, options).pull()
    }
}


// vim: ts=4 sw=4 expandtab
