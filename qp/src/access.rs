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

//! Named per-type shorthands for the generic parse functions.

use crate::{options::Options, query::Query, result::ParseResult};

macro_rules! typed_access {
    (
        $ty:ty, $name:literal,
        $parse:ident, $get:ident, $pull:ident,
        $parse_slice:ident, $get_slice:ident, $pull_slice:ident
    ) => {
        impl Query {
            #[doc = concat!("Parse `key` as ", $name, ". See [Query::parse].")]
            pub fn $parse(&self, key: &str, options: Options<$ty>) -> ParseResult<$ty> {
                self.parse(key, options)
            }

            #[doc = concat!("Get `key` as ", $name, " and whether it is valid.")]
            pub fn $get(&self, key: &str, options: Options<$ty>) -> ($ty, bool) {
                self.get(key, options)
            }

            #[doc = concat!("Get `key` as ", $name, ", or `None` if it is absent.")]
            pub fn $pull(&self, key: &str, options: Options<$ty>) -> Option<$ty> {
                self.pull(key, options)
            }

            #[doc = concat!("Parse `key` as a list of ", $name, ". See [Query::parse_list].")]
            pub fn $parse_slice(
                &self,
                key: &str,
                options: Options<Vec<$ty>>,
            ) -> ParseResult<Vec<$ty>> {
                self.parse_list(key, options)
            }

            pub fn $get_slice(&self, key: &str, options: Options<Vec<$ty>>) -> (Vec<$ty>, bool) {
                self.get_list(key, options)
            }

            pub fn $pull_slice(&self, key: &str, options: Options<Vec<$ty>>) -> Option<Vec<$ty>> {
                self.pull_list(key, options)
            }
        }
    };
}

typed_access!(
    i64, "integer",
    parse_int, get_int, pull_int,
    parse_int_slice, get_int_slice, pull_int_slice
);

typed_access!(
    f64, "float",
    parse_float, get_float, pull_float,
    parse_float_slice, get_float_slice, pull_float_slice
);

typed_access!(
    String, "string",
    parse_string, get_string, pull_string,
    parse_string_slice, get_string_slice, pull_string_slice
);

typed_access!(
    bool, "boolean",
    parse_bool, get_bool, pull_bool,
    parse_bool_slice, get_bool_slice, pull_bool_slice
);

// vim: ts=4 sw=4 expandtab
