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

#![allow(dead_code)]

use qp::{ParseResult, Query};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a query the way a request handler would see it.
pub fn query(qs: &str) -> Query {
    init_logger();
    format!("http://example.com?{qs}").parse().unwrap()
}

/// Check that get and pull agree with parse.
pub fn assert_wrappers_agree<T>(res: &ParseResult<T>, get: (T, bool), pull: Option<T>)
where
    T: Clone + PartialEq + std::fmt::Debug,
{
    let valid = res.contains() && !res.is_empty() && res.error().is_none();
    assert_eq!(get, (res.value().clone(), valid));
    if res.contains() {
        assert_eq!(pull.as_ref(), Some(res.value()));
    } else {
        assert_eq!(pull, None);
    }
}

// vim: ts=4 sw=4 expandtab
