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

//! Typed access to URL query parameters.
//!
//! ```
//! use qp::{Options, Query};
//!
//! let q = Query::new("age=55&ids=1,2,3&debug=on");
//!
//! let age = q.parse_int("age", Options::range(18, 30));
//! assert_eq!(*age.value(), 18);
//! assert!(age.error().is_some());
//!
//! assert_eq!(q.get_int_slice("ids", Options::new()), (vec![1, 2, 3], true));
//! assert_eq!(q.pull_bool("debug", Options::new()), Some(true));
//! assert_eq!(q.pull_string("name", Options::new()), None);
//! ```

#![forbid(unsafe_code)]

mod access;
mod error;
mod options;
mod pipeline;
mod query;
mod result;
mod scalar;

pub use crate::{
    error::Error,
    options::Options,
    query::Query,
    result::ParseResult,
    scalar::{Ranged, Scalar, parse_bool},
};

// vim: ts=4 sw=4 expandtab
