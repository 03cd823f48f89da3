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

use anyhow::{self as ah, format_err as err};
use std::fmt::{Debug, Display};

/// Boolean spellings, as (true, false) pairs. Compared case-insensitively.
const BOOL_PAIRS: [(&str, &str); 5] = [
    ("1", "0"),
    ("true", "false"),
    ("yes", "no"),
    ("on", "off"),
    ("t", "f"),
];

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for String {}
    impl Sealed for bool {}
}

/// A type that can be converted from one raw query value.
///
/// Implemented for `i64`, `f64`, `String` and `bool` only. Other crates
/// cannot add types:
///
/// ```compile_fail
/// use std::fmt;
///
/// #[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
/// struct Meters(f64);
///
/// impl fmt::Display for Meters {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}m", self.0)
///     }
/// }
///
/// impl qp::Scalar for Meters {
///     fn from_raw(raw: &str) -> anyhow::Result<Self> {
///         Ok(Self(raw.parse()?))
///     }
/// }
/// ```
pub trait Scalar: sealed::Sealed + Sized + Clone + Default + PartialOrd + Debug + Display {
    /// Convert one raw (already percent-decoded) value.
    /// Surrounding whitespace is not stripped.
    fn from_raw(raw: &str) -> ah::Result<Self>;
}

/// A [Scalar] that can be restricted to an inclusive range.
pub trait Ranged: Scalar {}

impl Scalar for i64 {
    fn from_raw(raw: &str) -> ah::Result<Self> {
        Ok(raw.parse::<i64>()?)
    }
}

impl Ranged for i64 {}

impl Scalar for f64 {
    fn from_raw(raw: &str) -> ah::Result<Self> {
        let value = raw.parse::<f64>()?;
        // Overflowing literals parse to infinity. Only an explicit "inf" may.
        if value.is_infinite()
            && !raw
                .trim_start_matches(['+', '-'])
                .to_ascii_lowercase()
                .starts_with("inf")
        {
            return Err(err!("'{raw}' out of range"));
        }
        Ok(value)
    }
}

impl Ranged for f64 {}

impl Scalar for String {
    fn from_raw(raw: &str) -> ah::Result<Self> {
        Ok(raw.to_string())
    }
}

impl Scalar for bool {
    fn from_raw(raw: &str) -> ah::Result<Self> {
        parse_bool(raw)
    }
}

/// Parse a boolean from any of the spellings
/// `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off`, `t`/`f`.
pub fn parse_bool(raw: &str) -> ah::Result<bool> {
    for (yes, no) in BOOL_PAIRS {
        if raw.eq_ignore_ascii_case(yes) {
            return Ok(true);
        }
        if raw.eq_ignore_ascii_case(no) {
            return Ok(false);
        }
    }
    Err(err!("'{raw}' is not a boolean"))
}


// vim: ts=4 sw=4 expandtab
