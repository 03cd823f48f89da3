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

mod common;

use assert_matches::assert_matches;
use common::{assert_wrappers_agree, query};
use qp::{Error, Options};

#[test]
fn test_parse_float_simple() {
    let r = query("price=12.34").parse_float("price", Options::new());
    assert_eq!(*r.value(), 12.34);
    assert_eq!(*r.default_value(), 0.0);
    assert!(r.contains());
    assert!(!r.is_empty());
    assert!(r.error().is_none());

    let r = query("").parse_float("price", Options::new());
    assert_eq!(*r.value(), 0.0);
    assert!(!r.contains());
    assert!(r.is_empty());
}

#[test]
fn test_parse_float_default() {
    let r = query("price=").parse_float("price", Options::default_value(1.5));
    assert_eq!(*r.value(), 1.5);
    assert!(r.contains());
    assert!(r.is_empty());

    let r = query("price").parse_float("price", Options::range(10.0, 30.0));
    assert_eq!(*r.value(), 10.0);
    assert!(r.is_empty());
}

#[test]
fn test_parse_float_range() {
    let r = query("price=21.0").parse_float("price", Options::range(30.0, 10.5));
    assert_eq!(*r.value(), 21.0);
    assert_eq!(*r.default_value(), 30.0);
    assert_eq!(*r.min(), 10.5);
    assert_eq!(*r.max(), 30.0);
    assert!(r.error().is_none());

    let r = query("price=55").parse_float("price", Options::range(10.0, 30.0));
    assert_eq!(*r.value(), 10.0);
    assert_matches!(r.error(), Some(Error::Constraint { value, .. }) if value == "55");
}

#[test]
fn test_parse_float_others() {
    let opts = || Options::range(20.0, 20.0).or_one_of([30.0, 50.0, 70.0]);

    let r = query("price=70").parse_float("price", opts());
    assert_eq!(*r.value(), 70.0);
    assert!(r.error().is_none());

    let r = query("price=33").parse_float("price", opts());
    assert_eq!(*r.value(), 20.0);
    assert_matches!(r.error(), Some(Error::Constraint { .. }));
}

#[test]
fn test_parse_float_invalid() {
    let r = query("price=hello").parse_float("price", Options::default_value(2.5));
    assert_eq!(*r.value(), 2.5);
    assert_matches!(r.error(), Some(Error::Conversion { raw, .. }) if raw == "hello");

    // Too large for f64.
    for raw in ["1e400", "-1e400"] {
        let r = query(&format!("price={raw}")).parse_float("price", Options::default_value(2.0));
        assert_eq!(*r.value(), 2.0);
        assert!(!r.is_valid());
        assert_matches!(r.error(), Some(Error::Conversion { raw: bad, .. }) if bad == raw);
    }
    let r = query("price=-inf").parse_float("price", Options::new());
    assert!(r.value().is_infinite());
    assert!(r.error().is_none());

    // Hex floats are not supported.
    let r = query("price=0x1p4").parse_float("price", Options::new());
    assert_matches!(r.error(), Some(Error::Conversion { .. }));

    let r = query("price=nan").parse_float("price", Options::range(0.0, 1.0));
    assert_eq!(*r.value(), 0.0);
    assert_matches!(r.error(), Some(Error::Constraint { .. }));
}

#[test]
fn test_get_pull_float() {
    let q = query("price=1.25");
    assert_eq!(q.get_float("price", Options::new()), (1.25, true));
    assert_eq!(q.pull_float("price", Options::new()), Some(1.25));
    assert_eq!(q.pull_float("cost", Options::new()), None);

    for qs in ["price=1.5", "price=", "price", "", "price=99", "price=x"] {
        let q = query(qs);
        let r = q.parse_float("price", Options::range(1.0, 2.0));
        let get = q.get_float("price", Options::range(1.0, 2.0));
        let pull = q.pull_float("price", Options::range(1.0, 2.0));
        assert_wrappers_agree(&r, get, pull);
    }
}

#[test]
fn test_parse_float_slice() {
    let csv = query("p=1.5,2,-3e2").parse_float_slice("p", Options::new());
    let rep = query("p=1.5&p=2&p=-3e2").parse_float_slice("p", Options::new());
    assert_eq!(csv.value(), &vec![1.5, 2.0, -300.0]);
    assert_eq!(csv.value(), rep.value());
    assert!(csv.error().is_none());
    assert!(rep.error().is_none());

    let r = query("p=1.5,x").parse_float_slice("p", Options::default_value(vec![1.0]));
    assert!(r.value().is_empty());
    assert_matches!(r.error(), Some(Error::Conversion { raw, .. }) if raw == "x");

    let q = query("p=");
    assert_eq!(q.get_float_slice("p", Options::new()), (vec![], false));
    assert_eq!(q.pull_float_slice("p", Options::new()), Some(vec![]));
    assert_eq!(query("").pull_float_slice("p", Options::new()), None);
}

// vim: ts=4 sw=4 expandtab
