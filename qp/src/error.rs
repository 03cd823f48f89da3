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

/// Why a present, non-empty query value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The raw string could not be converted to the requested type.
    Conversion { key: String, raw: String },
    /// The converted value is neither in range nor in the allow-list.
    Constraint { key: String, value: String },
}

impl Error {
    pub fn key(&self) -> &str {
        match self {
            Self::Conversion { key, .. } | Self::Constraint { key, .. } => key,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conversion { key, raw } => write!(f, "invalid value for key {key}: {raw}"),
            Self::Constraint { key, value } => {
                write!(f, "value out of range for key {key}: {value}")
            }
        }
    }
}

// vim: ts=4 sw=4 expandtab
