// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `habtools` library.
//!
//! Parsing failures carry the offending input so that a configuration loader
//! can report exactly which value was rejected.

use std::num::ParseIntError;

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while parsing a configuration string.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

/// Errors related to parsing configuration strings.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A LED selection token is neither an integer nor an `A-B` range.
    #[error("invalid LED token: '{token}'")]
    InvalidToken {
        /// The trimmed token that failed to parse.
        token: String,
    },

    /// A LED range ends before it starts.
    #[error("invalid LED range '{token}': end {end} is lower than start {start}")]
    InvalidRange {
        /// The trimmed token that failed to parse.
        token: String,
        /// First LED of the range.
        start: u16,
        /// Last LED of the range.
        end: u16,
    },

    /// Line/position text does not start with the expected prefix.
    #[error("prefix '{prefix}' is missing")]
    MissingPrefix {
        /// The expected prefix.
        prefix: String,
    },

    /// Line/position suffix is absent or lies beyond the numeric fields.
    #[error("suffix '{suffix}' is missing")]
    MissingSuffix {
        /// The expected suffix.
        suffix: String,
    },

    /// The line or position field is not a well-formed integer.
    #[error("invalid {field} number: '{value}'")]
    InvalidNumber {
        /// Which field failed (`line` or `position`).
        field: &'static str,
        /// The raw field content.
        value: String,
        /// The integer parsing failure, if the field could be extracted.
        #[source]
        source: Option<ParseIntError>,
    },

    /// The line number lies outside `[0, max]`.
    #[error("line number {line} must have a value from 0 - {max}")]
    LineOutOfRange {
        /// The parsed line number.
        line: i32,
        /// Maximum allowed line number.
        max: u16,
    },

    /// The position lies outside `[0, max]`.
    #[error("position {position} must have a value from 0 - {max}")]
    PositionOutOfRange {
        /// The parsed position.
        position: i32,
        /// Maximum allowed position.
        max: u16,
    },

    /// Failed to parse a specific option value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The option key that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u32,
        /// Maximum allowed value.
        max: u32,
        /// The actual value that was provided.
        actual: u32,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
