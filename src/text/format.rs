// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reusable layout description for line/position text.

use serde::{Deserialize, Serialize};

use super::line_position::{LinePositionText, parse_line_position_text};
use crate::error::ParseError;

/// Layout of a fixed-format display string.
///
/// Bundles the parameters of [`parse_line_position_text`] so a binding can
/// load them once from its configuration.
///
/// # Examples
///
/// ```
/// use habtools_lib::text::LinePositionFormat;
///
/// let format: LinePositionFormat = serde_json::from_str(
///     r#"{"prefix":"[","suffix":"]","line_length":1,"position_length":2,"max_line":1,"max_position":15}"#,
/// )
/// .unwrap();
///
/// let parsed = format.parse("[104]Hi").unwrap();
/// assert_eq!((parsed.line_number(), parsed.position()), (1, 4));
///
/// assert_eq!(format.render(0, 7, "Bye").unwrap(), "[007]Bye");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinePositionFormat {
    /// Literal that starts every string.
    pub prefix: String,
    /// Delimiter between the position number and the payload.
    pub suffix: String,
    /// Width of the line number field.
    pub line_length: usize,
    /// Width of the position number field.
    pub position_length: usize,
    /// Highest valid line number.
    pub max_line: u16,
    /// Highest valid position.
    pub max_position: u16,
}

impl LinePositionFormat {
    /// Widest numeric field [`render`](Self::render) will pad to.
    pub const MAX_FIELD_WIDTH: usize = 16;

    /// Creates a format with the given delimiters and field widths.
    ///
    /// The bounds default to the 20x4 character LCD; use
    /// [`with_max_line`](Self::with_max_line) and
    /// [`with_max_position`](Self::with_max_position) to change them.
    #[must_use]
    pub fn new(
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        line_length: usize,
        position_length: usize,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            line_length,
            position_length,
            max_line: 3,
            max_position: 19,
        }
    }

    /// Format of the 20x4 character LCD: `TFNUM<LPP>text`.
    #[must_use]
    pub fn lcd_20x4() -> Self {
        Self::new("TFNUM<", ">", 1, 2)
    }

    /// Sets the highest valid line number.
    #[must_use]
    pub fn with_max_line(mut self, max_line: u16) -> Self {
        self.max_line = max_line;
        self
    }

    /// Sets the highest valid position.
    #[must_use]
    pub fn with_max_position(mut self, max_position: u16) -> Self {
        self.max_position = max_position;
        self
    }

    /// Parses `text` with this layout.
    ///
    /// # Errors
    ///
    /// See [`parse_line_position_text`].
    pub fn parse(&self, text: &str) -> Result<LinePositionText, ParseError> {
        parse_line_position_text(
            text,
            &self.prefix,
            &self.suffix,
            self.line_length,
            self.position_length,
            self.max_line,
            self.max_position,
        )
    }

    /// Builds a display string in this layout, zero-padding both numbers.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] if the suffix is not exactly one
    /// character, since parsing consumes only one, or if a field width exceeds
    /// [`MAX_FIELD_WIDTH`](Self::MAX_FIELD_WIDTH).
    ///
    /// Returns [`ParseError::LineOutOfRange`] or
    /// [`ParseError::PositionOutOfRange`] if a number exceeds its bound or
    /// does not fit in its field width.
    pub fn render(&self, line: u16, position: u16, text: &str) -> Result<String, ParseError> {
        if self.suffix.chars().count() != 1 {
            return Err(ParseError::InvalidValue {
                field: "suffix".to_string(),
                message: format!("expected a single character, got {:?}", self.suffix),
            });
        }
        for (field, width) in [
            ("line_length", self.line_length),
            ("position_length", self.position_length),
        ] {
            if width > Self::MAX_FIELD_WIDTH {
                return Err(ParseError::InvalidValue {
                    field: field.to_string(),
                    message: format!(
                        "width {width} exceeds maximum {}",
                        Self::MAX_FIELD_WIDTH
                    ),
                });
            }
        }
        if line > self.max_line || digits(line) > self.line_length {
            return Err(ParseError::LineOutOfRange {
                line: i32::from(line),
                max: self.max_line,
            });
        }
        if position > self.max_position || digits(position) > self.position_length {
            return Err(ParseError::PositionOutOfRange {
                position: i32::from(position),
                max: self.max_position,
            });
        }

        Ok(format!(
            "{}{line:0line_width$}{position:0position_width$}{}{text}",
            self.prefix,
            self.suffix,
            line_width = self.line_length,
            position_width = self.position_length,
        ))
    }
}

impl Default for LinePositionFormat {
    fn default() -> Self {
        Self::lcd_20x4()
    }
}

fn digits(value: u16) -> usize {
    value.to_string().len()
}
