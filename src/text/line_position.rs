// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line/position text parsing.

use serde::Serialize;

use crate::error::ParseError;

/// Text addressed to a line and position of a character display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LinePositionText {
    line_number: u16,
    position: u16,
    text: String,
}

impl LinePositionText {
    /// Returns the display line.
    #[must_use]
    pub const fn line_number(&self) -> u16 {
        self.line_number
    }

    /// Returns the position within the line.
    #[must_use]
    pub const fn position(&self) -> u16 {
        self.position
    }

    /// Returns the text to show.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the value and returns the text to show.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Parses a fixed-layout display string into line, position and text.
///
/// # Format
///
/// `text` must start with `prefix`, followed by `line_length` characters
/// holding the line number. The position number follows and ends at the
/// first occurrence of `suffix` in `text`, which may lie at most
/// `position_length` characters after the line number. Everything after the
/// suffix character is returned as the payload.
///
/// # Examples
///
/// ```
/// use habtools_lib::text::parse_line_position_text;
///
/// let parsed = parse_line_position_text("TFNUM<213>Hello", "TFNUM<", ">", 1, 2, 3, 19).unwrap();
/// assert_eq!(parsed.line_number(), 2);
/// assert_eq!(parsed.position(), 13);
/// assert_eq!(parsed.text(), "Hello");
/// ```
///
/// # Errors
///
/// The checks run in this order, and the first failing one is returned:
/// - [`ParseError::MissingPrefix`] if `text` does not start with `prefix`
/// - [`ParseError::MissingSuffix`] if `suffix` is absent or lies beyond the
///   numeric fields
/// - [`ParseError::InvalidNumber`] if a numeric field is not an integer
/// - [`ParseError::LineOutOfRange`] if the line exceeds `[0, max_line]`
/// - [`ParseError::PositionOutOfRange`] if the position exceeds
///   `[0, max_position]`
pub fn parse_line_position_text(
    text: &str,
    prefix: &str,
    suffix: &str,
    line_length: usize,
    position_length: usize,
    max_line: u16,
    max_position: u16,
) -> Result<LinePositionText, ParseError> {
    if !text.starts_with(prefix) {
        return Err(ParseError::MissingPrefix {
            prefix: prefix.to_string(),
        });
    }

    // Offsets below count characters, not bytes.
    let line_start = prefix.chars().count();
    let position_start = line_start.checked_add(line_length);
    let max_suffix_index = position_start.and_then(|start| start.checked_add(position_length));

    let suffix_index = text
        .find(suffix)
        .filter(|&index| {
            // Widths too large to add up impose no bound.
            max_suffix_index.is_none_or(|max| text[..index].chars().count() <= max)
        })
        .ok_or_else(|| ParseError::MissingSuffix {
            suffix: suffix.to_string(),
        })?;
    let suffix_char_index = text[..suffix_index].chars().count();

    let line = parse_field(text, line_start, position_start, "line")?;
    let position = parse_field(
        text,
        position_start.unwrap_or(usize::MAX),
        Some(suffix_char_index),
        "position",
    )?;

    let line_number = u16::try_from(line)
        .ok()
        .filter(|&line| line <= max_line)
        .ok_or_else(|| {
            tracing::debug!(line, max_line, "Line number out of range");
            ParseError::LineOutOfRange {
                line,
                max: max_line,
            }
        })?;
    let position = u16::try_from(position)
        .ok()
        .filter(|&position| position <= max_position)
        .ok_or_else(|| {
            tracing::debug!(position, max_position, "Position out of range");
            ParseError::PositionOutOfRange {
                position,
                max: max_position,
            }
        })?;

    // The suffix is a single delimiter character.
    let payload_start = suffix_index + suffix.chars().next().map_or(0, char::len_utf8);
    let payload = text.get(payload_start..).unwrap_or_default();

    Ok(LinePositionText {
        line_number,
        position,
        text: payload.to_string(),
    })
}

/// Parses the characters `start..end` of `text` as an integer.
///
/// `end` is `None` when the field end does not fit in `usize`.
fn parse_field(
    text: &str,
    start: usize,
    end: Option<usize>,
    field: &'static str,
) -> Result<i32, ParseError> {
    let start = byte_offset(text, start);
    let end = end.and_then(|end| byte_offset(text, end));

    let (Some(start), Some(end)) = (start, end) else {
        // The field runs past the end of the text.
        return Err(ParseError::InvalidNumber {
            field,
            value: start.and_then(|start| text.get(start..)).unwrap_or_default().to_string(),
            source: None,
        });
    };
    let Some(value) = text.get(start..end) else {
        // Inverted bounds: the suffix was found before this field ends.
        return Err(ParseError::InvalidNumber {
            field,
            value: text[start..].to_string(),
            source: None,
        });
    };

    value.parse().map_err(|e| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
        source: Some(e),
    })
}

/// Returns the byte offset of the character at `char_index`, or the text
/// length when `char_index` is one past the last character.
fn byte_offset(text: &str, char_index: usize) -> Option<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .nth(char_index)
}
