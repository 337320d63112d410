// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed-layout display text.
//!
//! Character displays are driven with strings that carry their target
//! coordinates in front of the text, e.g. `"TFNUM<213>Hello"` writes `Hello`
//! at line 2, position 13. The layout is a literal prefix, a fixed-width line
//! number, a fixed-width position, a one-character suffix and the payload.
//!
//! # Examples
//!
//! ```
//! use habtools_lib::text::LinePositionFormat;
//!
//! let format = LinePositionFormat::lcd_20x4();
//! let parsed = format.parse("TFNUM<213>Hello").unwrap();
//!
//! assert_eq!(parsed.line_number(), 2);
//! assert_eq!(parsed.position(), 13);
//! assert_eq!(parsed.text(), "Hello");
//! ```

mod format;
mod line_position;

pub use format::LinePositionFormat;
pub use line_position::{LinePositionText, parse_line_position_text};
