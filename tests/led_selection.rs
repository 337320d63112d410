// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for LED selection parsing.

use habtools_lib::led::{LedInstruction, LedSelection, MAX_LED_RANGE, parse_led_selection};
use habtools_lib::{Error, ParseError};
use proptest::prelude::*;

// ============================================================================
// Documented selections
// ============================================================================

mod documented {
    use super::*;

    #[test]
    fn mixed_singles_and_ranges() {
        let selection = parse_led_selection("1|2|4-6|8-9").unwrap();

        assert_eq!(selection.tracking_led(), Some(1));
        assert_eq!(
            selection.instructions(),
            &[
                LedInstruction::Single(1),
                LedInstruction::Single(2),
                LedInstruction::Range { start: 4, count: 3 },
                LedInstruction::Range { start: 8, count: 2 },
            ]
        );
    }

    #[test]
    fn long_range_is_chunked() {
        let selection = parse_led_selection("5-25").unwrap();

        assert_eq!(selection.tracking_led(), Some(5));
        assert_eq!(
            selection.instructions(),
            &[
                LedInstruction::Range { start: 5, count: 16 },
                LedInstruction::Range { start: 21, count: 5 },
            ]
        );
    }

    #[test]
    fn empty_string() {
        let selection = parse_led_selection("").unwrap();

        assert!(selection.instructions().is_empty());
        assert_eq!(selection.tracking_led(), None);
    }

    #[test]
    fn reversed_range() {
        assert!(matches!(
            parse_led_selection("3-1"),
            Err(ParseError::InvalidRange { start: 3, end: 1, .. })
        ));
    }

    #[test]
    fn whole_strip() {
        let selection = parse_led_selection("0-319").unwrap();

        assert_eq!(selection.instructions().len(), 20);
        assert_eq!(selection.len_leds(), 320);
        assert!(selection
            .instructions()
            .iter()
            .all(|instruction| instruction.led_count() == MAX_LED_RANGE));
    }
}

// ============================================================================
// Public API integration
// ============================================================================

mod api {
    use super::*;

    #[test]
    fn from_str_matches_function() {
        let parsed: LedSelection = "0|3-40".parse().unwrap();
        assert_eq!(parsed, parse_led_selection("0|3-40").unwrap());
    }

    #[test]
    fn display_reparses_to_same_selection() {
        let selection = parse_led_selection(" 2 | 10-50 |7").unwrap();
        assert_eq!(selection.to_string(), "2|10-25|26-41|42-50|7");

        let reparsed = parse_led_selection(&selection.to_string()).unwrap();
        assert_eq!(reparsed, selection);
    }

    #[test]
    fn errors_convert_into_library_error() {
        fn load(input: &str) -> habtools_lib::Result<LedSelection> {
            Ok(parse_led_selection(input)?)
        }

        let err = load("1|two").unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::InvalidToken { .. })));
        assert_eq!(err.to_string(), "parse error: invalid LED token: 'two'");
    }

    #[test]
    fn selection_serializes() {
        let selection = parse_led_selection("3|4-5").unwrap();
        let json = serde_json::to_value(&selection).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "tracking_led": 3,
                "instructions": [
                    { "single": 3 },
                    { "range": { "start": 4, "count": 2 } }
                ]
            })
        );
    }
}

// ============================================================================
// Properties
// ============================================================================

fn token() -> impl Strategy<Value = (u16, u16)> {
    (0u16..1000, 0u16..100).prop_map(|(start, len)| (start, start + len))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Long ranges split into consecutive chunks that cover the range exactly.
    #[test]
    fn prop_chunks_cover_range(start in 0u16..60_000, len in 17u16..500) {
        let end = start + len - 1;
        let selection = parse_led_selection(&format!("{start}-{end}")).unwrap();

        prop_assert_eq!(selection.tracking_led(), Some(start));

        let mut expected_start = u32::from(start);
        for instruction in selection.instructions() {
            let LedInstruction::Range { start: chunk, count } = *instruction else {
                return Err(TestCaseError::fail("range produced a single LED"));
            };
            prop_assert!((1..=MAX_LED_RANGE).contains(&count));
            prop_assert_eq!(u32::from(chunk), expected_start);
            expected_start += u32::from(count);
        }
        prop_assert_eq!(expected_start, u32::from(end) + 1);

        let leds: Vec<u16> = selection.leds().collect();
        let expected: Vec<u16> = (start..=end).collect();
        prop_assert_eq!(leds, expected);
    }

    /// Expanded LEDs follow the order of the input tokens.
    #[test]
    fn prop_expansion_follows_input_order(tokens in prop::collection::vec(token(), 0..8)) {
        let input = tokens
            .iter()
            .map(|&(start, end)| if start == end { start.to_string() } else { format!("{start}-{end}") })
            .collect::<Vec<_>>()
            .join("|");
        let selection = parse_led_selection(&input).unwrap();

        let expected: Vec<u16> = tokens.iter().flat_map(|&(start, end)| start..=end).collect();
        prop_assert_eq!(selection.leds().collect::<Vec<_>>(), expected);
        prop_assert_eq!(selection.tracking_led(), tokens.first().map(|&(start, _)| start));
    }

    /// Parsing has no hidden state across calls.
    #[test]
    fn prop_parse_is_idempotent(input in "[0-9| -]{0,24}") {
        let first = parse_led_selection(&input);
        let second = parse_led_selection(&input);

        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "results differ for {:?}", input),
        }
    }
}
