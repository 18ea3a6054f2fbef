//! Property tests for the line protocol and the controller's dispatch.

mod common;

use common::{Bench, Event};
use dispense_rig::protocol::{forgiving_int, CoordinateBatch, LineReader, MAX_X_POINTS};
use dispense_rig::{AxisId, Reply};
use proptest::prelude::*;

proptest! {
    #[test]
    fn forgiving_int_matches_std_for_canonical_text(value in any::<i32>()) {
        prop_assert_eq!(forgiving_int(&value.to_string()), value);
    }

    #[test]
    fn forgiving_int_ignores_trailing_text(value in -999i32..=999, tail in "[A-Za-z ]{0,8}") {
        let text = format!("{}{}", value, tail);
        prop_assert_eq!(forgiving_int(&text), value);
    }

    #[test]
    fn batch_parse_never_panics(line in "\\PC{0,64}") {
        let _ = CoordinateBatch::parse(&line);
    }

    #[test]
    fn batch_fields_round_trip(y in 0i32..1000, xs in prop::collection::vec(0i32..1000, 0..60)) {
        let mut line = format!("Y{:03}X", y);
        for x in &xs {
            line.push_str(&format!("{:03}", x));
        }

        let batch = CoordinateBatch::parse(&line).unwrap();
        let kept = xs.len().min(MAX_X_POINTS);
        prop_assert_eq!(batch.y, y);
        prop_assert_eq!(batch.xs.as_slice(), &xs[..kept]);
    }

    #[test]
    fn line_reader_yields_line_without_terminator(text in "[ -~]{1,100}", crlf in any::<bool>()) {
        let mut reader: LineReader = LineReader::new();
        let mut bytes = text.clone().into_bytes();
        if crlf {
            bytes.push(b'\r');
        }
        bytes.push(b'\n');

        let mut lines = Vec::new();
        for byte in bytes {
            if let Some(line) = reader.feed(byte).unwrap() {
                lines.push(line);
            }
        }

        prop_assert_eq!(lines.len(), 1);
        prop_assert_eq!(lines[0].as_str(), text.as_str());
    }

    #[test]
    fn hand_moves_touch_only_selected_axis(selector in 0i32..=3, mm in -500i32..500, relative in any::<bool>()) {
        let mut bench = Bench::new();
        bench.send_all(&["HandMode", format!("D{}", selector).as_str()]);
        bench.clear_events();

        let letter = if relative { 'M' } else { 'V' };
        bench.send(&format!("{}{}", letter, mm));

        let expected: Vec<AxisId> = match AxisId::from_motor_number(selector) {
            Some(axis) => vec![axis],
            None => AxisId::ALL.to_vec(),
        };
        let steps = i64::from(mm) * 40;
        let issued: Vec<(AxisId, i64)> = bench
            .events()
            .into_iter()
            .filter_map(|e| match e {
                Event::MoveTo(axis, s) | Event::MoveBy(axis, s) => Some((axis, s)),
                _ => None,
            })
            .collect();

        prop_assert_eq!(issued, expected.iter().map(|&a| (a, steps)).collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_select_is_rejected(selector in prop_oneof![i32::MIN..0, 4..i32::MAX]) {
        let mut bench = Bench::new();
        bench.send_all(&["HandMode", "D2"]);

        let reply = bench.send(&format!("D{}", selector));

        prop_assert_eq!(reply, Reply::InvalidMotor(selector));
        prop_assert_eq!(bench.rig.selection(), Some(dispense_rig::AxisTarget::Single(AxisId::Y)));
    }
}
