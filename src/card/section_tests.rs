//! Tests for `Section`, `Footer` and `Timestamp`.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde_json::json;

use super::{
    BodyElement, CardError, Field, Fields, Footer, Section, Text, Timestamp, ToWire, Validate,
};

fn text(s: &str) -> BodyElement {
    Text::new(s).unwrap().into()
}

mod timestamp {
    use super::*;

    #[test]
    fn integer_millis_pass_through() {
        assert_eq!(Timestamp::from(1_700_000_000_123_i64).to_millis().unwrap(), 1_700_000_000_123);
    }

    #[test]
    fn float_millis_are_truncated() {
        assert_eq!(Timestamp::from(1234.99_f64).to_millis().unwrap(), 1234);
        assert_eq!(Timestamp::from(-1.5_f64).to_millis().unwrap(), -1);
    }

    #[test]
    fn non_finite_float_is_invalid_value() {
        let err = Timestamp::from(f64::NAN).to_millis().unwrap_err();

        assert!(err.is_invalid_value());
    }

    #[test]
    fn float_outside_i64_range_is_invalid_value() {
        for value in [1e30, -1e30, 9_223_372_036_854_775_808.0] {
            let err = Timestamp::from(value).to_millis().unwrap_err();
            assert!(err.is_invalid_value(), "Expected {value} to be out of range");
        }
    }

    #[test]
    fn text_outside_i64_range_is_invalid_value() {
        let err = Timestamp::from("1e30").to_millis().unwrap_err();

        assert!(err.is_invalid_value());
    }

    #[test]
    fn small_integers_convert() {
        assert_eq!(Timestamp::from(5).to_millis().unwrap(), 5);
        assert_eq!(Timestamp::from(-7_i32).to_millis().unwrap(), -7);
        assert_eq!(Timestamp::from(9_u32).to_millis().unwrap(), 9);
        assert_eq!(Timestamp::from(1_700_000_000_000_u64).to_millis().unwrap(), 1_700_000_000_000);
    }

    #[test]
    fn unsigned_above_i64_max_is_invalid_value() {
        let err = Timestamp::from(u64::MAX).to_millis().unwrap_err();

        assert!(err.is_invalid_value());
    }

    #[test]
    fn footer_accepts_unsuffixed_literal() {
        let footer = Footer::new().with_timestamp(5).unwrap();

        assert_eq!(footer.unix_timestamp, Some(Timestamp::Millis(5)));
    }

    #[test]
    fn system_time_converts_to_epoch_millis() {
        let time = UNIX_EPOCH + Duration::from_millis(1_500_000_000_250);

        assert_eq!(Timestamp::from(time).to_millis().unwrap(), 1_500_000_000_250);
    }

    #[test]
    fn pre_epoch_system_time_is_negative() {
        let time = UNIX_EPOCH - Duration::from_millis(2_000);

        assert_eq!(Timestamp::from(time).to_millis().unwrap(), -2_000);
    }

    #[test]
    fn numeric_text_is_coerced() {
        assert_eq!(Timestamp::from("1700000000000").to_millis().unwrap(), 1_700_000_000_000);
        assert_eq!(Timestamp::from(" 12.9 ").to_millis().unwrap(), 12);
        assert_eq!(Timestamp::from("1e3".to_string()).to_millis().unwrap(), 1000);
    }

    #[test]
    fn non_numeric_text_is_invalid_type() {
        for input in ["yesterday", "", "inf", "NaN"] {
            let err = Timestamp::from(input).to_millis().unwrap_err();
            assert!(
                matches!(err, CardError::InvalidType { field: "unix_timestamp", .. }),
                "Expected {input:?} to be a type error"
            );
        }
    }
}

mod footer {
    use super::*;

    #[test]
    fn empty_footer_is_valid_and_serializes_empty() {
        let footer = Footer::new();

        assert!(footer.validate().is_ok());
        assert_eq!(footer.to_wire().unwrap(), json!({}));
    }

    #[test]
    fn full_footer_wire() {
        let footer = Footer::new()
            .with_text("sent by bot")
            .unwrap()
            .with_icon_url("https://example.com/icon.png")
            .unwrap()
            .with_timestamp(1_700_000_000_000.7_f64)
            .unwrap();

        assert_eq!(
            footer.to_wire().unwrap(),
            json!({
                "footer": "sent by bot",
                "footer_icon": "https://example.com/icon.png",
                "ts": 1_700_000_000_000_i64
            })
        );
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(Footer::new().with_text("").unwrap_err().is_invalid_value());
    }

    #[test]
    fn invalid_icon_url_is_rejected() {
        let err = Footer::new().with_icon_url("icon").unwrap_err();

        assert!(matches!(err, CardError::InvalidValue { field: "icon_url", .. }));
    }

    #[test]
    fn invalid_text_timestamp_is_rejected() {
        let err = Footer::new().with_timestamp("soon").unwrap_err();

        assert!(err.is_invalid_type());
    }

    #[test]
    fn mutated_timestamp_fails_validation() {
        let mut footer = Footer::new();
        footer.unix_timestamp = Some(Timestamp::Text("later".to_string()));

        assert!(footer.validate().unwrap_err().is_invalid_type());
    }

    #[test]
    fn system_time_timestamp_is_serialized_as_millis() {
        let footer = Footer::new()
            .with_timestamp(SystemTime::UNIX_EPOCH + Duration::from_secs(10))
            .unwrap();

        assert_eq!(footer.to_wire().unwrap(), json!({"ts": 10_000}));
    }
}

mod section {
    use super::*;

    #[test]
    fn empty_elements_are_rejected() {
        let err = Section::new(vec![]).unwrap_err();

        assert!(err.is_invalid_value());
        assert!(err.to_string().contains("Sections require at least one element"));
    }

    #[test]
    fn nested_section_is_rejected() {
        let inner = Section::new(vec![text("inner")]).unwrap();

        let err = Section::new(vec![text("outer"), inner.into()]).unwrap_err();

        assert!(err.is_invalid_value());
        assert!(err.to_string().contains("cannot be sections"));
    }

    #[test]
    fn mutated_into_nested_section_fails_at_serialization() {
        let inner = Section::new(vec![text("inner")]).unwrap();
        let mut outer = Section::new(vec![text("outer")]).unwrap();
        outer.elements.push(inner.into());

        assert!(outer.to_wire().unwrap_err().is_invalid_value());
    }

    #[test]
    fn footer_is_revalidated() {
        let mut footer = Footer::new();
        footer.icon_url = Some("bad icon".to_string());
        let section = Section::new(vec![text("a")]).unwrap().with_footer(footer);

        assert!(section.validate().is_err());
    }

    #[test]
    fn minimal_wire() {
        let wire = Section::new(vec![text("a")]).unwrap().to_wire().unwrap();

        assert_eq!(
            wire,
            json!({
                "type": "section",
                "sections": [{"type": "message", "text": "a", "editable": false}]
            })
        );
    }

    #[test]
    fn footer_fields_are_merged_flat() {
        let footer = Footer::new()
            .with_text("footnote")
            .unwrap()
            .with_timestamp(42_i64)
            .unwrap();
        let wire = Section::new(vec![
            text("a"),
            Fields::new(vec![Field::new("k", "v")]).into(),
        ])
        .unwrap()
        .with_sidebar_color("#00FF00")
        .with_footer(footer)
        .to_wire()
        .unwrap();

        assert_eq!(
            wire,
            json!({
                "type": "section",
                "sections": [
                    {"type": "message", "text": "a", "editable": false},
                    {"type": "fields", "items": [{"key": "k", "value": "v", "editable": false}]}
                ],
                "sidebar_color": "#00FF00",
                "footer": "footnote",
                "ts": 42
            })
        );
    }

    #[test]
    fn invalid_child_fails_section_validation() {
        let mut child = Text::new("ok").unwrap();
        child.text = String::new();
        let section = Section {
            elements: vec![child.into()],
            sidebar_color: None,
            footer: None,
        };

        assert!(section.validate().is_err());
        assert!(section.to_wire().is_err());
    }
}
