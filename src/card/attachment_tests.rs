//! Tests for the `Attachment` body element.

use serde_json::json;

use super::{Attachment, CardError, Style, ToWire, VALID_EXTENSIONS, Validate};

const RESOURCE: &str = "https://example.com/files/report.pdf";
const IMAGE: &str = "https://example.com/files/report.png";

fn attachment() -> Attachment {
    Attachment::new(RESOURCE, IMAGE, "Report").unwrap()
}

mod construction {
    use super::*;

    #[test]
    fn new_sets_required_fields_only() {
        let a = attachment();

        assert_eq!(a.resource_url, RESOURCE);
        assert_eq!(a.img_url, IMAGE);
        assert_eq!(a.title, "Report");
        assert!(a.title_style.is_none());
        assert!(a.description.is_none());
        assert!(a.description_style.is_none());
        assert!(a.ext.is_none());
        assert!(a.size.is_none());
    }

    #[test]
    fn schemeless_urls_are_accepted() {
        assert!(Attachment::new("example.com/a.zip", "example.com/a.png", "A").is_ok());
    }

    #[test]
    fn invalid_resource_url_is_rejected() {
        let err = Attachment::new("not a url", IMAGE, "Report").unwrap_err();

        assert!(err.is_invalid_value());
    }

    #[test]
    fn invalid_image_url_is_rejected() {
        let err = Attachment::new(RESOURCE, "nope", "Report").unwrap_err();

        assert!(err.is_invalid_value());
    }

    #[test]
    fn empty_title_is_rejected() {
        let err = Attachment::new(RESOURCE, IMAGE, "").unwrap_err();

        assert!(matches!(err, CardError::InvalidValue { field: "title", .. }));
    }

    #[test]
    fn empty_description_is_rejected() {
        let err = attachment().with_description("").unwrap_err();

        assert!(matches!(
            err,
            CardError::InvalidValue {
                field: "description",
                ..
            }
        ));
    }
}

mod extension {
    use super::*;

    #[test]
    fn upper_case_extension_is_normalized() {
        let a = attachment().with_ext("PDF").unwrap();

        assert_eq!(a.ext.as_deref(), Some("pdf"));
    }

    #[test]
    fn every_whitelisted_extension_is_accepted() {
        for ext in VALID_EXTENSIONS {
            assert!(attachment().with_ext(ext).is_ok(), "Expected {ext} to pass");
        }
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = attachment().with_ext("exe").unwrap_err();

        assert!(matches!(err, CardError::InvalidValue { field: "ext", .. }));
        assert!(err.to_string().contains("pdf, txt, doc, xlsx, zip, jpeg, png"));
    }

    #[test]
    fn mutated_upper_case_extension_fails_validation() {
        let mut a = attachment();
        a.ext = Some("PNG".to_string());

        assert!(a.validate().unwrap_err().is_invalid_value());
    }
}

mod description_style {
    use super::*;

    #[test]
    fn style_without_description_is_missing_component() {
        let err = attachment()
            .with_description_style(Style::new())
            .unwrap_err();

        assert!(err.is_missing_component());
        assert!(matches!(
            err,
            CardError::MissingComponent {
                component: "description style",
                requires: "description",
            }
        ));
    }

    #[test]
    fn style_after_description_is_accepted() {
        let a = attachment()
            .with_description("Details")
            .unwrap()
            .with_description_style(Style::new().with_italic(true))
            .unwrap();

        assert_eq!(a.description_style, Some(Style::new().with_italic(true)));
    }

    #[test]
    fn removing_description_later_fails_validation() {
        let mut a = attachment()
            .with_description("Details")
            .unwrap()
            .with_description_style(Style::new())
            .unwrap();
        a.description = None;

        assert!(a.to_wire().unwrap_err().is_missing_component());
    }
}

mod wire_format {
    use super::*;

    #[test]
    fn minimal_attachment() {
        let wire = attachment().to_wire().unwrap();

        assert_eq!(
            wire,
            json!({
                "type": "attachments",
                "resource_url": RESOURCE,
                "img_url": IMAGE,
                "information": {"title": {"text": "Report"}}
            })
        );
    }

    #[test]
    fn full_attachment() {
        let wire = attachment()
            .with_title_style(Style::new().with_bold(true))
            .with_description("Q3 numbers")
            .unwrap()
            .with_description_style(Style::new().with_color("#333333"))
            .unwrap()
            .with_ext("Pdf")
            .unwrap()
            .with_size(2048)
            .to_wire()
            .unwrap();

        assert_eq!(
            wire,
            json!({
                "type": "attachments",
                "resource_url": RESOURCE,
                "img_url": IMAGE,
                "information": {
                    "title": {
                        "text": "Report",
                        "style": {"bold": true, "italic": false}
                    },
                    "description": {
                        "text": "Q3 numbers",
                        "style": {"color": "#333333", "bold": false, "italic": false}
                    },
                    "ext": "pdf",
                    "size": 2048
                }
            })
        );
    }

    #[test]
    fn description_without_style_omits_style_key() {
        let wire = attachment()
            .with_description("plain")
            .unwrap()
            .to_wire()
            .unwrap();

        assert_eq!(wire["information"]["description"], json!({"text": "plain"}));
    }

    #[test]
    fn zero_size_is_kept() {
        let wire = attachment().with_size(0).to_wire().unwrap();

        assert_eq!(wire["information"]["size"], 0);
    }
}
