//! Integration tests for the persisted document shape

use pretty_assertions::assert_eq;
use serde_json::json;

use invite_studio::{
    DesignElement, Document, ElementKind, ElementStyle, FieldBinding, Point, Size,
};

fn sample_document() -> Document {
    Document {
        name: "Emma & Jack".to_string(),
        canvas_size: Size::new(400.0, 600.0),
        elements: vec![
            DesignElement {
                id: "el-1".to_string(),
                kind: ElementKind::Text,
                position: Point::new(50.0, 50.0),
                size: Size::new(200.0, 40.0),
                content: Some("Save the date".to_string()),
                field_binding: None,
                style: ElementStyle {
                    font_size: Some(24.0),
                    color: Some("#2b2b2b".to_string()),
                    ..Default::default()
                },
            },
            DesignElement {
                id: "el-2".to_string(),
                kind: ElementKind::Field,
                position: Point::new(50.0, 120.0),
                size: Size::new(200.0, 40.0),
                content: None,
                field_binding: Some(FieldBinding::WeddingDate),
                style: ElementStyle::default(),
            },
        ],
    }
}

#[test]
fn test_serialized_shape_matches_wire_format() {
    let doc = sample_document();
    let value = serde_json::to_value(&doc).expect("serialize");

    assert_eq!(value["design_name"], json!("Emma & Jack"));
    assert_eq!(value["canvas_size"], json!({ "width": 400.0, "height": 600.0 }));

    let first = &value["elements"][0];
    assert_eq!(first["type"], json!("text"));
    assert_eq!(first["x"], json!(50.0));
    assert_eq!(first["y"], json!(50.0));
    assert_eq!(first["width"], json!(200.0));
    assert_eq!(first["height"], json!(40.0));
    assert_eq!(first["content"], json!("Save the date"));
    assert_eq!(first["styles"]["fontSize"], json!(24.0));
    assert_eq!(first["styles"]["color"], json!("#2b2b2b"));
    // Unset style attributes are omitted, not null
    assert!(first["styles"].get("backgroundColor").is_none());

    let second = &value["elements"][1];
    assert_eq!(second["type"], json!("field"));
    assert_eq!(second["fieldType"], json!("wedding_date"));
    assert!(second.get("content").is_none());
}

#[test]
fn test_round_trip_preserves_document() {
    let doc = sample_document();
    let json = serde_json::to_string(&doc).expect("serialize");
    let back: Document = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, doc);
}

#[test]
fn test_documents_from_other_clients_load() {
    // camelCase style keys and an unrecognized binding, as another client
    // of the same backend might write them
    let json = r#"{
        "design_name": "Conference Badge",
        "canvas_size": { "width": 300, "height": 450 },
        "elements": [
            { "id": "a", "type": "field", "x": 10, "y": 10,
              "width": 150, "height": 30,
              "fieldType": "rsvp_deadline",
              "styles": { "fontWeight": "bold", "textAlign": "center" } }
        ]
    }"#;

    let doc: Document = serde_json::from_str(json).expect("deserialize");
    let element = &doc.elements[0];
    assert_eq!(
        element.field_binding,
        Some(FieldBinding::from("rsvp_deadline".to_string()))
    );

    // The unknown binding survives a round trip verbatim
    let value = serde_json::to_value(&doc).expect("serialize");
    assert_eq!(value["elements"][0]["fieldType"], json!("rsvp_deadline"));
}

#[test]
fn test_missing_styles_defaults_to_empty() {
    let json = r#"{
        "design_name": "Minimal",
        "canvas_size": { "width": 400, "height": 600 },
        "elements": [
            { "id": "a", "type": "text", "x": 0, "y": 0,
              "width": 100, "height": 30, "content": "hi" }
        ]
    }"#;
    let doc: Document = serde_json::from_str(json).expect("deserialize");
    assert_eq!(doc.elements[0].style, ElementStyle::default());
    doc.validate().expect("valid");
}
