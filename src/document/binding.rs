//! Field bindings and display content resolution
//!
//! A `field`-kind element displays one attribute of an event record. At
//! design time the record is absent and every binding resolves to a fixed
//! placeholder; at render time a supplied record's value wins. Unrecognized
//! bindings are never an error: they echo the raw binding name so documents
//! written by other clients still render.

use serde::{Deserialize, Serialize};

use crate::document::element::{DesignElement, ElementKind};

/// The record attribute a `field` element displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldBinding {
    /// Primary subject name
    BrideName,
    /// Secondary subject name
    GroomName,
    /// Event date
    WeddingDate,
    /// Event location
    Venue,
    /// Free-form description slot
    Message,
    /// A binding this client does not recognize; preserved verbatim
    Custom(String),
}

impl FieldBinding {
    /// All bindings this client recognizes, in catalog order
    pub const RECOGNIZED: [FieldBinding; 5] = [
        FieldBinding::BrideName,
        FieldBinding::GroomName,
        FieldBinding::WeddingDate,
        FieldBinding::Venue,
        FieldBinding::Message,
    ];

    /// Wire name of this binding
    pub fn as_str(&self) -> &str {
        match self {
            FieldBinding::BrideName => "bride_name",
            FieldBinding::GroomName => "groom_name",
            FieldBinding::WeddingDate => "wedding_date",
            FieldBinding::Venue => "venue",
            FieldBinding::Message => "message",
            FieldBinding::Custom(name) => name,
        }
    }

    /// Human-readable label shown in the library catalog
    pub fn label(&self) -> &str {
        match self {
            FieldBinding::BrideName => "Bride's Name",
            FieldBinding::GroomName => "Groom's Name",
            FieldBinding::WeddingDate => "Wedding Date",
            FieldBinding::Venue => "Venue",
            FieldBinding::Message => "Message",
            FieldBinding::Custom(name) => name,
        }
    }

    /// Fixed design-time placeholder shown when no record is supplied.
    ///
    /// Unrecognized bindings echo their raw name; this is deliberate silent
    /// degradation, never a fault.
    pub fn placeholder(&self) -> &str {
        match self {
            FieldBinding::BrideName => "Sarah",
            FieldBinding::GroomName => "Michael",
            FieldBinding::WeddingDate => "June 15, 2024",
            FieldBinding::Venue => "The Grand Ballroom",
            FieldBinding::Message => "Together with their families, we invite you to celebrate",
            FieldBinding::Custom(name) => name,
        }
    }
}

impl From<String> for FieldBinding {
    fn from(name: String) -> Self {
        match name.as_str() {
            "bride_name" => FieldBinding::BrideName,
            "groom_name" => FieldBinding::GroomName,
            "wedding_date" => FieldBinding::WeddingDate,
            "venue" => FieldBinding::Venue,
            "message" => FieldBinding::Message,
            _ => FieldBinding::Custom(name),
        }
    }
}

impl From<FieldBinding> for String {
    fn from(binding: FieldBinding) -> Self {
        binding.as_str().to_string()
    }
}

/// A live event record fetched from storage
///
/// Every attribute is optional; a record missing the bound attribute falls
/// back to the design-time placeholder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bride_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groom_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wedding_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EventRecord {
    /// Look up the value of a bound attribute, if the record carries it
    pub fn value_for(&self, binding: &FieldBinding) -> Option<&str> {
        let value = match binding {
            FieldBinding::BrideName => &self.bride_name,
            FieldBinding::GroomName => &self.groom_name,
            FieldBinding::WeddingDate => &self.wedding_date,
            FieldBinding::Venue => &self.venue,
            FieldBinding::Message => &self.message,
            FieldBinding::Custom(_) => return None,
        };
        value.as_deref()
    }
}

/// Resolve the text an element displays.
///
/// This is the single resolution path shared by the live canvas and the
/// read-only preview, so the two can never diverge. For `field` elements the
/// record value wins when present, otherwise the binding's placeholder; for
/// `image` elements the content is the source URL, not display text.
pub fn display_content(element: &DesignElement, record: Option<&EventRecord>) -> String {
    match element.kind {
        ElementKind::Text | ElementKind::Container => {
            element.content.clone().unwrap_or_default()
        }
        ElementKind::Image => element.content.clone().unwrap_or_default(),
        ElementKind::Field => match &element.field_binding {
            Some(binding) => record
                .and_then(|r| r.value_for(binding))
                .unwrap_or(binding.placeholder())
                .to_string(),
            None => String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::element::ElementStyle;
    use crate::geometry::{Point, Size};

    fn field_element(binding: FieldBinding) -> DesignElement {
        DesignElement {
            id: "el-1".to_string(),
            kind: ElementKind::Field,
            position: Point::new(0.0, 0.0),
            size: Size::new(200.0, 40.0),
            content: None,
            field_binding: Some(binding),
            style: ElementStyle::default(),
        }
    }

    #[test]
    fn test_placeholder_without_record() {
        let element = field_element(FieldBinding::WeddingDate);
        assert_eq!(display_content(&element, None), "June 15, 2024");
    }

    #[test]
    fn test_record_value_wins() {
        let element = field_element(FieldBinding::WeddingDate);
        let record = EventRecord {
            wedding_date: Some("2025-03-01".to_string()),
            ..Default::default()
        };
        assert_eq!(display_content(&element, Some(&record)), "2025-03-01");
    }

    #[test]
    fn test_record_missing_attribute_falls_back() {
        let element = field_element(FieldBinding::Venue);
        let record = EventRecord {
            bride_name: Some("Emma".to_string()),
            ..Default::default()
        };
        assert_eq!(display_content(&element, Some(&record)), "The Grand Ballroom");
    }

    #[test]
    fn test_unrecognized_binding_echoes_raw_name() {
        let element = field_element(FieldBinding::from("rsvp_deadline".to_string()));
        assert_eq!(display_content(&element, None), "rsvp_deadline");
    }

    #[test]
    fn test_binding_round_trips_through_string() {
        for binding in FieldBinding::RECOGNIZED {
            let name = binding.as_str().to_string();
            assert_eq!(FieldBinding::from(name), binding);
        }
    }

    #[test]
    fn test_text_element_shows_its_content() {
        let mut element = field_element(FieldBinding::Venue);
        element.kind = ElementKind::Text;
        element.field_binding = None;
        element.content = Some("Save the date".to_string());
        assert_eq!(display_content(&element, None), "Save the date");
    }
}
