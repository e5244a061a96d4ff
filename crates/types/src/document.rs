use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;

/// An entry in a post's table of contents, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// The text content of the heading.
    #[serde(alias = "value")]
    pub text: String,
    /// The anchor linking to this heading, with or without the leading `#`.
    #[serde(alias = "url")]
    pub anchor: String,
    /// Heading level (1 = h1, 2 = h2, etc.). Zero is rejected on deserialization.
    pub depth: NonZeroU8,
}

impl HeadingEntry {
    pub fn new(text: impl Into<String>, anchor: impl Into<String>, depth: NonZeroU8) -> Self {
        Self {
            text: text.into(),
            anchor: anchor.into(),
            depth,
        }
    }

    /// In-page link target, always starting with `#`.
    pub fn href(&self) -> String {
        if self.anchor.starts_with('#') {
            self.anchor.clone()
        } else {
            format!("#{}", self.anchor)
        }
    }
}

/// A heading annotated with its outline number, e.g. `2.1.3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedHeading {
    #[serde(flatten)]
    pub heading: HeadingEntry,
    pub number: String,
}

impl NumberedHeading {
    /// The label shown in the rendered outline: `"{number}. {text}"`.
    pub fn label(&self) -> String {
        format!("{}. {}", self.number, self.heading.text)
    }

    /// Left indentation in rem units, one step per level below the top.
    pub fn indent_rem(&self) -> u8 {
        self.heading.depth.get() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(d: u8) -> NonZeroU8 {
        NonZeroU8::new(d).unwrap()
    }

    #[test]
    fn test_deserialize_accepts_content_layer_field_names() {
        let entry: HeadingEntry =
            serde_json::from_str(r##"{"value": "Intro", "url": "#intro", "depth": 2}"##).unwrap();
        assert_eq!(entry.text, "Intro");
        assert_eq!(entry.anchor, "#intro");
        assert_eq!(entry.depth.get(), 2);
    }

    #[test]
    fn test_deserialize_rejects_zero_depth() {
        let result: Result<HeadingEntry, _> =
            serde_json::from_str(r#"{"text": "Intro", "anchor": "intro", "depth": 0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_href_adds_missing_hash() {
        assert_eq!(HeadingEntry::new("A", "a", depth(1)).href(), "#a");
        assert_eq!(HeadingEntry::new("A", "#a", depth(1)).href(), "#a");
    }

    #[test]
    fn test_label_and_indent() {
        let numbered = NumberedHeading {
            heading: HeadingEntry::new("Setup", "setup", depth(3)),
            number: "1.2.1".to_string(),
        };
        assert_eq!(numbered.label(), "1.2.1. Setup");
        assert_eq!(numbered.indent_rem(), 2);
    }

    #[test]
    fn test_numbered_heading_serializes_flat() {
        let numbered = NumberedHeading {
            heading: HeadingEntry::new("Setup", "setup", depth(1)),
            number: "1".to_string(),
        };
        let value = serde_json::to_value(&numbered).unwrap();
        assert_eq!(value["text"], "Setup");
        assert_eq!(value["number"], "1");
        assert_eq!(value["depth"], 1);
    }
}
