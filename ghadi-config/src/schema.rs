//! Configuration document model and load-time validation

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use ghadi_proto::SettingsUpdate;

/// One descriptor in a configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaItem {
    /// Static heading text
    #[serde(rename_all = "camelCase")]
    Heading { default_value: String },

    /// Static body text
    #[serde(rename_all = "camelCase")]
    Text { default_value: String },

    /// Grouping container
    Section { items: Vec<SchemaItem> },

    /// Named boolean setting; the form posts back under `message_key`
    #[serde(rename_all = "camelCase")]
    Toggle {
        message_key: String,
        label: String,
        default_value: bool,
    },

    /// Terminal submit-button label
    #[serde(rename_all = "camelCase")]
    Submit { default_value: String },
}

impl SchemaItem {
    pub fn heading(text: &str) -> Self {
        Self::Heading { default_value: text.to_string() }
    }

    pub fn text(text: &str) -> Self {
        Self::Text { default_value: text.to_string() }
    }

    pub fn section(items: Vec<SchemaItem>) -> Self {
        Self::Section { items }
    }

    pub fn toggle(message_key: &str, label: &str, default_value: bool) -> Self {
        Self::Toggle {
            message_key: message_key.to_string(),
            label: label.to_string(),
            default_value,
        }
    }

    pub fn submit(label: &str) -> Self {
        Self::Submit { default_value: label.to_string() }
    }
}

/// Error from the load-time document check
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SchemaError {
    #[error("duplicate messageKey: {key}")]
    DuplicateMessageKey { key: String },
}

/// A configuration document for one watchface skin
///
/// Serializes as the bare JSON array the web view renderer expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigSchema {
    pub items: Vec<SchemaItem>,
}

impl ConfigSchema {
    pub fn new(items: Vec<SchemaItem>) -> Self {
        Self { items }
    }

    /// Parse a document from its JSON form
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }

    /// The document as the web view renderer expects it
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("schema documents are plain data")
    }

    /// Load-time shape check: every toggle's `messageKey` must be unique
    /// within the document, sections included. Anything beyond that is the
    /// renderer's concern.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for (key, _) in self.toggle_defaults() {
            if !seen.insert(key.clone()) {
                return Err(SchemaError::DuplicateMessageKey { key });
            }
        }
        Ok(())
    }

    /// Every toggle's `(messageKey, default)` in document order,
    /// descending into sections
    pub fn toggle_defaults(&self) -> Vec<(String, bool)> {
        fn walk(items: &[SchemaItem], out: &mut Vec<(String, bool)>) {
            for item in items {
                match item {
                    SchemaItem::Toggle { message_key, default_value, .. } => {
                        out.push((message_key.clone(), *default_value));
                    }
                    SchemaItem::Section { items } => walk(items, out),
                    _ => {}
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.items, &mut out);
        out
    }

    /// A settings update carrying the document's defaults, for relaying
    /// before the user has ever opened the configuration page
    pub fn default_settings(&self) -> SettingsUpdate {
        let mut update = SettingsUpdate::new();
        for (key, value) in self.toggle_defaults() {
            update.set(&key, value);
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> ConfigSchema {
        ConfigSchema::new(vec![
            SchemaItem::heading("Test Configuration"),
            SchemaItem::section(vec![
                SchemaItem::heading("Features"),
                SchemaItem::toggle("ShowDate", "Show Date", true),
                SchemaItem::toggle("Inverted", "White Background", false),
            ]),
            SchemaItem::submit("Save Settings"),
        ])
    }

    #[test]
    fn validate_accepts_unique_keys() {
        assert_eq!(document().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_duplicate_keys_across_sections() {
        let doc = ConfigSchema::new(vec![
            SchemaItem::section(vec![SchemaItem::toggle("Inverted", "White Background", false)]),
            SchemaItem::section(vec![SchemaItem::toggle("Inverted", "Invert Colors", true)]),
        ]);

        assert_eq!(
            doc.validate(),
            Err(SchemaError::DuplicateMessageKey { key: "Inverted".to_string() })
        );
    }

    #[test]
    fn toggle_defaults_in_document_order() {
        assert_eq!(
            document().toggle_defaults(),
            vec![("ShowDate".to_string(), true), ("Inverted".to_string(), false)]
        );
    }

    #[test]
    fn serializes_to_renderer_shape() {
        let json = document().to_json();

        assert_eq!(
            json,
            serde_json::json!([
                { "type": "heading", "defaultValue": "Test Configuration" },
                {
                    "type": "section",
                    "items": [
                        { "type": "heading", "defaultValue": "Features" },
                        {
                            "type": "toggle",
                            "messageKey": "ShowDate",
                            "label": "Show Date",
                            "defaultValue": true
                        },
                        {
                            "type": "toggle",
                            "messageKey": "Inverted",
                            "label": "White Background",
                            "defaultValue": false
                        }
                    ]
                },
                { "type": "submit", "defaultValue": "Save Settings" }
            ])
        );
    }

    #[test]
    fn parses_back_from_json() {
        let doc = document();
        let parsed = ConfigSchema::from_json(&doc.to_json().to_string()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn default_settings_carry_document_defaults() {
        let update = document().default_settings();
        assert_eq!(update.get("ShowDate"), Some(true));
        assert_eq!(update.get("Inverted"), Some(false));
    }
}
