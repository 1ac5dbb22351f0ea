//! Per-skin configuration documents
//!
//! One document per watchface skin. A skin's toggle key set is a contract
//! with the on-watch application; do not rename or drop keys here without
//! shipping the matching watchface change.

use crate::{ConfigSchema, SchemaItem};

/// Names of all shipped skins
pub const SKIN_NAMES: &[&str] = &["bb8", "globe", "minimal"];

/// Look up a skin's document by name
pub fn by_name(name: &str) -> Option<ConfigSchema> {
    match name {
        "bb8" => Some(bb8()),
        "globe" => Some(globe()),
        "minimal" => Some(minimal()),
        _ => None,
    }
}

/// The BB8 watchface
pub fn bb8() -> ConfigSchema {
    ConfigSchema::new(vec![
        SchemaItem::heading("BB8 Configuration"),
        SchemaItem::text("Modify the appearance."),
        SchemaItem::section(vec![
            SchemaItem::heading("Appearance"),
            SchemaItem::toggle("Inverted", "White Background", false),
        ]),
        SchemaItem::section(vec![
            SchemaItem::heading("Features"),
            SchemaItem::toggle("Animations", "Enable Animations on shake", true),
            SchemaItem::toggle("ShowDate", "Show Date", true),
            SchemaItem::toggle("ShowHealth", "Show Health Info", false),
        ]),
        SchemaItem::submit("Save Settings"),
    ])
}

/// The rotating-globe watchface
pub fn globe() -> ConfigSchema {
    ConfigSchema::new(vec![
        SchemaItem::heading("Globe Configuration"),
        SchemaItem::text("Modify the appearance."),
        SchemaItem::section(vec![
            SchemaItem::heading("Appearance"),
            SchemaItem::toggle("Inverted", "White Background", false),
            SchemaItem::toggle("Center", "Center Globe on Location", false),
        ]),
        SchemaItem::section(vec![
            SchemaItem::heading("Features"),
            SchemaItem::toggle("Animations", "Enable Animations on shake", true),
            SchemaItem::toggle("ShowTime", "Show Time", true),
            SchemaItem::toggle("ShowBattery", "Show Battery", false),
        ]),
        SchemaItem::submit("Save Settings"),
    ])
}

/// The minimal text watchface
pub fn minimal() -> ConfigSchema {
    ConfigSchema::new(vec![
        SchemaItem::heading("Minimal Configuration"),
        SchemaItem::text("Modify the appearance."),
        SchemaItem::section(vec![
            SchemaItem::heading("Appearance"),
            SchemaItem::toggle("Inverted", "White Background", false),
            SchemaItem::toggle("Bold", "Bold Text", false),
        ]),
        SchemaItem::section(vec![
            SchemaItem::heading("Features"),
            SchemaItem::toggle("ShowDate", "Show Date", true),
            SchemaItem::toggle("ShowSteps", "Show Steps", false),
        ]),
        SchemaItem::submit("Save Settings"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_skin_document_validates() {
        for name in SKIN_NAMES {
            let doc = by_name(name).unwrap();
            assert_eq!(doc.validate(), Ok(()), "skin {name}");
        }
    }

    #[test]
    fn unknown_skin_has_no_document() {
        assert_eq!(by_name("digital"), None);
    }

    #[test]
    fn bb8_keeps_its_key_set_and_defaults() {
        // The BB8 watchface binds to exactly these keys
        assert_eq!(
            bb8().toggle_defaults(),
            vec![
                ("Inverted".to_string(), false),
                ("Animations".to_string(), true),
                ("ShowDate".to_string(), true),
                ("ShowHealth".to_string(), false),
            ]
        );
    }

    #[test]
    fn globe_keeps_its_key_set() {
        let keys: Vec<String> = globe().toggle_defaults().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["Inverted", "Center", "Animations", "ShowTime", "ShowBattery"]);
    }

    #[test]
    fn minimal_keeps_its_key_set() {
        let keys: Vec<String> = minimal().toggle_defaults().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["Inverted", "Bold", "ShowDate", "ShowSteps"]);
    }
}
