//! Ghadi message dictionary - keys and outbound message types
//!
//! The phone-to-watch bridge carries flat key/value dictionaries. This crate
//! defines the keys the Ghadi watchfaces bind to and the typed records the
//! companion builds before handing them to the bridge. The bridge owns the
//! wire encoding; the JSON produced here is only the handoff representation.

use serde_json::{Map, Value};

// Dictionary keys the watchface binds to
pub const KEY_LONGITUDE: &str = "KEY_LONGITUDE";
pub const KEY_LATITUDE: &str = "KEY_LATITUDE";
pub const KEY_TIMEZONE: &str = "KEY_TIMEZONE";

/// A single dictionary value as carried by the bridge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TupleValue {
    Int(i32),
    Float(f64),
    Bool(bool),
}

impl TupleValue {
    pub fn to_json(&self) -> Value {
        match *self {
            TupleValue::Int(v) => Value::from(v),
            TupleValue::Float(v) => Value::from(v),
            TupleValue::Bool(v) => Value::from(v),
        }
    }
}

/// Ordered key/value dictionary handed to the messaging bridge
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<(String, TupleValue)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Keys are not deduplicated; callers build each
    /// dictionary once from a typed record.
    pub fn push(&mut self, key: &str, value: TupleValue) {
        self.entries.push((key.to_string(), value));
    }

    pub fn get(&self, key: &str) -> Option<&TupleValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, TupleValue)> {
        self.entries.iter()
    }

    /// The JSON object the bridge is handed
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in &self.entries {
            map.insert(key.clone(), value.to_json());
        }
        Value::Object(map)
    }
}

/// Fact record relayed to the watch after a position request resolves
///
/// Always schema-complete: on acquisition failure the coordinates are the
/// `(0, 0)` sentinel while the timezone offset is still read from the local
/// clock. The watch treats zero coordinates as "no fix".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFact {
    /// Degrees; 0 on acquisition failure
    pub longitude: f64,
    /// Degrees; 0 on acquisition failure
    pub latitude: f64,
    /// Minutes the local clock is behind UTC (UTC+2 -> -120)
    pub timezone_offset_minutes: i32,
}

impl LocationFact {
    pub fn from_fix(longitude: f64, latitude: f64, timezone_offset_minutes: i32) -> Self {
        Self { longitude, latitude, timezone_offset_minutes }
    }

    /// The failure record: sentinel coordinates, real offset
    pub fn no_fix(timezone_offset_minutes: i32) -> Self {
        Self { longitude: 0.0, latitude: 0.0, timezone_offset_minutes }
    }

    /// The fixed 3-key dictionary the watchface binds to
    pub fn to_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.push(KEY_LONGITUDE, TupleValue::Float(self.longitude));
        dict.push(KEY_LATITUDE, TupleValue::Float(self.latitude));
        dict.push(KEY_TIMEZONE, TupleValue::Int(self.timezone_offset_minutes));
        dict
    }
}

/// Toggle values posted back by the configuration page
///
/// Each entry is a `messageKey` from the skin's configuration document and
/// the boolean the user chose. The watch binds to these exact keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsUpdate {
    entries: Vec<(String, bool)>,
}

impl SettingsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a toggle value, replacing an earlier entry for the same key
    pub fn set(&mut self, key: &str, value: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key.to_string(), value));
        }
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, bool)> {
        self.entries.iter()
    }

    /// Parse the JSON object the configuration web view posts back.
    /// Non-boolean members are ignored; the documents only declare toggles.
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        let map: Map<String, Value> = serde_json::from_str(data)?;
        let mut update = Self::new();
        for (key, value) in &map {
            if let Some(b) = value.as_bool() {
                update.set(key, b);
            }
        }
        Ok(update)
    }

    /// One `Bool` dictionary entry per toggle, in entry order
    pub fn to_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        for (key, value) in &self.entries {
            dict.push(key, TupleValue::Bool(*value));
        }
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_dictionary_has_all_three_keys() {
        let fact = LocationFact::from_fix(13.405, 52.52, -120);
        let dict = fact.to_dictionary();

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get(KEY_LONGITUDE), Some(&TupleValue::Float(13.405)));
        assert_eq!(dict.get(KEY_LATITUDE), Some(&TupleValue::Float(52.52)));
        assert_eq!(dict.get(KEY_TIMEZONE), Some(&TupleValue::Int(-120)));
    }

    #[test]
    fn no_fix_keeps_offset_and_zeroes_coordinates() {
        let fact = LocationFact::no_fix(300);
        let dict = fact.to_dictionary();

        assert_eq!(dict.get(KEY_LONGITUDE), Some(&TupleValue::Float(0.0)));
        assert_eq!(dict.get(KEY_LATITUDE), Some(&TupleValue::Float(0.0)));
        assert_eq!(dict.get(KEY_TIMEZONE), Some(&TupleValue::Int(300)));
    }

    #[test]
    fn dictionary_to_json_is_an_object() {
        let dict = LocationFact::from_fix(2.35, 48.85, -60).to_dictionary();
        let json = dict.to_json();

        assert_eq!(json["KEY_LONGITUDE"], 2.35);
        assert_eq!(json["KEY_LATITUDE"], 48.85);
        assert_eq!(json["KEY_TIMEZONE"], -60);
    }

    #[test]
    fn settings_update_maps_to_bool_entries() {
        let mut update = SettingsUpdate::new();
        update.set("Inverted", false);
        update.set("ShowDate", true);
        update.set("Inverted", true);

        let dict = update.to_dictionary();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("Inverted"), Some(&TupleValue::Bool(true)));
        assert_eq!(dict.get("ShowDate"), Some(&TupleValue::Bool(true)));
    }

    #[test]
    fn settings_update_parses_posted_form() {
        let update = SettingsUpdate::from_json(
            r#"{"Inverted": true, "Animations": false, "note": "ignored"}"#,
        )
        .unwrap();

        assert_eq!(update.get("Inverted"), Some(true));
        assert_eq!(update.get("Animations"), Some(false));
        assert_eq!(update.len(), 2);
    }
}
