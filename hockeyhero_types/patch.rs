//! Tri-state wrapper for attributes of a partial update payload.
//!
//! A JSON object can omit a key, set it to `null`, or give it a value. Patch
//! payloads wrap every mergeable attribute in [`Patch`] and declare the field
//! `#[serde(default)]`, so a missing key deserializes to [`Patch::Missing`] and
//! an explicit `null` to [`Patch::Null`]. Only [`Patch::Value`] is merged: a
//! partial update never clears a stored attribute.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Missing,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<T> Patch<T> {
    /// Writes the patched value into `target`. Missing and null keep the stored value.
    pub fn apply_to(self, target: &mut Option<T>) {
        if let Patch::Value(value) = self {
            *target = Some(value);
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        }
    }
}

// Only reached when the key is present, absence goes through `Default`.
impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default)]
        city: Patch<String>,
    }

    #[test]
    fn test_missing_key_keeps_value() {
        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.city, Patch::Missing);

        let mut city = Some("Montreal".to_string());
        payload.city.apply_to(&mut city);
        assert_eq!(city.as_deref(), Some("Montreal"));
    }

    #[test]
    fn test_null_keeps_value() {
        let payload: Payload = serde_json::from_str(r#"{"city": null}"#).unwrap();
        assert_eq!(payload.city, Patch::Null);

        let mut city = Some("Montreal".to_string());
        payload.city.apply_to(&mut city);
        assert_eq!(city.as_deref(), Some("Montreal"));
    }

    #[test]
    fn test_value_overwrites() {
        let payload: Payload = serde_json::from_str(r#"{"city": "Calgary"}"#).unwrap();

        let mut city = None;
        payload.city.apply_to(&mut city);
        assert_eq!(city.as_deref(), Some("Calgary"));
    }
}
