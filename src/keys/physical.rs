//! Physical Key Module
//!
//! The string actually handed to the external store, tagged with its form.

use std::fmt;

use serde::{Serialize, Serializer};

// == Key Form ==
/// Which construction path produced a physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyForm {
    /// `NH_<prefix><key>`, readable as-is
    Unhashed,
    /// `H_<digest>_<truncated NH_ form>`
    Hashed,
}

impl KeyForm {
    /// Name used in logs and JSON responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyForm::Unhashed => "unhashed",
            KeyForm::Hashed => "hashed",
        }
    }
}

impl fmt::Display for KeyForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for KeyForm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// == Physical Key ==
/// A key ready to address an entry in the external store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhysicalKey {
    value: String,
    form: KeyForm,
}

impl PhysicalKey {
    pub(crate) fn unhashed(value: String) -> Self {
        Self {
            value,
            form: KeyForm::Unhashed,
        }
    }

    pub(crate) fn hashed(value: String) -> Self {
        Self {
            value,
            form: KeyForm::Hashed,
        }
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the construction path that produced this key.
    pub fn form(&self) -> KeyForm {
        self.form
    }

    pub fn is_hashed(&self) -> bool {
        self.form == KeyForm::Hashed
    }

    /// Length in chars, the unit the length budget is measured in.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for PhysicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for PhysicalKey {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<PhysicalKey> for String {
    fn from(key: PhysicalKey) -> Self {
        key.value
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_key_unhashed() {
        let key = PhysicalKey::unhashed("NH_appfoo".to_string());

        assert_eq!(key.as_str(), "NH_appfoo");
        assert_eq!(key.form(), KeyForm::Unhashed);
        assert!(!key.is_hashed());
        assert_eq!(key.len(), 9);
    }

    #[test]
    fn test_physical_key_len_counts_chars() {
        let key = PhysicalKey::unhashed("NH_é".to_string());

        assert_eq!(key.len(), 4);
        assert_eq!(key.as_str().len(), 5);
    }

    #[test]
    fn test_physical_key_display_and_into_string() {
        let key = PhysicalKey::hashed("H_abc_NH_x".to_string());

        assert_eq!(key.to_string(), "H_abc_NH_x");
        assert!(key.is_hashed());
        assert_eq!(String::from(key), "H_abc_NH_x");
    }

    #[test]
    fn test_key_form_serialize() {
        let json = serde_json::to_string(&KeyForm::Hashed).unwrap();
        assert_eq!(json, r#""hashed""#);
        assert_eq!(KeyForm::Unhashed.as_str(), "unhashed");
    }

    #[test]
    fn test_key_form_display_matches_json() {
        for form in [KeyForm::Unhashed, KeyForm::Hashed] {
            let json = serde_json::to_string(&form).unwrap();
            assert_eq!(json, format!("\"{}\"", form));
        }
    }

    #[test]
    fn test_physical_key_usable_in_hash_set() {
        use std::collections::HashSet;

        let mut keys = HashSet::new();
        keys.insert(PhysicalKey::unhashed("NH_a".to_string()));
        keys.insert(PhysicalKey::unhashed("NH_a".to_string()));
        keys.insert(PhysicalKey::hashed("NH_a".to_string()));

        assert_eq!(keys.len(), 2);
    }
}
