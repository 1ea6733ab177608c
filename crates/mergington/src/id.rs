//! Typed identifiers for the Mergington activities application.
//!
//! Activities are keyed by their human readable name and participants by
//! their school email. Both are plain strings on the wire, but are kept as
//! distinct types so an email can never be used to look up an activity.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A type-safe wrapper around string identifiers.
///
/// The marker type `T` only exists at compile time and prevents mixing
/// identifiers of different entities.
pub struct Id<T> {
    value: String,
    _phantom: std::marker::PhantomData<T>,
}

// Manual impls so the marker type does not need to implement these traits.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::from_string(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// Serialize as just a string
impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_string(value))
    }
}

impl<T> Id<T> {
    /// Creates a new ID with the given value.
    ///
    /// # Example
    /// ```
    /// use mergington::id::ActivityName;
    ///
    /// let name = ActivityName::from_string("Chess Club".to_string());
    /// assert_eq!(name.as_str(), "Chess Club");
    /// ```
    pub fn from_string(value: String) -> Self {
        Self {
            value,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the string value of the ID.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value.to_string())
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// Allows map lookups keyed by `Id<T>` with a plain `&str`.
impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        &self.value
    }
}

// Type markers for different entity types
#[derive(Debug)]
pub struct ActivityMarker;

#[derive(Debug)]
pub struct ParticipantMarker;

/// The unique, human readable name of an activity, e.g. `"Chess Club"`.
pub type ActivityName = Id<ActivityMarker>;

/// A participant identifier. Treated as an opaque email string, the format
/// is not validated.
pub type ParticipantEmail = Id<ParticipantMarker>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_id_creation() {
        let id = ActivityName::from_string("Drama Club".to_string());
        assert_eq!(id.as_str(), "Drama Club");
        assert_eq!(id.to_string(), "Drama Club");
        assert_eq!(format!("{id:?}"), "Id(Drama Club)");
    }

    #[test]
    fn test_id_from_str() {
        let id: ParticipantEmail = "lisa@mergington.edu".into();
        assert_eq!(id.as_str(), "lisa@mergington.edu");
    }

    #[test]
    fn test_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(ActivityName::from("Art Studio"), 18);

        assert_eq!(map.get("Art Studio"), Some(&18));
        assert_eq!(map.get("Art"), None);
    }

    #[test]
    fn test_serde() {
        let original = ParticipantEmail::from("maria@mergington.edu");

        let serialized = serde_json::to_string(&original).unwrap();
        assert_eq!(serialized, "\"maria@mergington.edu\"");

        let deserialized: ParticipantEmail = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }
}
