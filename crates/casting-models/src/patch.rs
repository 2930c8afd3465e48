//! Partial-update field.
//!
//! Update bodies must name every field. An empty string leaves the stored value
//! alone, any other value of the right type replaces it. `null` and an absent key
//! are rejected so a required column can never be cleared.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Patch<T> {
    #[default]
    Keep,
    Set(T),
}

impl<T> Patch<T> {
    /// Overwrites `target` when a new value was supplied.
    pub fn apply_to(self, target: &mut T) {
        if let Patch::Set(value) = self {
            *target = value;
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) if s.is_empty() => Ok(Patch::Keep),
            Value::Null => Err(D::Error::custom(
                "null is not allowed, send \"\" to keep the current value",
            )),
            value => serde_json::from_value(value)
                .map(Patch::Set)
                .map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        name: Patch<String>,
        age: Patch<i32>,
    }

    #[test]
    fn test_empty_string_keeps() {
        let body: Body = serde_json::from_str(r#"{"name":"","age":""}"#).unwrap();
        assert_eq!(body.name, Patch::Keep);
        assert_eq!(body.age, Patch::Keep);
    }

    #[test]
    fn test_values_set() {
        let body: Body = serde_json::from_str(r#"{"name":"Ann","age":30}"#).unwrap();
        assert_eq!(body.name, Patch::Set("Ann".to_string()));
        assert_eq!(body.age, Patch::Set(30));
    }

    #[test]
    fn test_whitespace_is_a_value() {
        let body: Body = serde_json::from_str(r#"{"name":" ","age":""}"#).unwrap();
        assert_eq!(body.name, Patch::Set(" ".to_string()));
    }

    #[test]
    fn test_null_rejected() {
        assert!(serde_json::from_str::<Body>(r#"{"name":null,"age":""}"#).is_err());
    }

    #[test]
    fn test_absent_field_rejected() {
        assert!(serde_json::from_str::<Body>(r#"{"name":"Ann"}"#).is_err());
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(serde_json::from_str::<Body>(r#"{"name":"Ann","age":"thirty"}"#).is_err());
        assert!(serde_json::from_str::<Body>(r#"{"name":42,"age":""}"#).is_err());
    }

    #[test]
    fn test_apply_to() {
        let mut name = "Old".to_string();
        Patch::Keep.apply_to(&mut name);
        assert_eq!(name, "Old");

        Patch::Set("New".to_string()).apply_to(&mut name);
        assert_eq!(name, "New");
    }

    #[test]
    fn test_default_is_keep() {
        let mut age = 30;
        Patch::<i32>::default().apply_to(&mut age);
        assert_eq!(age, 30);
    }
}
