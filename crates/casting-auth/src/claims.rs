//! Decoded token payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims of a verified access token.
///
/// `permissions` is `None` when the token carries no such claim, which is distinct
/// from an empty grant. Every other claim (`iss`, `aud`, `exp`, ...) is kept by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// Looks up a claim other than `sub` and `permissions`.
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .as_ref()
            .is_some_and(|granted| granted.iter().any(|p| p == permission))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"iss":"https://casting.us.auth0.com/","sub":"auth0|123","aud":["casting","https://casting.us.auth0.com/userinfo"],"exp":9999999999,"permissions":["get:actors","post:actors"]}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();

        assert_eq!(claims.subject(), Some("auth0|123"));
        assert_eq!(
            claims.permissions,
            Some(vec!["get:actors".to_string(), "post:actors".to_string()])
        );
        assert_eq!(
            claims.claim("iss").and_then(Value::as_str),
            Some("https://casting.us.auth0.com/")
        );
        assert_eq!(claims.claim("exp").and_then(Value::as_u64), Some(9999999999));
        assert!(claims.claim("permissions").is_none());
    }

    #[test]
    fn test_missing_permissions_is_none() {
        let claims: Claims = serde_json::from_str(r#"{"sub":"auth0|123"}"#).unwrap();
        assert!(claims.permissions.is_none());
        assert!(!claims.has_permission("get:actors"));
    }

    #[test]
    fn test_empty_permissions_is_some() {
        let claims: Claims = serde_json::from_str(r#"{"permissions":[]}"#).unwrap();
        assert_eq!(claims.permissions, Some(vec![]));
    }

    #[test]
    fn test_has_permission() {
        let claims: Claims =
            serde_json::from_str(r#"{"permissions":["get:movies"]}"#).unwrap();
        assert!(claims.has_permission("get:movies"));
        assert!(!claims.has_permission("delete:movies"));
    }
}
