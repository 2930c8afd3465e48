//! `Authorization` header parsing.

use casting_core::AuthError;

/// Extracts the token from an `Authorization: Bearer <token>` header value.
///
/// The value must be exactly two space-separated parts, the first literally `Bearer`.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingHeader)?;
    let parts: Vec<&str> = header.split(' ').collect();

    if parts[0] != "Bearer" {
        return Err(AuthError::MalformedHeader(
            "Authorization header must start with \"Bearer\".".to_string(),
        ));
    }

    match parts.as_slice() {
        [_, token] if !token.is_empty() => Ok(*token),
        [_] | [_, _] => Err(AuthError::MalformedHeader("Token not found.".to_string())),
        _ => Err(AuthError::MalformedHeader(
            "Authorization header must be bearer token.".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bearer_header() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(bearer_token(None), Err(AuthError::MissingHeader));
    }

    #[test]
    fn test_wrong_scheme() {
        let err = bearer_token(Some("Token abc")).unwrap_err();
        assert!(matches!(err, AuthError::MalformedHeader(_)));
        assert_eq!(err.status().as_u16(), 401);
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        assert!(matches!(
            bearer_token(Some("bearer abc")),
            Err(AuthError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_scheme_without_token() {
        assert_eq!(
            bearer_token(Some("Bearer")),
            Err(AuthError::MalformedHeader("Token not found.".to_string()))
        );
        assert_eq!(
            bearer_token(Some("Bearer ")),
            Err(AuthError::MalformedHeader("Token not found.".to_string()))
        );
    }

    #[test]
    fn test_too_many_parts() {
        assert_eq!(
            bearer_token(Some("Bearer abc def")),
            Err(AuthError::MalformedHeader(
                "Authorization header must be bearer token.".to_string()
            ))
        );
    }

    #[test]
    fn test_empty_header() {
        assert!(matches!(
            bearer_token(Some("")),
            Err(AuthError::MalformedHeader(_))
        ));
    }
}
