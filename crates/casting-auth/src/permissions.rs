use casting_core::AuthError;

use crate::claims::Claims;

/// Confirms the verified payload grants `permission`.
pub fn check_permissions(permission: &str, claims: &Claims) -> Result<(), AuthError> {
    let granted = claims
        .permissions
        .as_ref()
        .ok_or(AuthError::PermissionsClaimMissing)?;

    if !granted.iter().any(|p| p == permission) {
        return Err(AuthError::Unauthorized(permission.to_string()));
    }

    Ok(())
}
