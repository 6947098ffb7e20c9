use crate::{AuthError, Result as AuthErrorResult};

use cr_core::ErrorLocation;

use std::panic::Location;

use uuid::Uuid;

/// Allow a write only when `actor` is the resource's `owner`.
#[track_caller]
pub fn ensure_owner(actor: Uuid, owner: Uuid, action: &str) -> AuthErrorResult<()> {
    if actor == owner {
        return Ok(());
    }

    Err(AuthError::NotOwner {
        action: action.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
