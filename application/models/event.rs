use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Prefix the identity provider puts in front of Identity Center usernames.
pub const IDC_USERNAME_PREFIX: &str = "idc_";

#[derive(Clone, Debug, Deserialize)]
pub struct SyncEvent {
    pub identity: Identity,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Identity {
    pub username: String,
}

impl SyncEvent {
    pub fn from_value(event: Value) -> AppResult<Self> {
        let event: SyncEvent = serde_json::from_value(event)?;
        if event.identity.username.is_empty() {
            return Err(AppError::InvalidEvent("username is empty".to_string()));
        }

        Ok(event)
    }

    pub fn user_ref(&self) -> UserRef {
        UserRef::new(self.identity.username.clone())
    }
}

/// The authenticated username as seen by the user pool.
///
/// The user pool knows the user as `idc_<name>` while the identity store only
/// knows `<name>`, so both forms are carried around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRef {
    pool_username: String,
}

impl UserRef {
    pub fn new(pool_username: impl Into<String>) -> Self {
        Self {
            pool_username: pool_username.into(),
        }
    }

    /// Username to use for user pool group mutations.
    pub fn pool_username(&self) -> &str {
        &self.pool_username
    }

    /// Username to look up in the identity store.
    pub fn directory_username(&self) -> &str {
        self.pool_username
            .strip_prefix(IDC_USERNAME_PREFIX)
            .unwrap_or(&self.pool_username)
    }
}
