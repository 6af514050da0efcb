use std::str::FromStr;

use crate::error::{AppError, AppResult};

pub const USER_POOL_ID_VAR: &str = "USER_POOL_ID";
pub const ADMIN_GROUP_VAR: &str = "TEAM_ADMIN_GROUP";
pub const AUDITOR_GROUP_VAR: &str = "TEAM_AUDITOR_GROUP";
pub const REMOVAL_POLICY_VAR: &str = "GROUP_REMOVAL_POLICY";
pub const IDENTITY_STORE_ID_VAR: &str = "IDENTITY_STORE_ID";

/// How stale role assignments are removed after the memberships were applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RemovalPolicy {
    /// Remove "Admin" if it is missing, otherwise remove "Auditors" if that
    /// is missing. At most one removal per sync.
    #[default]
    FirstMissing,
    /// Remove every role that is missing.
    EachMissing,
}

impl FromStr for RemovalPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_missing" => Ok(RemovalPolicy::FirstMissing),
            "each_missing" => Ok(RemovalPolicy::EachMissing),
            _ => Err(AppError::InvalidConfig {
                name: REMOVAL_POLICY_VAR,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncConfig {
    pub user_pool_id: String,
    /// Identity Center display name of the group granting "Admin".
    pub admin_group: String,
    /// Identity Center display name of the group granting "Auditors".
    pub auditor_group: String,
    pub removal_policy: RemovalPolicy,
    /// Skips the `ListInstances` call when set.
    pub identity_store_id: Option<String>,
}

impl SyncConfig {
    pub fn new_from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(AppError::MissingConfig(name))
        };

        let removal_policy = match lookup(REMOVAL_POLICY_VAR) {
            Some(value) if !value.is_empty() => value.parse()?,
            _ => RemovalPolicy::default(),
        };

        Ok(Self {
            user_pool_id: required(USER_POOL_ID_VAR)?,
            admin_group: required(ADMIN_GROUP_VAR)?,
            auditor_group: required(AUDITOR_GROUP_VAR)?,
            removal_policy,
            identity_store_id: lookup(IDENTITY_STORE_ID_VAR).filter(|value| !value.is_empty()),
        })
    }
}
