use serde::Serialize;
use std::fmt;

use crate::error::AppError;
use crate::models::role::Role;

/// The record returned to the caller of the sync function.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    pub groups: Vec<Role>,
    pub user_id: Option<String>,
    pub group_ids: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncStep {
    IdentityStore,
    UserLookup,
    GroupLookup(Role),
    Memberships,
    AddToGroup(Role),
    RemoveFromGroup(Role),
}

impl fmt::Display for SyncStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStep::IdentityStore => f.write_str("identity_store"),
            SyncStep::UserLookup => f.write_str("user_lookup"),
            SyncStep::GroupLookup(role) => write!(f, "group_lookup:{}", role),
            SyncStep::Memberships => f.write_str("memberships"),
            SyncStep::AddToGroup(role) => write!(f, "add_to_group:{}", role),
            SyncStep::RemoveFromGroup(role) => write!(f, "remove_from_group:{}", role),
        }
    }
}

#[derive(Debug)]
pub struct StepFailure {
    pub step: SyncStep,
    pub error: AppError,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Add(Role),
    Remove(Role),
}

/// Everything that happened during one sync, including the steps that failed.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub groups: Vec<Role>,
    pub user_id: Option<String>,
    pub group_ids: Vec<String>,
    /// Pool mutations that were attempted, in the order they were issued.
    pub mutations: Vec<Mutation>,
    pub failures: Vec<StepFailure>,
}

impl SyncReport {
    /// True when every lookup and mutation succeeded, so an empty `groups`
    /// really means the user holds no roles.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed(&self, step: SyncStep) -> bool {
        self.failures.iter().any(|failure| failure.step == step)
    }

    pub fn response(&self) -> SyncResponse {
        SyncResponse {
            groups: self.groups.clone(),
            user_id: self.user_id.clone(),
            group_ids: self.group_ids.clone(),
        }
    }

    pub(crate) fn record_failure(&mut self, step: SyncStep, error: AppError) {
        self.failures.push(StepFailure { step, error });
    }
}
