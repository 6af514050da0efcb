use idc_group_sync::app_state::SyncContext;
use idc_group_sync::config::{RemovalPolicy, SyncConfig};

use crate::common::memory_directory::MemoryDirectory;
use crate::common::memory_user_pool::MemoryUserPool;

pub const ADMIN_GROUP_NAME: &str = "team-admins";
pub const AUDITOR_GROUP_NAME: &str = "team-auditors";
pub const ADMIN_GROUP_ID: &str = "g-admin";
pub const AUDITOR_GROUP_ID: &str = "g-auditor";

pub type TestContext = SyncContext<MemoryDirectory, MemoryUserPool>;

pub fn build_config(removal_policy: RemovalPolicy) -> SyncConfig {
    SyncConfig {
        user_pool_id: "eu-west-1_test".to_string(),
        admin_group: ADMIN_GROUP_NAME.to_string(),
        auditor_group: AUDITOR_GROUP_NAME.to_string(),
        removal_policy,
        identity_store_id: None,
    }
}

/// A directory with both role groups and a user `alice` (`u-alice`).
pub fn build_directory() -> MemoryDirectory {
    MemoryDirectory::default()
        .with_group(ADMIN_GROUP_NAME, ADMIN_GROUP_ID)
        .with_group(AUDITOR_GROUP_NAME, AUDITOR_GROUP_ID)
        .with_user("alice", "u-alice")
}

pub fn build_context(directory: MemoryDirectory) -> TestContext {
    build_context_with_policy(directory, RemovalPolicy::FirstMissing)
}

pub fn build_context_with_policy(
    directory: MemoryDirectory,
    removal_policy: RemovalPolicy,
) -> TestContext {
    SyncContext::new(
        build_config(removal_policy),
        directory,
        MemoryUserPool::default(),
    )
}
