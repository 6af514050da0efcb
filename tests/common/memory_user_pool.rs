use async_trait::async_trait;
use tokio::sync::RwLock;

use idc_group_sync::error::{AppError, AppResult};
use idc_group_sync::user_pool::UserPool;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolCall {
    Add { username: String, group: String },
    Remove { username: String, group: String },
}

#[allow(dead_code)] // not all tests use every helper
impl PoolCall {
    pub fn add(username: &str, group: &str) -> Self {
        PoolCall::Add {
            username: username.to_string(),
            group: group.to_string(),
        }
    }

    pub fn remove(username: &str, group: &str) -> Self {
        PoolCall::Remove {
            username: username.to_string(),
            group: group.to_string(),
        }
    }
}

/// Records every group mutation. Mutations on `failing_group` are recorded
/// and then rejected.
#[derive(Debug, Default)]
pub struct MemoryUserPool {
    pub failing_group: Option<String>,
    calls: RwLock<Vec<PoolCall>>,
}

impl MemoryUserPool {
    pub async fn calls(&self) -> Vec<PoolCall> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: PoolCall, group_name: &str) -> AppResult<()> {
        self.calls.write().await.push(call);
        if self.failing_group.as_deref() == Some(group_name) {
            return Err(AppError::Aws(format!("group {} does not exist", group_name)));
        }

        Ok(())
    }
}

#[async_trait]
impl UserPool for MemoryUserPool {
    async fn add_user_to_group(&self, username: &str, group_name: &str) -> AppResult<()> {
        self.record(PoolCall::add(username, group_name), group_name)
            .await
    }

    async fn remove_user_from_group(&self, username: &str, group_name: &str) -> AppResult<()> {
        self.record(PoolCall::remove(username, group_name), group_name)
            .await
    }
}
