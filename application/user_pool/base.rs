use crate::error::AppResult;

#[async_trait::async_trait]
pub trait UserPool: Send + Sync {
    async fn add_user_to_group(&self, username: &str, group_name: &str) -> AppResult<()>;
    async fn remove_user_from_group(&self, username: &str, group_name: &str) -> AppResult<()>;
}
