use crate::error::AppResult;
use crate::models::membership::MembershipPage;

#[async_trait::async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Identity store backing the first Identity Center instance in the account.
    async fn identity_store_id(&self) -> AppResult<String>;

    /// Looks up a user by exact username. Only the first match is returned.
    async fn find_user_id(&self, identity_store_id: &str, username: &str)
        -> AppResult<Option<String>>;

    /// Looks up a group by its exact display name.
    async fn find_group_id(&self, identity_store_id: &str, display_name: &str)
        -> AppResult<String>;

    /// Fetches a single page of the groups a user is a member of.
    async fn list_group_memberships(
        &self,
        identity_store_id: &str,
        user_id: &str,
        next_token: Option<String>,
    ) -> AppResult<MembershipPage>;
}
