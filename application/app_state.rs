use tokio::sync::OnceCell;

use crate::config::SyncConfig;
use crate::directory::IdentityDirectory;
use crate::error::AppResult;
use crate::user_pool::UserPool;

/// Per-process state, built once at cold start and shared by all invocations.
pub struct SyncContext<D: IdentityDirectory, P: UserPool> {
    pub config: SyncConfig,
    pub directory: D,
    pub user_pool: P,
    identity_store_id: OnceCell<String>,
}

impl<D: IdentityDirectory, P: UserPool> SyncContext<D, P> {
    pub fn new(config: SyncConfig, directory: D, user_pool: P) -> Self {
        let identity_store_id = OnceCell::new_with(config.identity_store_id.clone());
        Self {
            config,
            directory,
            user_pool,
            identity_store_id,
        }
    }

    /// Resolves the identity store ID on first use. Failures are not cached,
    /// so the next invocation tries again.
    pub async fn identity_store_id(&self) -> AppResult<&str> {
        let identity_store_id = self
            .identity_store_id
            .get_or_try_init(|| self.directory.identity_store_id())
            .await?;

        Ok(identity_store_id.as_str())
    }
}
