use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use idc_group_sync::directory::IdentityDirectory;
use idc_group_sync::error::{AppError, AppResult};
use idc_group_sync::models::membership::MembershipPage;

pub const IDENTITY_STORE_ID: &str = "d-1234567890";

/// In-memory identity store. Memberships are stored as pages so pagination
/// can be exercised.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    pub no_instance: bool,
    pub fail_memberships_on_page: Option<usize>,
    users: HashMap<String, String>,
    groups: HashMap<String, String>,
    memberships: HashMap<String, Vec<Vec<String>>>,
    identity_store_calls: AtomicUsize,
}

#[allow(dead_code)] // not all tests use every helper
impl MemoryDirectory {
    pub fn with_user(mut self, username: &str, user_id: &str) -> Self {
        self.users.insert(username.to_string(), user_id.to_string());
        self
    }

    pub fn with_group(mut self, display_name: &str, group_id: &str) -> Self {
        self.groups
            .insert(display_name.to_string(), group_id.to_string());
        self
    }

    pub fn with_membership_pages(mut self, user_id: &str, pages: &[&[&str]]) -> Self {
        let pages = pages
            .iter()
            .map(|page| page.iter().map(|id| id.to_string()).collect())
            .collect();
        self.memberships.insert(user_id.to_string(), pages);
        self
    }

    pub fn with_memberships(self, user_id: &str, group_ids: &[&str]) -> Self {
        self.with_membership_pages(user_id, &[group_ids])
    }

    pub fn identity_store_calls(&self) -> usize {
        self.identity_store_calls.load(Ordering::SeqCst)
    }
}

fn check_store(identity_store_id: &str) -> AppResult<()> {
    if identity_store_id != IDENTITY_STORE_ID {
        return Err(AppError::Aws(format!(
            "identity store {} does not exist",
            identity_store_id
        )));
    }

    Ok(())
}

#[async_trait]
impl IdentityDirectory for MemoryDirectory {
    async fn identity_store_id(&self) -> AppResult<String> {
        self.identity_store_calls.fetch_add(1, Ordering::SeqCst);
        if self.no_instance {
            return Err(AppError::IdentityStoreNotFound);
        }

        Ok(IDENTITY_STORE_ID.to_string())
    }

    async fn find_user_id(
        &self,
        identity_store_id: &str,
        username: &str,
    ) -> AppResult<Option<String>> {
        check_store(identity_store_id)?;
        Ok(self.users.get(username).cloned())
    }

    async fn find_group_id(
        &self,
        identity_store_id: &str,
        display_name: &str,
    ) -> AppResult<String> {
        check_store(identity_store_id)?;
        self.groups
            .get(display_name)
            .cloned()
            .ok_or_else(|| AppError::Aws(format!("group {} not found", display_name)))
    }

    async fn list_group_memberships(
        &self,
        identity_store_id: &str,
        user_id: &str,
        next_token: Option<String>,
    ) -> AppResult<MembershipPage> {
        check_store(identity_store_id)?;
        let page_index = match next_token {
            Some(token) => token
                .strip_prefix("page-")
                .and_then(|index| index.parse::<usize>().ok())
                .ok_or_else(|| AppError::Aws(format!("invalid token {}", token)))?,
            None => 0,
        };
        if self.fail_memberships_on_page == Some(page_index) {
            return Err(AppError::Aws("throttled".to_string()));
        }

        let pages = self.memberships.get(user_id).cloned().unwrap_or_default();
        let group_ids = pages.get(page_index).cloned().unwrap_or_default();
        let next_token = if page_index + 1 < pages.len() {
            Some(format!("page-{}", page_index + 1))
        } else {
            None
        };

        Ok(MembershipPage {
            group_ids,
            next_token,
        })
    }
}
