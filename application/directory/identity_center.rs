use aws_config::SdkConfig;
use aws_sdk_identitystore::types::{AlternateIdentifier, Filter, MemberId, UniqueAttribute};
use aws_sdk_identitystore::Client as IdentityStoreClient;
use aws_sdk_ssoadmin::Client as SsoAdminClient;
use aws_smithy_types::Document;
use tracing::info;

use crate::directory::IdentityDirectory;
use crate::error::{AppError, AppResult};
use crate::models::membership::MembershipPage;

const USER_NAME_ATTRIBUTE: &str = "UserName";
const DISPLAY_NAME_ATTRIBUTE: &str = "DisplayName";

#[derive(Clone)]
pub struct IdentityCenterDirectory {
    sso_admin: SsoAdminClient,
    identity_store: IdentityStoreClient,
}

impl IdentityCenterDirectory {
    pub fn new(sso_admin: SsoAdminClient, identity_store: IdentityStoreClient) -> Self {
        Self {
            sso_admin,
            identity_store,
        }
    }

    pub fn from_config(aws_config: &SdkConfig) -> Self {
        Self::new(
            SsoAdminClient::new(aws_config),
            IdentityStoreClient::new(aws_config),
        )
    }
}

#[async_trait::async_trait]
impl IdentityDirectory for IdentityCenterDirectory {
    async fn identity_store_id(&self) -> AppResult<String> {
        let output = self.sso_admin.list_instances().send().await?;

        let identity_store_id = output
            .instances()
            .first()
            .and_then(|instance| instance.identity_store_id())
            .ok_or(AppError::IdentityStoreNotFound)?;
        info!(identity_store_id, "resolved identity store");

        Ok(identity_store_id.to_string())
    }

    #[allow(deprecated)]
    async fn find_user_id(
        &self,
        identity_store_id: &str,
        username: &str,
    ) -> AppResult<Option<String>> {
        let filter = Filter::builder()
            .attribute_path(USER_NAME_ATTRIBUTE)
            .attribute_value(username)
            .build()?;
        let output = self
            .identity_store
            .list_users()
            .identity_store_id(identity_store_id)
            .filters(filter)
            .send()
            .await?;

        Ok(output
            .users()
            .first()
            .map(|user| user.user_id().to_string()))
    }

    async fn find_group_id(
        &self,
        identity_store_id: &str,
        display_name: &str,
    ) -> AppResult<String> {
        let attribute = UniqueAttribute::builder()
            .attribute_path(DISPLAY_NAME_ATTRIBUTE)
            .attribute_value(Document::String(display_name.to_string()))
            .build()?;
        let output = self
            .identity_store
            .get_group_id()
            .identity_store_id(identity_store_id)
            .alternate_identifier(AlternateIdentifier::UniqueAttribute(attribute))
            .send()
            .await?;

        Ok(output.group_id().to_string())
    }

    async fn list_group_memberships(
        &self,
        identity_store_id: &str,
        user_id: &str,
        next_token: Option<String>,
    ) -> AppResult<MembershipPage> {
        let output = self
            .identity_store
            .list_group_memberships_for_member()
            .identity_store_id(identity_store_id)
            .member_id(MemberId::UserId(user_id.to_string()))
            .set_next_token(next_token)
            .send()
            .await?;

        let group_ids = output
            .group_memberships()
            .iter()
            .filter_map(|membership| membership.group_id())
            .map(str::to_string)
            .collect();

        Ok(MembershipPage {
            group_ids,
            next_token: output.next_token().map(str::to_string),
        })
    }
}
