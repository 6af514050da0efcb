use aws_config::SdkConfig;
use aws_sdk_cognitoidentityprovider::Client;
use tracing::info;

use crate::error::AppResult;
use crate::user_pool::UserPool;

#[derive(Clone)]
pub struct CognitoUserPool {
    client: Client,
    user_pool_id: String,
}

impl CognitoUserPool {
    pub fn new(client: Client, user_pool_id: String) -> Self {
        Self {
            client,
            user_pool_id,
        }
    }

    pub fn from_config(aws_config: &SdkConfig, user_pool_id: String) -> Self {
        Self::new(Client::new(aws_config), user_pool_id)
    }
}

#[async_trait::async_trait]
impl UserPool for CognitoUserPool {
    async fn add_user_to_group(&self, username: &str, group_name: &str) -> AppResult<()> {
        self.client
            .admin_add_user_to_group()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .group_name(group_name)
            .send()
            .await?;

        info!(username, group_name, "user added to group");
        Ok(())
    }

    async fn remove_user_from_group(&self, username: &str, group_name: &str) -> AppResult<()> {
        self.client
            .admin_remove_user_from_group()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .group_name(group_name)
            .send()
            .await?;

        info!(username, group_name, "user removed from group");
        Ok(())
    }
}
