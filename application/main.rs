use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::Level;

use idc_group_sync::app_state::SyncContext;
use idc_group_sync::config::SyncConfig;
use idc_group_sync::directory::IdentityCenterDirectory;
use idc_group_sync::handler::handle_event;
use idc_group_sync::models::sync::SyncResponse;
use idc_group_sync::user_pool::CognitoUserPool;

type Context = SyncContext<IdentityCenterDirectory, CognitoUserPool>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .json()
        .init();

    let config = SyncConfig::new_from_env()?;
    let aws_config = aws_config::load_from_env().await;
    let directory = IdentityCenterDirectory::from_config(&aws_config);
    let user_pool = CognitoUserPool::from_config(&aws_config, config.user_pool_id.clone());
    let ctx = SyncContext::new(config, directory, user_pool);

    let ctx = &ctx;
    let func = service_fn(move |event| func(ctx, event));
    lambda_runtime::run(func).await?;
    Ok(())
}

async fn func(ctx: &Context, event: LambdaEvent<Value>) -> Result<SyncResponse, Error> {
    let (event, _context) = event.into_parts();
    Ok(handle_event(ctx, event).await?)
}
