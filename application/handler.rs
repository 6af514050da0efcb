use serde_json::Value;
use tracing::{error, info, warn};

use crate::app_state::SyncContext;
use crate::directory::IdentityDirectory;
use crate::error::AppResult;
use crate::models::event::SyncEvent;
use crate::models::sync::SyncResponse;
use crate::sync::sync_user_groups;
use crate::user_pool::UserPool;

/// Runs one sync for a raw invocation event.
///
/// Only a malformed event is an error. Failed lookups and mutations are
/// logged and still produce a response.
pub async fn handle_event<D, P>(ctx: &SyncContext<D, P>, event: Value) -> AppResult<SyncResponse>
where
    D: IdentityDirectory,
    P: UserPool,
{
    info!("group sync triggered: {}", event);
    let sync_event = match SyncEvent::from_value(event) {
        Ok(sync_event) => sync_event,
        Err(err) => {
            let error_message = err.to_string();
            error!(error_message, "failed to parse sync event");
            return Err(err);
        }
    };

    let report = sync_user_groups(ctx, &sync_event.user_ref()).await;
    if !report.is_complete() {
        let failed_steps: Vec<String> = report
            .failures
            .iter()
            .map(|failure| failure.step.to_string())
            .collect();
        warn!(?failed_steps, "group sync was incomplete");
    }

    Ok(report.response())
}
