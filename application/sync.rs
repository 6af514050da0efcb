//! Brings a user's pool groups in line with their Identity Center groups.
//!
//! Every collaborator call is allowed to fail. A failed step is logged and
//! recorded in the [`SyncReport`], and the sync carries on with whatever it
//! could resolve.
use tracing::{info, warn};

use crate::app_state::SyncContext;
use crate::config::RemovalPolicy;
use crate::directory::IdentityDirectory;
use crate::error::{AppError, AppResult};
use crate::models::event::UserRef;
use crate::models::role::Role;
use crate::models::sync::{Mutation, SyncReport, SyncStep};
use crate::user_pool::UserPool;

pub async fn sync_user_groups<D, P>(ctx: &SyncContext<D, P>, user: &UserRef) -> SyncReport
where
    D: IdentityDirectory,
    P: UserPool,
{
    let mut report = SyncReport::default();
    info!(
        username = user.pool_username(),
        directory_username = user.directory_username(),
        "syncing groups"
    );

    let mut admin_group_id = None;
    let mut auditor_group_id = None;
    let mut memberships = None;

    match ctx.identity_store_id().await {
        Ok(identity_store_id) => {
            let user_id = resolve_user_id(ctx, identity_store_id, user, &mut report).await;
            report.user_id = user_id;
            admin_group_id =
                resolve_group_id(ctx, identity_store_id, Role::Admin, &mut report).await;
            auditor_group_id =
                resolve_group_id(ctx, identity_store_id, Role::Auditors, &mut report).await;

            if let Some(user_id) = report.user_id.clone() {
                match list_all_memberships(&ctx.directory, identity_store_id, &user_id).await {
                    Ok(group_ids) => memberships = Some(group_ids),
                    Err(err) => fail(&mut report, SyncStep::Memberships, err),
                }
            }
        }
        Err(err) => fail(&mut report, SyncStep::IdentityStore, err),
    }

    let Some(group_ids) = memberships else {
        warn!(
            username = user.pool_username(),
            "memberships unknown, leaving existing groups in place"
        );
        return report;
    };

    for group_id in group_ids {
        let role = if admin_group_id.as_deref() == Some(group_id.as_str()) {
            Some(Role::Admin)
        } else if auditor_group_id.as_deref() == Some(group_id.as_str()) {
            Some(Role::Auditors)
        } else {
            None
        };
        report.group_ids.push(group_id);

        if let Some(role) = role {
            add_to_group(ctx, user, role, &mut report).await;
            report.groups.push(role);
        }
    }

    for role in stale_roles(ctx.config.removal_policy, &report.groups) {
        remove_from_group(ctx, user, role, &mut report).await;
    }

    info!(
        username = user.pool_username(),
        groups = ?report.groups,
        complete = report.is_complete(),
        "group sync finished"
    );
    report
}

/// Roles to strip from the user after applying their current memberships.
///
/// With [`RemovalPolicy::FirstMissing`] only the first missing role in
/// `[Admin, Auditors]` order is returned, so a user holding neither role
/// keeps a stale "Auditors" assignment.
pub fn stale_roles(policy: RemovalPolicy, held: &[Role]) -> Vec<Role> {
    let mut missing = Role::ALL.into_iter().filter(|role| !held.contains(role));
    match policy {
        RemovalPolicy::FirstMissing => missing.next().into_iter().collect(),
        RemovalPolicy::EachMissing => missing.collect(),
    }
}

/// Follows pagination tokens until the listing is exhausted. Pages are
/// concatenated as returned, without deduplication.
pub async fn list_all_memberships<D: IdentityDirectory + ?Sized>(
    directory: &D,
    identity_store_id: &str,
    user_id: &str,
) -> AppResult<Vec<String>> {
    let mut group_ids = Vec::new();
    let mut next_token = None;
    loop {
        let page = directory
            .list_group_memberships(identity_store_id, user_id, next_token)
            .await?;
        group_ids.extend(page.group_ids);

        match page.next_token {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }

    Ok(group_ids)
}

async fn resolve_user_id<D: IdentityDirectory, P: UserPool>(
    ctx: &SyncContext<D, P>,
    identity_store_id: &str,
    user: &UserRef,
    report: &mut SyncReport,
) -> Option<String> {
    let username = user.directory_username();
    match ctx.directory.find_user_id(identity_store_id, username).await {
        Ok(Some(user_id)) => Some(user_id),
        Ok(None) => {
            fail(
                report,
                SyncStep::UserLookup,
                AppError::UserNotFound(username.to_string()),
            );
            None
        }
        Err(err) => {
            fail(report, SyncStep::UserLookup, err);
            None
        }
    }
}

async fn resolve_group_id<D: IdentityDirectory, P: UserPool>(
    ctx: &SyncContext<D, P>,
    identity_store_id: &str,
    role: Role,
    report: &mut SyncReport,
) -> Option<String> {
    let display_name = match role {
        Role::Admin => &ctx.config.admin_group,
        Role::Auditors => &ctx.config.auditor_group,
    };
    match ctx
        .directory
        .find_group_id(identity_store_id, display_name)
        .await
    {
        Ok(group_id) => Some(group_id),
        Err(err) => {
            fail(report, SyncStep::GroupLookup(role), err);
            None
        }
    }
}

async fn add_to_group<D: IdentityDirectory, P: UserPool>(
    ctx: &SyncContext<D, P>,
    user: &UserRef,
    role: Role,
    report: &mut SyncReport,
) {
    report.mutations.push(Mutation::Add(role));
    if let Err(err) = ctx
        .user_pool
        .add_user_to_group(user.pool_username(), role.group_name())
        .await
    {
        fail(report, SyncStep::AddToGroup(role), err);
    }
}

async fn remove_from_group<D: IdentityDirectory, P: UserPool>(
    ctx: &SyncContext<D, P>,
    user: &UserRef,
    role: Role,
    report: &mut SyncReport,
) {
    report.mutations.push(Mutation::Remove(role));
    if let Err(err) = ctx
        .user_pool
        .remove_user_from_group(user.pool_username(), role.group_name())
        .await
    {
        fail(report, SyncStep::RemoveFromGroup(role), err);
    }
}

fn fail(report: &mut SyncReport, step: SyncStep, err: AppError) {
    let error_message = err.to_string();
    warn!(%step, error_message, "group sync step failed");
    report.record_failure(step, err);
}
