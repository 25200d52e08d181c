//! Shared helpers for command handlers.

use std::collections::HashSet;
use std::sync::Arc;

use coinly_core::{Catalog, Command as CoreCommand, Entity, EntityId};

use crate::error::CliError;

/// Run one catalog command, turning a `false` outcome into the
/// message recorded in that kind's error slot.
pub async fn execute(catalog: &Catalog, cmd: CoreCommand) -> Result<(), CliError> {
    let kind = cmd.kind();
    tracing::debug!(%kind, "executing catalog command");
    if catalog.execute(cmd).await {
        return Ok(());
    }
    let message = catalog
        .store()
        .error(kind)
        .unwrap_or_else(|| format!("{kind} operation failed"));
    Err(CliError::Operation { message })
}

/// Ids currently held in a snapshot.
pub fn id_set<T: Entity>(snapshot: &[Arc<T>]) -> HashSet<EntityId> {
    snapshot.iter().map(|e| e.id().clone()).collect()
}

/// The first entity in `snapshot` whose id is not in `before`.
///
/// Mutations report only success, so handlers diff the store around a
/// create to find what the server assigned.
pub fn first_new<T: Entity>(before: &HashSet<EntityId>, snapshot: &[Arc<T>]) -> Option<Arc<T>> {
    snapshot.iter().find(|e| !before.contains(e.id())).cloned()
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}
