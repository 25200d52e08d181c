// ── Full resync application logic ──
//
// Applies a complete group tree to the store: groups are replaced
// wholesale and the flat collection and coin stores are rebuilt from
// the nested aggregates.

use chrono::Utc;
use tracing::{debug, info};

use super::CatalogStore;
use crate::model::{Coin, Collection, Group};

/// Walk a group tree and collect every nested collection and coin.
///
/// Entities are copied as-is. Back-references are never filled in from
/// the nesting position.
pub fn flatten_groups(groups: &[Group]) -> (Vec<Collection>, Vec<Coin>) {
    let collections: Vec<Collection> = groups
        .iter()
        .flat_map(|g| g.collections().iter().cloned())
        .collect();
    let coins: Vec<Coin> = collections
        .iter()
        .flat_map(|c| c.coins().iter().cloned())
        .collect();
    (collections, coins)
}

impl CatalogStore {
    /// Replace all three stores from a complete group tree.
    pub(crate) fn apply_group_tree(&self, groups: Vec<Group>) {
        let (collections, coins) = flatten_groups(&groups);
        let counts = (groups.len(), collections.len(), coins.len());

        self.groups.replace_all(groups);
        self.collections.replace_all(collections);
        self.coins.replace_all(coins);
        self.last_full_resync.send_replace(Some(Utc::now()));

        debug!(
            groups = counts.0,
            collections = counts.1,
            coins = counts.2,
            "group tree applied"
        );
        info!(groups = counts.0, "catalog resynced");
    }
}
