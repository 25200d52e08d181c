//! Group command handlers.

use std::sync::Arc;

use coinly_core::{
    Catalog, Command as CoreCommand, CreateGroupRequest, EntityId, Group, UpdateGroupRequest,
};
use tabled::Tabled;

use crate::cli::{GlobalOpts, GroupsArgs, GroupsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Collections")]
    collections: usize,
    #[tabled(rename = "Coins")]
    coins: usize,
}

fn row(catalog: &Catalog, g: &Arc<Group>) -> GroupRow {
    let store = catalog.store();
    let collections = store.collections_in_group(&g.id);
    GroupRow {
        id: g.id.to_string(),
        name: g.name.clone(),
        collections: collections.len(),
        coins: collections
            .iter()
            .map(|c| store.coins_in_collection(&c.id).len())
            .sum(),
    }
}

fn detail(catalog: &Catalog, g: &Arc<Group>) -> String {
    let mut lines = vec![format!("ID:          {}", g.id), format!("Name:        {}", g.name)];
    let collections = catalog.store().collections_in_group(&g.id);
    if collections.is_empty() {
        lines.push("Collections: -".into());
    } else {
        lines.push("Collections:".into());
        for c in &collections {
            lines.push(format!("  {} ({})", c.name, c.id));
        }
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    catalog: &Catalog,
    args: GroupsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let store = catalog.store();

    match args.command {
        GroupsCommand::List => {
            let snap = store.groups_snapshot();
            let out = output::render_list(
                &global.output,
                &snap,
                |g| row(catalog, g),
                |g| g.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        GroupsCommand::Get { id } => {
            let group = store
                .group_by_id(&EntityId::from(id.as_str()))
                .ok_or_else(|| CliError::not_found("group", &id))?;
            let out = output::render_single(
                &global.output,
                &group,
                |g| detail(catalog, g),
                |g| g.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        GroupsCommand::Create { name, collections } => {
            let before = util::id_set(&store.groups_snapshot());
            let req = CreateGroupRequest {
                name,
                collections: collections.into_iter().map(EntityId::from).collect(),
            };
            util::execute(catalog, CoreCommand::CreateGroup(req)).await?;

            match util::first_new(&before, &store.groups_snapshot()) {
                Some(group) => {
                    let out = output::render_single(
                        &global.output,
                        &group,
                        |g| detail(catalog, g),
                        |g| g.id.to_string(),
                    );
                    output::print_output(&out, global.quiet);
                }
                None if !global.quiet => eprintln!("Group created"),
                None => {}
            }
            Ok(())
        }

        GroupsCommand::Rename { id, name } => {
            util::execute(
                catalog,
                CoreCommand::UpdateGroup {
                    id: EntityId::from(id),
                    update: UpdateGroupRequest { name },
                },
            )
            .await?;
            if !global.quiet {
                eprintln!("Group renamed");
            }
            Ok(())
        }

        GroupsCommand::Delete { id } => {
            let label = store
                .group_by_id(&EntityId::from(id.as_str()))
                .map_or_else(|| id.clone(), |g| g.name.clone());
            if !util::confirm(
                &format!("Delete group '{label}' and everything in it?"),
                global.yes,
            )? {
                return Ok(());
            }
            util::execute(
                catalog,
                CoreCommand::DeleteGroup {
                    id: EntityId::from(id),
                },
            )
            .await?;
            if !global.quiet {
                eprintln!("Group deleted");
            }
            Ok(())
        }
    }
}
