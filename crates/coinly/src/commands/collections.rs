//! Collection command handlers.

use std::sync::Arc;

use coinly_core::{
    Catalog, Collection, Command as CoreCommand, CreateCollectionRequest, EntityId,
    UpdateCollectionRequest,
};
use tabled::Tabled;

use crate::cli::{CollectionsArgs, CollectionsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CollectionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Coins")]
    coins: usize,
}

fn row(catalog: &Catalog, c: &Arc<Collection>) -> CollectionRow {
    CollectionRow {
        id: c.id.to_string(),
        name: c.name.clone(),
        group: group_label(catalog, c),
        coins: catalog.store().coins_in_collection(&c.id).len(),
    }
}

fn group_label(catalog: &Catalog, c: &Collection) -> String {
    c.group_id.as_ref().map_or_else(
        || "-".into(),
        |gid| {
            catalog
                .store()
                .group_by_id(gid)
                .map_or_else(|| gid.to_string(), |g| g.name.clone())
        },
    )
}

fn detail(catalog: &Catalog, c: &Arc<Collection>) -> String {
    let mut lines = vec![
        format!("ID:     {}", c.id),
        format!("Name:   {}", c.name),
        format!("Group:  {}", group_label(catalog, c)),
    ];
    let coins = catalog.store().coins_in_collection(&c.id);
    if coins.is_empty() {
        lines.push("Coins:  -".into());
    } else {
        lines.push("Coins:".into());
        for k in &coins {
            lines.push(format!(
                "  {} {} {} ({})",
                k.year,
                k.country,
                output::format_cents(k.value),
                k.id
            ));
        }
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    catalog: &Catalog,
    args: CollectionsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let store = catalog.store();

    match args.command {
        CollectionsCommand::List { group } => {
            let snap: Vec<Arc<Collection>> = match group {
                Some(gid) => {
                    let gid = EntityId::from(gid);
                    if store.group_by_id(&gid).is_none() {
                        return Err(CliError::not_found("group", &gid.to_string()));
                    }
                    store.collections_in_group(&gid)
                }
                None => store.collections_snapshot().to_vec(),
            };
            let out = output::render_list(
                &global.output,
                &snap,
                |c| row(catalog, c),
                |c| c.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CollectionsCommand::Get { id } => {
            let collection = catalog
                .resolve_collection(&EntityId::from(id.as_str()))
                .await
                .ok_or_else(|| CliError::not_found("collection", &id))?;
            let out = output::render_single(
                &global.output,
                &collection,
                |c| detail(catalog, c),
                |c| c.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CollectionsCommand::Create { name, group } => {
            let before = util::id_set(&store.collections_snapshot());
            let req = CreateCollectionRequest {
                name,
                group_id: EntityId::from(group),
                coins: Vec::new(),
            };
            util::execute(catalog, CoreCommand::CreateCollection(req)).await?;

            match util::first_new(&before, &store.collections_snapshot()) {
                Some(collection) => {
                    let out = output::render_single(
                        &global.output,
                        &collection,
                        |c| detail(catalog, c),
                        |c| c.id.to_string(),
                    );
                    output::print_output(&out, global.quiet);
                }
                None if !global.quiet => eprintln!("Collection created"),
                None => {}
            }
            Ok(())
        }

        CollectionsCommand::Update { id, name, group } => {
            if name.is_none() && group.is_none() {
                return Err(CliError::Validation {
                    field: "update".into(),
                    reason: "nothing to change; pass --name and/or --group".into(),
                });
            }
            let update = UpdateCollectionRequest {
                name,
                group_id: group.map(EntityId::from),
            };
            util::execute(
                catalog,
                CoreCommand::UpdateCollection {
                    id: EntityId::from(id),
                    update,
                },
            )
            .await?;
            if !global.quiet {
                eprintln!("Collection updated");
            }
            Ok(())
        }

        CollectionsCommand::Delete { id } => {
            let label = store
                .collection_by_id(&EntityId::from(id.as_str()))
                .map_or_else(|| id.clone(), |c| c.name.clone());
            if !util::confirm(
                &format!("Delete collection '{label}' and its coins?"),
                global.yes,
            )? {
                return Ok(());
            }
            util::execute(
                catalog,
                CoreCommand::DeleteCollection {
                    id: EntityId::from(id),
                },
            )
            .await?;
            if !global.quiet {
                eprintln!("Collection deleted");
            }
            Ok(())
        }
    }
}
