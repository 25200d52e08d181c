//! `coinly tree`: the whole hierarchy, or the part below one selection.
//!
//! Built from the flat per-kind stores rather than the nested group
//! payloads, so it reflects every cascade applied since the last load.

use std::fmt::Write;
use std::sync::Arc;

use coinly_core::{
    Catalog, CatalogStore, Coin, Collection, EntityId, Group, ResolvedSelection, Selection,
    SelectionState,
};
use serde::Serialize;

use crate::cli::{GlobalOpts, TreeArgs};
use crate::error::CliError;
use crate::output;

// ── Tree nodes ──────────────────────────────────────────────────────

#[derive(Serialize)]
struct GroupNode {
    id: EntityId,
    name: String,
    collections: Vec<CollectionNode>,
}

#[derive(Serialize)]
struct CollectionNode {
    id: EntityId,
    name: String,
    coins: Vec<Arc<Coin>>,
}

fn collection_node(store: &CatalogStore, c: &Collection) -> CollectionNode {
    CollectionNode {
        id: c.id.clone(),
        name: c.name.clone(),
        coins: store.coins_in_collection(&c.id),
    }
}

fn group_node(store: &CatalogStore, g: &Group) -> GroupNode {
    GroupNode {
        id: g.id.clone(),
        name: g.name.clone(),
        collections: store
            .collections_in_group(&g.id)
            .iter()
            .map(|c| collection_node(store, c))
            .collect(),
    }
}

// ── Text rendering ──────────────────────────────────────────────────

fn coin_line(k: &Coin) -> String {
    let mut line = format!(
        "{} {} {}",
        k.year,
        k.country,
        output::format_cents(k.value)
    );
    if let Some(ref mint) = k.mint {
        let _ = write!(line, " {mint}");
    }
    if !k.description.is_empty() {
        let _ = write!(line, " \"{}\"", k.description);
    }
    let _ = write!(line, " ({})", k.id);
    line
}

fn write_collection(out: &mut String, node: &CollectionNode, indent: &str) {
    let _ = writeln!(out, "{}{} ({})", indent, node.name, node.id);
    let child_indent = format!("{indent}  ");
    for (i, k) in node.coins.iter().enumerate() {
        let branch = if i + 1 == node.coins.len() { "└──" } else { "├──" };
        let _ = writeln!(out, "{child_indent}{branch} {}", coin_line(k));
    }
}

fn render_text(groups: &[GroupNode], collections: &[CollectionNode]) -> String {
    let mut out = String::new();
    for g in groups {
        let _ = writeln!(out, "{} ({})", g.name, g.id);
        for c in &g.collections {
            write_collection(&mut out, c, "  ");
        }
    }
    for c in collections {
        write_collection(&mut out, c, "");
    }
    out.trim_end().to_owned()
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::unused_async)]
pub async fn handle(catalog: &Catalog, args: TreeArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let store = catalog.store();
    let selection = SelectionState::new();

    if let Some(id) = args.group {
        selection.select(Selection::Group(EntityId::from(id)));
    } else if let Some(id) = args.collection {
        selection.select(Selection::Collection(EntityId::from(id)));
    }

    let (groups, collections): (Vec<GroupNode>, Vec<CollectionNode>) =
        match (selection.current(), selection.resolve(store)) {
            (None, _) => (
                store
                    .groups_snapshot()
                    .iter()
                    .map(|g| group_node(store, g))
                    .collect(),
                Vec::new(),
            ),
            (Some(_), Some(ResolvedSelection::Group(g))) => (vec![group_node(store, &g)], Vec::new()),
            (Some(_), Some(ResolvedSelection::Collection(c))) => {
                (Vec::new(), vec![collection_node(store, &c)])
            }
            (Some(Selection::Group(id)), None) => {
                return Err(CliError::not_found("group", &id.to_string()));
            }
            (Some(Selection::Collection(id)), None) => {
                return Err(CliError::not_found("collection", &id.to_string()));
            }
        };

    let out = if collections.is_empty() {
        output::render_single(
            &global.output,
            groups.as_slice(),
            |g| render_text(g, &[]),
            |g| g.iter().map(|n| n.id.to_string()).collect::<Vec<_>>().join("\n"),
        )
    } else {
        output::render_single(
            &global.output,
            collections.as_slice(),
            |c| render_text(&[], c),
            |c| c.iter().map(|n| n.id.to_string()).collect::<Vec<_>>().join("\n"),
        )
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
