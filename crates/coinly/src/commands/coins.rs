//! Coin command handlers.

use std::sync::Arc;

use coinly_core::{
    Catalog, Coin, Command as CoreCommand, CreateCoinRequest, EntityId, UpdateCoinRequest,
};
use tabled::Tabled;

use crate::cli::{CoinsArgs, CoinsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CoinRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Mint")]
    mint: String,
    #[tabled(rename = "Collection")]
    collection: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn collection_label(catalog: &Catalog, k: &Coin) -> String {
    k.collection_id.as_ref().map_or_else(
        || "-".into(),
        |cid| {
            catalog
                .store()
                .collection_by_id(cid)
                .map_or_else(|| cid.to_string(), |c| c.name.clone())
        },
    )
}

fn row(catalog: &Catalog, k: &Arc<Coin>) -> CoinRow {
    CoinRow {
        id: k.id.to_string(),
        year: k.year,
        country: k.country.clone(),
        value: output::format_cents(k.value),
        mint: k.mint.clone().unwrap_or_default(),
        collection: collection_label(catalog, k),
        description: k.description.clone(),
    }
}

fn detail(catalog: &Catalog, k: &Arc<Coin>) -> String {
    [
        format!("ID:          {}", k.id),
        format!("Year:        {}", k.year),
        format!("Country:     {}", k.country),
        format!("Value:       {}", output::format_cents(k.value)),
        format!("Mint:        {}", k.mint.as_deref().unwrap_or("-")),
        format!("Collection:  {}", collection_label(catalog, k)),
        format!(
            "Description: {}",
            if k.description.is_empty() { "-" } else { &k.description }
        ),
    ]
    .join("\n")
}

fn is_empty_update(u: &UpdateCoinRequest) -> bool {
    u.year.is_none()
        && u.value.is_none()
        && u.country.is_none()
        && u.collection_id.is_none()
        && u.mint.is_none()
        && u.description.is_none()
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub async fn handle(
    catalog: &Catalog,
    args: CoinsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let store = catalog.store();

    match args.command {
        CoinsCommand::List { collection } => {
            let snap: Vec<Arc<Coin>> = match collection {
                Some(cid) => {
                    let cid = EntityId::from(cid);
                    if store.collection_by_id(&cid).is_none() {
                        return Err(CliError::not_found("collection", &cid.to_string()));
                    }
                    store.coins_in_collection(&cid)
                }
                None => store.coins_snapshot().to_vec(),
            };
            let out = output::render_list(
                &global.output,
                &snap,
                |k| row(catalog, k),
                |k| k.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CoinsCommand::Get { id } => {
            let coin = catalog
                .resolve_coin(&EntityId::from(id.as_str()))
                .await
                .ok_or_else(|| CliError::not_found("coin", &id))?;
            let out = output::render_single(
                &global.output,
                &coin,
                |k| detail(catalog, k),
                |k| k.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CoinsCommand::Add {
            collection,
            value,
            country,
            year,
            mint,
            description,
        } => {
            let before = util::id_set(&store.coins_snapshot());
            let req = CreateCoinRequest {
                year,
                value,
                country,
                collection_id: EntityId::from(collection),
                mint,
                description,
            };
            util::execute(catalog, CoreCommand::CreateCoin(req)).await?;

            match util::first_new(&before, &store.coins_snapshot()) {
                Some(coin) => {
                    let out = output::render_single(
                        &global.output,
                        &coin,
                        |k| detail(catalog, k),
                        |k| k.id.to_string(),
                    );
                    output::print_output(&out, global.quiet);
                }
                None if !global.quiet => eprintln!("Coin added"),
                None => {}
            }
            Ok(())
        }

        CoinsCommand::Update {
            id,
            collection,
            value,
            country,
            year,
            mint,
            description,
        } => {
            let update = UpdateCoinRequest {
                year,
                value,
                country,
                collection_id: collection.map(EntityId::from),
                mint,
                description,
            };
            if is_empty_update(&update) {
                return Err(CliError::Validation {
                    field: "update".into(),
                    reason: "nothing to change; pass at least one attribute flag".into(),
                });
            }
            util::execute(
                catalog,
                CoreCommand::UpdateCoin {
                    id: EntityId::from(id),
                    update,
                },
            )
            .await?;
            if !global.quiet {
                eprintln!("Coin updated");
            }
            Ok(())
        }

        CoinsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete coin '{id}'?"), global.yes)? {
                return Ok(());
            }
            util::execute(
                catalog,
                CoreCommand::DeleteCoin {
                    id: EntityId::from(id),
                },
            )
            .await?;
            if !global.quiet {
                eprintln!("Coin deleted");
            }
            Ok(())
        }
    }
}
