//! Command dispatch: bridges CLI args -> core Commands -> output formatting.

pub mod coins;
pub mod collections;
pub mod config_cmd;
pub mod groups;
pub mod tree;
pub mod util;

use coinly_core::Catalog;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a catalog-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, catalog: &Catalog, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Groups(args) => groups::handle(catalog, args, global).await,
        Command::Collections(args) => collections::handle(catalog, args, global).await,
        Command::Coins(args) => coins::handle(catalog, args, global).await,
        Command::Tree(args) => tree::handle(catalog, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
