//! Clap derive structures for the `coinly` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// coinly -- browse and edit a coin catalog from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "coinly",
    version,
    about = "Manage a coin catalog from the command line",
    long_about = "Browse and edit groups, collections and coins stored on a catalog server.\n\n\
        Every command loads the full group tree first, then reads from the\n\
        local cache or applies a single change.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "COINLY_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Catalog server URL (overrides profile)
    #[arg(long, short = 's', env = "COINLY_SERVER", global = true)]
    pub server: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "COINLY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "COINLY_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one id per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage groups
    #[command(alias = "g")]
    Groups(GroupsArgs),

    /// Manage collections
    #[command(alias = "col")]
    Collections(CollectionsArgs),

    /// Manage coins
    #[command(alias = "c")]
    Coins(CoinsArgs),

    /// Show the group > collection > coin hierarchy
    Tree(TreeArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GROUPS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GroupsArgs {
    #[command(subcommand)]
    pub command: GroupsCommand,
}

#[derive(Debug, Subcommand)]
pub enum GroupsCommand {
    /// List groups
    #[command(alias = "ls")]
    List,

    /// Show group details
    Get {
        /// Group ID
        id: String,
    },

    /// Create a group
    Create {
        /// Group name (must be unique)
        name: String,

        /// Existing collections to move into the new group
        #[arg(long = "collection", value_name = "ID")]
        collections: Vec<String>,
    },

    /// Rename a group
    Rename {
        /// Group ID
        id: String,

        /// New name
        name: String,
    },

    /// Delete a group
    #[command(alias = "rm")]
    Delete {
        /// Group ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COLLECTIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CollectionsArgs {
    #[command(subcommand)]
    pub command: CollectionsCommand,
}

#[derive(Debug, Subcommand)]
pub enum CollectionsCommand {
    /// List collections
    #[command(alias = "ls")]
    List {
        /// Only collections in this group
        #[arg(long, short = 'g', value_name = "ID")]
        group: Option<String>,
    },

    /// Show collection details
    Get {
        /// Collection ID
        id: String,
    },

    /// Create a collection
    Create {
        /// Collection name
        name: String,

        /// Parent group ID
        #[arg(long, short = 'g', value_name = "ID")]
        group: String,
    },

    /// Rename a collection or move it to another group
    Update {
        /// Collection ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New parent group ID
        #[arg(long, short = 'g', value_name = "ID")]
        group: Option<String>,
    },

    /// Delete a collection
    #[command(alias = "rm")]
    Delete {
        /// Collection ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COINS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CoinsArgs {
    #[command(subcommand)]
    pub command: CoinsCommand,
}

#[derive(Debug, Subcommand)]
pub enum CoinsCommand {
    /// List coins
    #[command(alias = "ls")]
    List {
        /// Only coins in this collection
        #[arg(long, short = 'c', value_name = "ID")]
        collection: Option<String>,
    },

    /// Show coin details
    Get {
        /// Coin ID
        id: String,
    },

    /// Add a coin to a collection
    Add {
        /// Parent collection ID
        #[arg(long, short = 'c', value_name = "ID")]
        collection: String,

        /// Face value in cents
        #[arg(long)]
        value: u32,

        /// Issuing country (ISO code)
        #[arg(long)]
        country: String,

        /// Minting year
        #[arg(long)]
        year: i32,

        /// Mint mark
        #[arg(long)]
        mint: Option<String>,

        /// Free-text description
        #[arg(long)]
        description: Option<String>,
    },

    /// Update coin attributes or move it to another collection
    Update {
        /// Coin ID
        id: String,

        /// New parent collection ID
        #[arg(long, short = 'c', value_name = "ID")]
        collection: Option<String>,

        /// Face value in cents
        #[arg(long)]
        value: Option<u32>,

        /// Issuing country (ISO code)
        #[arg(long)]
        country: Option<String>,

        /// Minting year
        #[arg(long)]
        year: Option<i32>,

        /// Mint mark
        #[arg(long)]
        mint: Option<String>,

        /// Free-text description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a coin
    #[command(alias = "rm")]
    Delete {
        /// Coin ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TREE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Only show this group
    #[arg(long, short = 'g', value_name = "ID", conflicts_with = "collection")]
    pub group: Option<String>,

    /// Only show this collection
    #[arg(long, short = 'c', value_name = "ID")]
    pub collection: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create a profile, prompting for anything not given
    Init {
        /// Profile name
        #[arg(long)]
        name: Option<String>,

        /// Catalog server URL
        #[arg(long = "url", value_name = "URL")]
        url: Option<String>,
    },

    /// Display current configuration
    Show,

    /// Print the config file location
    Path,

    /// Set a value on the active profile
    Set {
        /// Config key (server, timeout)
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }
}
