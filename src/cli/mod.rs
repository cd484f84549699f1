//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};

pub mod args;
pub mod config;
pub mod context;
pub mod member;
pub mod org;
pub mod status;
pub mod team;

pub use args::OutputFormat;
pub use context::CommandContext;

/// ghorgs - manage GitHub organizations, teams and membership
#[derive(Parser, Debug)]
#[command(name = "ghorgs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(long, global = true, env = "GHORGS_FORMAT", hide_env = true)]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "GHORGS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API root (GitHub Enterprise, local test servers)
    #[arg(long, global = true, env = "GHORGS_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(
        long,
        global = true,
        env = "GHORGS_DEBUG",
        hide_env = true,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Store settings in the config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// View and edit organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// List organization members and change their visibility
    #[command(subcommand)]
    Member(MemberCommands),

    /// List teams and manage team membership
    #[command(subcommand)]
    Team(TeamCommands),
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Save the access token used for API requests
    SetToken {
        /// GitHub personal access token
        token: String,
    },

    /// Save the API root (GitHub Enterprise)
    SetApiUrl {
        /// API root, e.g. https://ghe.example.com/api/v3
        url: String,
    },
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List organizations of a user (the authenticated user if omitted)
    List {
        /// GitHub login of the user
        user: Option<String>,
    },

    /// Show an organization
    Get {
        /// Organization login
        org: String,
    },

    /// Edit organization profile fields
    Edit {
        /// Organization login
        org: String,

        #[command(flatten)]
        fields: OrgEditArgs,
    },
}

/// Organization fields to change; omitted flags are left untouched
#[derive(Debug, Clone, Args, Default)]
pub struct OrgEditArgs {
    /// New login
    #[arg(long)]
    pub login: Option<String>,

    /// New canonical URL
    #[arg(long)]
    pub url: Option<String>,

    /// New avatar URL
    #[arg(long = "avatar-url")]
    pub avatar_url: Option<String>,

    /// New location
    #[arg(long)]
    pub location: Option<String>,
}

/// Organization member subcommands
#[derive(Subcommand, Debug)]
pub enum MemberCommands {
    /// List members of an organization
    List {
        /// Organization login
        org: String,

        /// Only list members whose membership is public
        #[arg(long)]
        public: bool,
    },

    /// Make a user's membership public
    Publicize {
        /// Organization login
        org: String,
        /// User login
        user: String,
    },

    /// Hide a user's membership from non-members
    Conceal {
        /// Organization login
        org: String,
        /// User login
        user: String,
    },
}

/// Team subcommands
#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// List teams of an organization
    List {
        /// Organization login
        org: String,
    },

    /// Add a user to a team
    AddMember {
        /// Numeric team ID (see `ghorgs team list`)
        team_id: i64,
        /// User login
        user: String,
    },

    /// Remove a user from a team
    RemoveMember {
        /// Numeric team ID (see `ghorgs team list`)
        team_id: i64,
        /// User login
        user: String,
    },
}
