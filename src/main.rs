//! ghorgs CLI - manage GitHub organizations, teams and membership

use clap::Parser;
use log::LevelFilter;

mod cli;
mod output;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, ConfigCommands, MemberCommands, OrgCommands, TeamCommands};
use ghorgs::error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("ghorgs version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::SetToken { token } => cli::config::set_token(&opts, token),
            ConfigCommands::SetApiUrl { url } => cli::config::set_api_url(&opts, url),
        },
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::List { user } => cli::org::list(&opts, user.as_deref()).await,
            OrgCommands::Get { org } => cli::org::get(&opts, &org).await,
            OrgCommands::Edit { org, fields } => cli::org::edit(&opts, &org, fields).await,
        },
        Commands::Member(member_cmd) => match member_cmd {
            MemberCommands::List { org, public } => cli::member::list(&opts, &org, public).await,
            MemberCommands::Publicize { org, user } => {
                cli::member::publicize(&opts, &org, &user).await
            }
            MemberCommands::Conceal { org, user } => cli::member::conceal(&opts, &org, &user).await,
        },
        Commands::Team(team_cmd) => match team_cmd {
            TeamCommands::List { org } => cli::team::list(&opts, &org).await,
            TeamCommands::AddMember { team_id, user } => {
                cli::team::add_member(&opts, team_id, &user).await
            }
            TeamCommands::RemoveMember { team_id, user } => {
                cli::team::remove_member(&opts, team_id, &user).await
            }
        },
    }
}
