//! Team commands

use colored::Colorize;
use log::debug;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::output::{self, table};
use ghorgs::client::Team;
use ghorgs::error::Result;

/// Team for table display
#[derive(Tabled)]
struct TeamDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "SLUG")]
    slug: String,
    #[tabled(rename = "PERMISSION")]
    permission: String,
    #[tabled(rename = "MEMBERS")]
    members: String,
    #[tabled(rename = "REPOS")]
    repos: String,
}

impl From<&Team> for TeamDisplay {
    fn from(team: &Team) -> Self {
        Self {
            id: table::cell(team.id.as_ref()),
            name: table::cell(team.name.as_ref()),
            slug: table::cell(team.slug.as_ref()),
            permission: table::cell(team.permission.as_ref()),
            members: table::cell(team.members_count.as_ref()),
            repos: table::cell(team.repos_count.as_ref()),
        }
    }
}

/// Run the team list command
pub async fn list(opts: &GlobalOptions, org: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let teams = ctx.client.organizations().list_teams(org).await?;
    debug!("Fetched {} teams for {}", teams.len(), org);

    output::print_list::<_, TeamDisplay>(teams, ctx.format)
}

/// Run the team add-member command
pub async fn add_member(opts: &GlobalOptions, team_id: i64, user: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.client
        .organizations()
        .add_team_member(team_id, user)
        .await?;

    if ctx.format == OutputFormat::Table {
        println!("{} Added {} to team {}", "✓".green(), user.bold(), team_id);
    }
    Ok(())
}

/// Run the team remove-member command
pub async fn remove_member(opts: &GlobalOptions, team_id: i64, user: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.client
        .organizations()
        .remove_team_member(team_id, user)
        .await?;

    if ctx.format == OutputFormat::Table {
        println!("{} Removed {} from team {}", "✓".green(), user.bold(), team_id);
    }
    Ok(())
}
