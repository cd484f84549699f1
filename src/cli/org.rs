//! Organization command implementations

use colored::Colorize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OrgEditArgs, OutputFormat};
use crate::output::{self, json, table};
use ghorgs::client::Organization;
use ghorgs::error::Result;

/// Organization for table display
#[derive(Tabled)]
struct OrgDisplay {
    #[tabled(rename = "LOGIN")]
    login: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "LOCATION")]
    location: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl From<&Organization> for OrgDisplay {
    fn from(org: &Organization) -> Self {
        Self {
            login: table::cell(org.login.as_ref()),
            id: table::cell(org.id.as_ref()),
            location: table::cell(org.location.as_ref()),
            url: table::cell(org.url.as_ref()),
        }
    }
}

impl From<OrgEditArgs> for Organization {
    fn from(args: OrgEditArgs) -> Self {
        Self {
            login: args.login,
            id: None,
            url: args.url,
            avatar_url: args.avatar_url,
            location: args.location,
        }
    }
}

/// Run the org list command
pub async fn list(opts: &GlobalOptions, user: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let orgs = ctx.client.organizations().list(user.unwrap_or("")).await?;

    output::print_list::<_, OrgDisplay>(orgs, ctx.format)
}

/// Run the org get command
pub async fn get(opts: &GlobalOptions, org: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.client.organizations().get(org).await?;

    print_org(&org, ctx.format)
}

/// Run the org edit command
pub async fn edit(opts: &GlobalOptions, org: &str, fields: OrgEditArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let updated = ctx.client.organizations().edit(org, &fields.into()).await?;

    if ctx.format == OutputFormat::Table {
        println!("{} Updated organization {}\n", "✓".green(), org.bold());
    }
    print_org(&updated, ctx.format)
}

fn print_org(org: &Organization, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", org.login.as_deref().unwrap_or(table::EMPTY).bold());
            println!();
            println!("  ID:       {}", table::cell(org.id.as_ref()));
            println!("  URL:      {}", table::cell(org.url.as_ref()));
            println!("  Avatar:   {}", table::cell(org.avatar_url.as_ref()));
            println!("  Location: {}", table::cell(org.location.as_ref()));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(org)?);
        }
    }

    Ok(())
}
