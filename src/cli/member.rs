//! Organization member commands

use colored::Colorize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::output::{self, table};
use ghorgs::client::User;
use ghorgs::error::Result;

/// Member for table display
#[derive(Tabled)]
struct MemberDisplay {
    #[tabled(rename = "LOGIN")]
    login: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl From<&User> for MemberDisplay {
    fn from(user: &User) -> Self {
        Self {
            login: table::cell(user.login.as_ref()),
            id: table::cell(user.id.as_ref()),
            url: table::cell(user.url.as_ref()),
        }
    }
}

/// Run the member list command
pub async fn list(opts: &GlobalOptions, org: &str, public: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let service = ctx.client.organizations();

    let members = if public {
        service.list_public_members(org).await?
    } else {
        service.list_members(org).await?
    };

    output::print_list::<_, MemberDisplay>(members, ctx.format)
}

/// Run the member publicize command
pub async fn publicize(opts: &GlobalOptions, org: &str, user: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.client
        .organizations()
        .publicize_membership(org, user)
        .await?;

    if ctx.format == OutputFormat::Table {
        println!(
            "{} Membership of {} in {} is now public",
            "✓".green(),
            user.bold(),
            org.bold()
        );
    }
    Ok(())
}

/// Run the member conceal command
pub async fn conceal(opts: &GlobalOptions, org: &str, user: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.client
        .organizations()
        .conceal_membership(org, user)
        .await?;

    if ctx.format == OutputFormat::Table {
        println!(
            "{} Membership of {} in {} is now concealed",
            "✓".green(),
            user.bold(),
            org.bold()
        );
    }
    Ok(())
}
