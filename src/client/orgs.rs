//! Organization, team and membership endpoints
//!
//! GitHub API docs: <https://docs.github.com/en/rest/orgs>

use reqwest::Method;

use super::{ApiRequest, Organization, Team, Transport, User};
use crate::error::Result;

/// Access to the organization related functions of the GitHub API.
///
/// Holds nothing but a reference to its transport, so one client can hand out
/// any number of services and drive them concurrently.
pub struct OrganizationsService<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> OrganizationsService<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    fn request(&self, method: Method, path: &str) -> Result<ApiRequest> {
        self.transport.new_request::<()>(method, path, None)
    }

    /// List the organizations for a user.
    ///
    /// An empty `user` lists the organizations of the authenticated user.
    pub async fn list(&self, user: &str) -> Result<Vec<Organization>> {
        let path = if user.is_empty() {
            "user/orgs".to_string()
        } else {
            format!("users/{}/orgs", user)
        };

        let req = self.request(Method::GET, &path)?;
        self.transport.execute(req).await?.json()
    }

    /// Get an organization.
    pub async fn get(&self, org: &str) -> Result<Organization> {
        let req = self.request(Method::GET, &format!("orgs/{}", org))?;
        self.transport.execute(req).await?.json()
    }

    /// Edit an organization, returning it as updated by the server.
    pub async fn edit(&self, name: &str, org: &Organization) -> Result<Organization> {
        let req = self
            .transport
            .new_request(Method::PATCH, &format!("orgs/{}", name), Some(org))?;
        self.transport.execute(req).await?.json()
    }

    /// List the members of an organization.
    ///
    /// Owners of the organization see both concealed and public members,
    /// everyone else only the public ones.
    pub async fn list_members(&self, org: &str) -> Result<Vec<User>> {
        let req = self.request(Method::GET, &format!("orgs/{}/members", org))?;
        self.transport.execute(req).await?.json()
    }

    /// List the public members of an organization.
    pub async fn list_public_members(&self, org: &str) -> Result<Vec<User>> {
        let req = self.request(Method::GET, &format!("orgs/{}/public_members", org))?;
        self.transport.execute(req).await?.json()
    }

    /// List the teams of an organization.
    pub async fn list_teams(&self, org: &str) -> Result<Vec<Team>> {
        let req = self.request(Method::GET, &format!("orgs/{}/teams", org))?;
        self.transport.execute(req).await?.json()
    }

    /// Add a user to a team.
    pub async fn add_team_member(&self, team: i64, user: &str) -> Result<()> {
        let req = self.request(Method::PUT, &format!("teams/{}/members/{}", team, user))?;
        self.transport.execute(req).await?;
        Ok(())
    }

    /// Remove a user from a team.
    pub async fn remove_team_member(&self, team: i64, user: &str) -> Result<()> {
        let req = self.request(Method::DELETE, &format!("teams/{}/members/{}", team, user))?;
        self.transport.execute(req).await?;
        Ok(())
    }

    /// Publicize a user's membership in an organization.
    pub async fn publicize_membership(&self, org: &str, user: &str) -> Result<()> {
        let req = self.request(Method::PUT, &format!("orgs/{}/public_members/{}", org, user))?;
        self.transport.execute(req).await?;
        Ok(())
    }

    /// Conceal a user's membership in an organization.
    pub async fn conceal_membership(&self, org: &str, user: &str) -> Result<()> {
        let req = self.request(
            Method::DELETE,
            &format!("orgs/{}/public_members/{}", org, user),
        )?;
        self.transport.execute(req).await?;
        Ok(())
    }
}
