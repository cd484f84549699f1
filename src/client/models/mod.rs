//! GitHub API data models
//!
//! Every field is optional on the wire. Missing or `null` values decode to
//! `None`, and `None` fields are left out when a model is sent as a body.

mod org;
mod team;
mod user;

pub use org::Organization;
pub use team::Team;
pub use user::User;
