// GitHub API module.
// Provides the client, the operation trait, and types for the GitHub REST API.

#![allow(dead_code)]

pub mod api;
pub mod client;
pub mod endpoints;
pub mod types;

pub use api::ActionsApi;
pub use client::GitHubClient;
pub use types::*;
