//! Channel access tokens: issue with client credentials, revoke, optionally persist.

pub mod commands;

pub use commands::{TokenCommandService, TokenIssueResult, TokenRevokeResult};
