//! LINE Messaging / LIFF API access.
//!
//! `endpoint` describes each remote operation, `client` sends it, `requests` adds the typed
//! wrappers and wire types used by the command services.

pub mod client;
pub mod endpoint;
pub mod requests;

pub use client::{ApiResponse, LineClient, OAuthClient, Payload};
pub use endpoint::{Endpoint, Host, PayloadKind};
pub use requests::{
    AddLiffResponse, AddRichMenuResponse, IssuedToken, LiffApp, LiffAppList, LiffFeatures,
    LiffView, LiffViewDescriptor, RichMenu, RichMenuDefinition, RichMenuImage, RichMenuList,
    RichMenuSize, ViewType,
};
