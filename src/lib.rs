//! fliff: manage LINE Messaging API resources (LIFF views, rich menus, channel access
//! tokens) and keep their ids in Firebase Functions configuration.

pub mod channel;
pub mod cli;
pub mod config;
pub mod error;
pub mod functions_config;
pub mod liff;
pub mod line;
pub mod logging;
pub mod resolve;
pub mod richmenu;
pub mod token;
