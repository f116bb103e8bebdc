//! Channel credentials kept in the `line` group of the Functions configuration.

pub mod commands;

pub use commands::{ChannelCommandService, ChannelConfigRequest, ChannelConfigResult};
