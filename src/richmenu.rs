//! Rich menu management. Menus are created from a JSON definition plus an image and
//! remembered by name in the `richmenus` group of the Functions configuration.

pub mod commands;

pub use commands::{
    RichMenuAddRequest, RichMenuAddResult, RichMenuCommandService, RichMenuDeleteResult,
    RichMenuGetResult, RichMenuRow, RichMenuTargetResult,
};
