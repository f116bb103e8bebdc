//! LIFF view management: register, update, delete and list LIFF apps, keeping the
//! `views` group of the Functions configuration in step.

pub mod commands;

pub use commands::{
    LiffAddRequest, LiffAddResult, LiffCommandService, LiffDeleteResult, LiffGetResult,
    LiffUpdateRequest, LiffUpdateResult, LiffViewRow,
};
