//! Integration tests for the fliff and richmenu command line tools

mod cli_e2e;
mod config_integration;
mod liff_flow;
mod store_integration;
mod test_utils;
mod token_flow;
