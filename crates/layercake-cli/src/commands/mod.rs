//! Command handlers: translate parsed arguments into core calls and print
//! the outcome. No business logic lives here.

pub mod completions;
pub mod config;
pub mod init;
pub mod scaffold;
