//! CLI command implementations
//!
//! Each command module implements a specific sql2struct CLI command.

pub mod check;
pub mod generate;
pub mod init;
pub mod tables;
