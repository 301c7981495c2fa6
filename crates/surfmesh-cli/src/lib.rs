//! # surfmesh-cli
//!
//! Subcommand implementations behind the `surfmesh` binary. Each
//! command reads or writes JSON mesh snapshots and prints a report.

pub mod commands;
