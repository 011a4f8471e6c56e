//! # kogen-cli
//!
//! Command-line tool for scaffolding views in Knockout projects.
//!
//! This crate provides the `kogen` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `kogen view [name] [route]` | Generate a view and register its route |
//! | `kogen routes` | List the routes registered in `routes.js` |
//! | `kogen config` | Show the resolved generator settings |
//!
//! Generation itself lives in `kogen-core`; this crate handles arguments,
//! prompting, and console output.

pub mod commands;
pub mod prompt;
