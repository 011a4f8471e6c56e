//! Command implementations for the `kogen` CLI.
//!
//! Each submodule corresponds to a top-level CLI command.

/// Settings display: `kogen config`.
///
/// Prints the resolved `USE_REQUIRE_SYNTAX` and `TEST_FRAMEWORK` settings and
/// where each one came from.
pub mod config;

/// Route listing: `kogen routes`.
///
/// Parses `routes.js` and lists its entries in file order.
pub mod routes;

/// View generation: `kogen view [name] [route]`.
///
/// Prompts for missing values, registers the route in `routes.js`, and writes
/// the view's files under `web_modules/views/<name>/`.
pub mod view;
