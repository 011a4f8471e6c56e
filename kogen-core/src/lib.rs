//! # kogen-core
//!
//! Generation logic for kogen, the Knockout view generator.
//!
//! A view is emitted in two steps:
//!
//! 1. The project's `routes.js` is parsed and one `'route': 'view'` entry is
//!    appended to its exported object, preserving the rest of the file
//!    ([`route_table`]).
//! 2. The view's files are rendered from templates ([`templates`]) and written
//!    under `web_modules/views/<name>/` ([`emit`]).
//!
//! Settings are read once from the project's `.yo-rc.json` ([`config`]) and
//! passed explicitly to every step.

pub mod config;
pub mod emit;
pub mod error;
pub mod imports;
pub mod route_table;
pub mod templates;
pub mod view;

pub use config::{GeneratorConfig, TestFramework};
pub use emit::{emit, plan, EmitReport, Plan, PlannedFile, ROUTES_FILE};
pub use error::GenError;
pub use route_table::{PatchError, RouteEntry, RouteTable};
pub use view::ViewSpec;
