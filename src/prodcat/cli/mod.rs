//! # CLI Behavior
//!
//! This is **one possible UI client** for prodcat, not the application itself.
//! For the overall architecture, see the crate-level documentation of the library.
//!
//! ## Naked Execution (`prodcat`)
//!
//! Running `prodcat` with no arguments lists the catalog in the current view.
//!
//! ## View Commands
//!
//! - `prodcat list --search wool --category hats --bestseller true`: filters
//!   stick until changed or `prodcat list --reset`.
//! - `prodcat sort price`: ascending by price; run it again for descending.
//! - `prodcat manual`: toggles manual order, the stored order of the catalog.
//!
//! ## Reordering
//!
//! `prodcat move 3 1` moves the third displayed product to the top. Only
//! available in manual order; positions are those printed by `prodcat list`.
//!
//! ## Modules
//!
//! - `setup`: clap definitions
//! - `commands`: dispatch, context, confirmation prompts, logging setup
//! - `render`: terminal formatting

mod commands;
mod render;
mod setup;

pub use commands::run;
