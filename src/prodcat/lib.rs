//! # Prodcat Architecture
//!
//! Prodcat is a **UI-agnostic product catalog library**. The `prodcat` binary is
//! one client of it; a web front end or a service could drive the same core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, asks for confirmation  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, holds the session view        │
//! │  - Normalizes inputs (positions/codes → products)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! │  - Built on the view engine (view.rs) and reorder.rs        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ProductStore owns the canonical ordered collection       │
//! │  - PersistenceAdapter: FileAdapter, MemAdapter (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Canonical Order vs Displayed Sequence
//!
//! The store keeps products in one canonical order, the order they are saved
//! and exported in. What a user sees is the *displayed sequence*: the result of
//! applying a [`view::ViewConfig`] (filters, sort, manual-order mode) to the
//! canonical collection. Display positions always refer to the displayed
//! sequence. Only manual-order mode shows canonical order, which is why
//! reordering is only possible there.
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<CmdResult>`, and never touches stdout/stderr or exits the process.
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Testing Strategy
//!
//! 1. **Store, view, reorder**: unit tests against [`store::memory::MemAdapter`].
//! 2. **Commands**: unit tests of each operation, also in memory.
//! 3. **API**: dispatch and session-view behavior.
//! 4. **Integration** (`tests/`): the file adapter on a temp dir, and the binary
//!    end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`view`]: Filtering and sorting into the displayed sequence
//! - [`reorder`]: Drag state machine and manual reorder commits
//! - [`index`]: Display positions and selectors
//! - [`store`]: Product store and persistence adapters
//! - [`model`]: `Product`, `ProductDraft`, `Price`
//! - [`seed`]: Collection used before anything is saved
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and API wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod reorder;
pub mod seed;
pub mod store;
pub mod view;
