//! # lql Architecture
//!
//! lql keeps whisky tasting notes as plain files, one directory per
//! distillery and one numbered file per note. The library is the record
//! store plus a thin command layer; the `lql` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Argument parsing, prompts, colors, screen clearing       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Parses display indexes, dispatches to commands           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Operate on Rust types, return `CmdResult`                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/, paths.rs)                                   │
//! │  - NoteStore trait: FileStore, InMemoryStore                │
//! │  - Sequence allocation, file codec, directory listing       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display indexes
//!
//! Distilleries are addressed by their position in the alphabetical listing
//! (`lql view 2`). See [`index`].
//!
//! ## Module Overview
//!
//! - [`api`]: facade used by every front end
//! - [`commands`]: business logic per command
//! - [`store`]: storage trait and implementations
//! - [`paths`]: where the store lives on disk
//! - [`model`]: `Entry` (to write) and `Note` (read back)
//! - [`index`]: display indexes for distilleries
//! - [`display`]: rating precision and note rendering rules
//! - [`config`]: `config.json` settings
//! - [`init`]: home directory resolution and context setup
//! - [`error`]: error types
//! - `cli`: argument parsing, prompts and terminal output for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod paths;
pub mod store;
