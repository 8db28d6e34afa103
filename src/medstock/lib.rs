//! # Medstock Architecture
//!
//! Medstock is a pharmacy inventory and sales library with a command-line
//! client on top. The library owns all behavior; the CLI only parses arguments
//! and prints results.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the injected store       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per user action over a `Session`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (sync.rs, form.rs, validation.rs, view.rs, sales.rs)  │
//! │  - Whole-list synchronization, draft validation, filtering  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DocumentStore trait: fetch document, overwrite field     │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Whole-document collections
//!
//! The medicine list and the sales ledger are each one array field inside one
//! document. Every mutation rewrites the entire array. There is no merge and
//! no version check, so two sessions editing the same collection overwrite
//! each other and the last commit wins. See [`sync`].
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: unit tests against `InMemoryStore`, which records
//!    every write and can be taken offline.
//! 2. **API**: dispatch tests.
//! 3. **Store and CLI**: integration tests in `tests/` using temp directories.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user action
//! - [`sync`]: Whole-list synchronizer and its state machine
//! - [`form`]: Add-medicine form controller
//! - [`validation`]: Field rules for medicine and order drafts
//! - [`view`]: Display rows and the name search filter
//! - [`sales`]: Order recording and sales summary
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod sales;
pub mod store;
pub mod sync;
pub mod validation;
pub mod view;
