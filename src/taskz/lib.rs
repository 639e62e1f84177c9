//! # Taskz Architecture
//!
//! Taskz is a task-manager **library** with a thin CLI client on top. The CLI
//! (wired by `main.rs`) is the only place that knows about stdout/stderr and
//! exit codes; everything from [`api`] inward takes plain Rust arguments and
//! returns plain Rust types.
//!
//! ```text
//! CLI (args.rs + main.rs)
//!   └── API facade (api.rs) — validates raw input, dispatches
//!         └── Commands (commands/*.rs) — business logic per operation
//!               ├── Repository (repo.rs) — typed reads
//!               └── Store (store/) — EntityStore trait,
//!                   FileStore (production), InMemoryStore (tests)
//! ```
//!
//! The store keeps one JSON document per entity kind (`task.json`), a single
//! object keyed by uuid strings. Every write is a whole-file rewrite; there is
//! no locking, so two concurrent processes race last-writer-wins. That is a
//! deliberate trade-off for a single-user interactive tool.
//!
//! ## Module Overview
//!
//! - [`api`]: entry point for all operations
//! - [`commands`]: create / list / update / delete logic
//! - [`repo`]: `TaskRepository`, the typed read facade
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: `Task`, `TaskStatus`, `DueDate`
//! - [`validate`]: input validation (runs before anything touches the store)
//! - [`ident`]: uuid v4 generation and parsing
//! - [`config`]: `config.json` in the data dir
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ident;
pub mod model;
pub mod repo;
pub mod store;
pub mod validate;
