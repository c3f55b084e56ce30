//! # Filecab Architecture
//!
//! Filecab is a **UI-agnostic record-keeping library** with a CLI client on
//! top. The record cabinet, its indexes, validation, and export all live in
//! the library; the binary only parses arguments, runs the command loop, and
//! formats output.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses flags, runs the command loop, prompts for fields  │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (property names, export formats)       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Per-operation business logic                             │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions beyond the export file write          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (cabinet.rs, validation.rs, snapshot.rs, export/)     │
//! │  - The indexed in-memory record store                       │
//! │  - Pluggable validation policy, chosen at construction      │
//! │  - Immutable snapshots feeding the export writers           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Cabinet's Guarantees
//!
//! The cabinet keeps three secondary indexes (first name, last name, date of
//! birth) in lock-step with the primary record list. Index buckets store
//! record ids, never record copies; ids are sequential from 1 and never
//! reused, so bucket entries resolve against the primary list on read.
//! Every mutation is all-or-nothing: validation failures and unknown-id
//! edits leave the list and all three indexes untouched.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`cabinet`]: The indexed record store
//! - [`validation`]: The two validation rule sets
//! - [`snapshot`]: Point-in-time record copies for export
//! - [`export`]: CSV and JSON writers
//! - [`model`]: Core data types (`Record`, `RecordInput`, `Gender`)
//! - [`input`]: String-to-field converters for interactive input
//! - [`error`]: Error types

pub mod api;
pub mod cabinet;
pub mod commands;
pub mod error;
pub mod export;
pub mod input;
pub mod model;
pub mod snapshot;
pub mod validation;
