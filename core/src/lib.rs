//! county-core: load a county demographics table and run filter and
//! aggregate commands over it.
//!
//! Data flow:
//!   loader (parser + schema) → RecordStore → QueryEngine ← command
//!
//! Every command yields a `QueryEvent`; the caller decides how to render it.

pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod field;
pub mod loader;
pub mod parser;
pub mod record;
pub mod schema;
pub mod session;
pub mod store;
pub mod types;
