//! Data access - connection pool and the project store
//!
//! # Design Principles
//!
//! - One parameterized statement per logical operation
//! - Arguments are always bound to `$n` placeholders, never concatenated
//! - No retries: a failed statement surfaces immediately
//! - Not-found is read off the returned row count, never a separate SELECT

pub mod memory;
pub mod pool;
pub mod statement;
pub mod store;

pub use memory::MemoryStore;
pub use pool::create_pool;
pub use statement::ProjectStatement;
pub use store::{PgStore, ProjectStore, StoreError};
