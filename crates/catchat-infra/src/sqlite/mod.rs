//! SQLite persistence: connection pool and the message archive.

pub mod archive;
pub mod pool;
