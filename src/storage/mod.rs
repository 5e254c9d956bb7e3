//! Storage Module
//!
//! The data access layer for contact records.
//!
//! ## Core Concepts
//! - **`ContactStore`**: One async trait covering both deployment variants,
//!   so the HTTP layer never knows which backend it is talking to.
//! - **`MemoryStore`**: A single owned `Vec` behind a lock. Operations are
//!   synchronous list scans; uniqueness is checked under the same write lock
//!   that performs the insert, so duplicate names cannot race in.
//! - **`MongoStore`**: A thin wrapper over a MongoDB collection. Every
//!   operation is an async round-trip; uniqueness is delegated to a unique
//!   index on `name` so a race between check and write still surfaces as a
//!   clean `DuplicateName` error.

pub mod memory;
pub mod mongo;
pub mod store;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{ContactStore, StoreError};
