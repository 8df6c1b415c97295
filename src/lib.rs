//! chained-table: a fixed-capacity map from string keys to string values
//! that resolves hash collisions by separate chaining.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, self-contained key/value store whose ownership rules,
//!   collision policy, and deletion semantics can be checked by reading one
//!   module at a time.
//! - Layers:
//!   - `hasher`: shift-add byte hash reduced modulo the table's own
//!     capacity, so every index is in `[0, capacity)`.
//!   - `chain`: singly-linked overflow list. Nodes live in a `SlotMap`
//!     arena and link to each other by arena key.
//!   - `ChainedTable`: one optional primary entry per slot plus one chain
//!     per slot; exposes insert/search/delete and the diagnostic dump.
//!
//! Constraints
//! - Single-threaded; all mutation goes through `&mut self`.
//! - Capacity is fixed at construction; there is no rehashing.
//! - Every entry is owned by the table, either directly in a slot or
//!   through the node arena. Teardown is `Drop`, so nothing can leak or be
//!   freed twice, and no `unsafe` is needed.
//!
//! Occupancy and fullness
//! - `count()` is the number of occupied primary slots. Chained entries do
//!   not contribute to it, so a busy slot can absorb any number of
//!   collisions. `len()` reports primary plus chained entries.
//! - A new key that would claim an empty slot is rejected with
//!   `InsertError::TableFull` once `count() == capacity()`.
//!
//! Deletion
//! - Removing a primary entry whose slot has a chain promotes the chain
//!   head into the slot; `count()` is unchanged.
//! - Removing a chained entry unlinks just that node.
//!
//! Notes and non-goals
//! - Keys and values are `String`s; there is no generic key type.
//! - Hash quality is deliberately simple and not collision resistant.
//! - No persistence and no thread-safety.

mod chain;
mod entry;
pub mod error;
pub mod hasher;
#[cfg(feature = "demo")]
pub mod logger;
pub mod table;
mod table_proptest;

// Public surface
pub use error::{CreateError, InsertError};
pub use table::ChainedTable;
