//! Error types for table construction and insertion.

use std::collections::TryReserveError;
use thiserror::Error;

/// Why a table could not be created. No partially built table is returned.
#[derive(Debug, Error)]
pub enum CreateError {
    #[error("hash table capacity must be at least 1")]
    ZeroCapacity,
    #[error("could not allocate {capacity} slots: {source}")]
    Allocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Recoverable insert failure; the table is left unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InsertError {
    #[error("insert error: hash table is full ({capacity} slots)")]
    TableFull { capacity: usize },
}
