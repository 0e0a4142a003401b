//! salesbook-domain
//!
//! Pure domain models (amounts, entry kinds, log entries, snapshots).
//! No I/O, no CLI, no storage. Only data types and their invariants.

pub mod amount;
pub mod entry;
pub mod log;
pub mod snapshot;

pub use amount::*;
pub use entry::*;
pub use log::*;
pub use snapshot::*;
