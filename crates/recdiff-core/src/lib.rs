//! Diff engine for recdiff.
//!
//! Computes what changed when moving from a "before" value to an "after"
//! value. The diff is after-biased: only additions and changes visible in
//! "after" are reported, never removals.
//!
//! # Key Types
//!
//! - [`record_diff`] / [`RecordDelta`] -- Field-by-field record comparison
//! - [`collection_diff`] -- Keyed comparison of ordered collections
//! - [`diff`] / [`Delta`] -- Shape-routed entry point
//! - [`apply`] / [`Operation`] -- Validated entry over a supplied argument list

pub mod collection_diff;
pub mod delta;
pub mod dispatch;
pub mod error;
pub mod index;
pub mod record_diff;

pub use collection_diff::collection_diff;
pub use delta::{Delta, RecordDelta};
pub use dispatch::{apply, diff, diff_collections, diff_records, Operation};
pub use error::{Argument, DiffError, DiffResult};
pub use index::{EntryKey, KeyedIndex};
pub use record_diff::record_diff;
