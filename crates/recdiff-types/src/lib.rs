//! Value model for recdiff.
//!
//! Every value handed to the diff engine is one of three shapes: a
//! [`Primitive`] scalar, a [`Record`] of named fields, or an ordered
//! [`Collection`]. The shape is decided once, when a value enters the system
//! (usually from JSON), and carried as the [`Value`] tag from then on.
//!
//! # Key Types
//!
//! - [`Value`] — Tagged union `Primitive | Record | Collection`
//! - [`Primitive`] — Null, boolean, number, or string
//! - [`Record`] — Field name to value mapping, possibly nested
//! - [`Collection`] — Ordered sequence of values, usually records
//! - [`ValueKind`] — Shape tag used in diagnostics

pub mod collection;
pub mod error;
pub mod primitive;
pub mod record;
pub mod value;

pub use collection::Collection;
pub use error::TypeError;
pub use primitive::Primitive;
pub use record::Record;
pub use value::{Value, ValueKind};
