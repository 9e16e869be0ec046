//! Document model for AAS environments.
//!
//! Two layers live here:
//!
//! - [`raw`]: a lenient, typed view of the external AAS JSON. Nothing in it
//!   fails on bad shapes; wrong types read as absent.
//! - [`normalized`]: the display-oriented `{AAS, SM}` structure produced by
//!   the transformer and consumed by the tree builder.

mod normalized;
pub mod raw;

pub use normalized::*;
pub use raw::{RawEnvironment, SubmodelElement};
