//! Array and dictionary helpers.
//!
//! - [`array`]: chunking, set operations, rotation, numeric reductions
//!   and seeded shuffles over slices.
//! - [`dict`]: merge, invert and filter operations over `BTreeMap`.
//!
//! Every helper returns a freshly allocated collection; inputs are only
//! borrowed.

pub mod array;
pub mod dict;

pub use array::*;
pub use dict::*;
