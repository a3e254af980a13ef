//! Domain Services - Pure functions over the identifier ring
//!
//! All functions in this module are pure (no I/O, no state mutation)
//! and deterministic, so they can be called from any number of threads
//! without coordination.

mod distance;
mod prefix;
mod ranking;

pub use distance::{diff, is_closer};
pub use prefix::{common_prefix_len, next_digit};
pub use ranking::{best_next_hop, find_k_closest, sort_by_distance};
