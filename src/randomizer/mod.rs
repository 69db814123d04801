//! Value randomizer.
//!
//! Produces an unbiased permutation of the host's values. The randomizer never
//! touches the registry; `BoxRegistry::assign_values` assigns the permuted
//! sequence positionally.

mod shuffle;

pub use shuffle::fisher_yates;
