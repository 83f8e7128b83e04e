// Prosody: syllable weights, gana packing and meter matching
//
// The packer itself lives in chhanda-core (the meter table needs it to
// canonicalize patterns) and is re-exported here.

pub mod classifier;
pub mod matcher;

pub use chhanda_core::gana::pack_weights;
pub use classifier::{Syllabification, classify};
pub use matcher::match_meter;
