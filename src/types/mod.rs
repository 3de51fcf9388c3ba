//! Supporting value types.
//!
//! ## Types
//!
//! - [`Score`]: decimal score stored as fixed-point `u64` (scaled by 100)
//! - [`IndexDigest`]: SHA-256 fingerprint of an ordered sequence, SSZ-encodable

pub mod score;
mod digest;

pub use score::Score;
pub use digest::IndexDigest;
