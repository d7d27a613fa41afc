pub mod batch;
pub mod config;
pub mod digest;
pub mod error;

// Re-export the main entry points
pub use batch::{BatchEntry, digest_all};
pub use config::{CodeUnit, DegeneratePolicy, DigestOptions};
pub use digest::{Digest, QuadHasher, Trace, hash, hash_bytes, try_hash};
pub use error::{DegenerateQuadratic, DigestError, DigestResult};
