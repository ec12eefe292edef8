use crate::codegen::assemble::ShaderPair;
use crate::foundation::hash::StableHasher;
use std::fmt;

/// Stable 128-bit digest of a generated shader pair.
///
/// Suitable as a cache key for compiled and linked programs: equal sources always hash equal,
/// on every platform and across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShaderFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl fmt::Display for ShaderFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

pub(crate) fn fingerprint_pair(pair: &ShaderPair) -> ShaderFingerprint {
    let mut h = StableHasher::new();
    h.write_str(&pair.vertex);
    h.write_str(&pair.fragment);
    let v = h.finish();
    ShaderFingerprint {
        hi: (v >> 64) as u64,
        lo: v as u64,
    }
}
