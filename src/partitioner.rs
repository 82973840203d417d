use {crate::RingPosition, md5::Digest, xxhash_rust::xxh3::xxh3_128};

/// A keyspace partitioning strategy.
///
/// Partitioner is responsible for mapping byte strings to positions on the
/// ring i.e. it knows how to partition the keyspace.
///
/// Implementations must be deterministic across calls and across processes
/// (no random seeding), so that independently constructed rings holding the
/// same node names agree on every position without coordination.
pub trait Partitioner {
    /// Returns ring position for a given key.
    fn position(&self, key: &[u8]) -> RingPosition;
}

/// A partitioner that uses the 128-bit variant of the XXH3 hash function.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh3Partitioner;

impl Xxh3Partitioner {
    pub fn new() -> Self {
        Self
    }
}

impl Partitioner for Xxh3Partitioner {
    fn position(&self, key: &[u8]) -> RingPosition {
        xxh3_128(key)
    }
}

/// A partitioner that interprets the MD5 digest of a key as a big-endian
/// 128-bit integer.
///
/// Produces the same position assignments as rings that hash with MD5,
/// which makes it a drop-in choice when routing must agree with such a
/// deployment. Slower than [`Xxh3Partitioner`]; collision strength is
/// irrelevant here, only distribution uniformity matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct Md5Partitioner;

impl Md5Partitioner {
    pub fn new() -> Self {
        Self
    }
}

impl Partitioner for Md5Partitioner {
    fn position(&self, key: &[u8]) -> RingPosition {
        let digest = md5::Md5::digest(key);
        RingPosition::from_be_bytes(digest.into())
    }
}

/// Default partitioner.
pub type DefaultPartitioner = Xxh3Partitioner;
