#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

mod error;
mod partitioner;
mod token;

use {
    crossbeam_skiplist::SkipMap,
    std::{
        ops::Bound::{Excluded, Unbounded},
        sync::Arc,
    },
    tracing::debug,
};
pub use {error::Error, partitioner::*, token::RingToken};

/// Node that serves as a destination for keys.
///
/// The ring never inspects node contents; only the caller-chosen name a
/// node is registered under governs its positions. Any value that can be
/// shared behind an `Arc` qualifies.
pub trait RingNode: Send + Sync + 'static {}

impl<T> RingNode for T where T: Send + Sync + 'static {}

/// Number of virtual positions each node occupies on the ring by default.
///
/// Higher values smooth the load distribution across nodes at the cost of
/// memory and per-membership-change work.
pub const DEFAULT_REPLICA_COUNT: usize = 100;

/// Position on the ring.
///
/// Positions are 128-bit hash values; the keyspace is circular, wrapping
/// from `RingPosition::MAX` back to `0`.
pub type RingPosition = u128;

/// Consistent hash ring with virtual-node replication.
///
/// Each registered node occupies `replicas` pseudo-random positions,
/// derived by hashing `"{name}:{index}"` for every replica index. A key is
/// routed to the node owning the nearest occupied position clockwise from
/// the key's own position, so membership changes remap only the keyspace
/// adjacent to the affected node's replicas (~1/N of all keys).
///
/// The ring is a single-owner structure: lookups may run concurrently, but
/// [`insert`](Self::insert) and [`remove`](Self::remove) perform multi-step
/// updates and must be serialized externally (e.g. behind a read-write
/// lock) when the ring is shared.
#[derive(Clone)]
pub struct HashRing<N: RingNode, P = DefaultPartitioner> {
    /// Partitioner used to compute ring positions.
    partitioner: P,

    /// Occupied positions and their owning nodes (sorted in ascending
    /// order). Every live node accounts for exactly `replicas` entries.
    positions: Arc<SkipMap<RingPosition, Arc<N>>>,

    /// The number of virtual positions each node occupies.
    replicas: usize,
}

impl<N: RingNode> Default for HashRing<N> {
    fn default() -> Self {
        Self {
            partitioner: DefaultPartitioner::new(),
            positions: Arc::new(SkipMap::new()),
            replicas: DEFAULT_REPLICA_COUNT,
        }
    }
}

impl<N: RingNode> HashRing<N> {
    /// Creates a new empty hash ring with the given replica count.
    ///
    /// Any type implementing [`RingNode`] can be used as a node type.
    ///
    /// # Examples
    ///
    /// ```
    /// let ring = chring::HashRing::new(100).unwrap();
    /// ring.insert("cache-1", "10.0.0.1:11211").unwrap();
    /// ring.insert("cache-2", "10.0.0.2:11211").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `replicas` is zero.
    pub fn new(replicas: usize) -> Result<Self, Error> {
        Self::with_partitioner(replicas, DefaultPartitioner::new())
    }
}

impl<N: RingNode, P: Partitioner> HashRing<N, P> {
    /// Creates a new empty hash ring with a custom partitioner.
    ///
    /// Useful when position assignments must agree with another system,
    /// e.g. [`Md5Partitioner`] for rings that hash with MD5.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `replicas` is zero.
    pub fn with_partitioner(replicas: usize, partitioner: P) -> Result<Self, Error> {
        if replicas == 0 {
            return Err(Error::InvalidConfiguration);
        }
        Ok(Self {
            partitioner,
            positions: Arc::new(SkipMap::new()),
            replicas,
        })
    }

    /// Adds a node to the ring under the given name.
    ///
    /// The node comes to occupy `replicas` positions, one per replica
    /// index `i` in `0..replicas`, each derived as the position of
    /// `"{name}:{i}"`. All positions are validated before any is applied:
    /// on error the ring is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if any replica position is already
    /// occupied. Re-inserting a present name always fails this way, since
    /// its positions are recomputed identically.
    pub fn insert(&self, name: &str, node: N) -> Result<(), Error> {
        let positions = self.replica_positions(name);
        for (i, pos) in positions.iter().enumerate() {
            if self.positions.contains_key(pos) || positions[..i].contains(pos) {
                return Err(Error::DuplicateNode(name.to_owned()));
            }
        }

        let node = Arc::new(node);
        for pos in positions {
            self.positions.insert(pos, Arc::clone(&node));
        }
        debug!(name, replicas = self.replicas, "node added to ring");
        Ok(())
    }

    /// Removes the node registered under the given name.
    ///
    /// Recomputes the name's `replicas` positions and deletes them. All
    /// positions are verified present before any is deleted: on error the
    /// ring is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if any replica position is absent,
    /// i.e. the name was never inserted.
    pub fn remove(&self, name: &str) -> Result<(), Error> {
        let positions = self.replica_positions(name);
        if positions.iter().any(|pos| !self.positions.contains_key(pos)) {
            return Err(Error::NodeNotFound(name.to_owned()));
        }

        for pos in &positions {
            self.positions.remove(pos);
        }
        debug!(name, "node removed from ring");
        Ok(())
    }

    /// Returns the node responsible for the given key.
    ///
    /// The key resolves to the first occupied position strictly greater
    /// than the key's own position; past the maximum the ring wraps around
    /// to the smallest occupied position. The returned token exposes both
    /// the resolved position and the owning node.
    ///
    /// # Examples
    ///
    /// ```
    /// let ring = chring::HashRing::new(100).unwrap();
    /// ring.insert("cache-1", "10.0.0.1:11211").unwrap();
    ///
    /// let token = ring.lookup("user:42").unwrap();
    /// assert_eq!(token.node(), &"10.0.0.1:11211");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRing`] when no nodes are registered.
    pub fn lookup(&self, key: impl AsRef<[u8]>) -> Result<RingToken<'_, N>, Error> {
        let pos = self.position(key);
        self.positions
            .range((Excluded(pos), Unbounded))
            .next()
            .or_else(|| self.positions.front())
            .map(Into::into)
            .ok_or(Error::EmptyRing)
    }

    /// Returns ring position to which a given key will be assigned.
    pub fn position(&self, key: impl AsRef<[u8]>) -> RingPosition {
        self.partitioner.position(key.as_ref())
    }

    /// Returns every occupied position with its owning node, in ascending
    /// position order.
    pub fn tokens(&self) -> Vec<RingToken<'_, N>> {
        self.positions.iter().map(Into::into).collect()
    }

    /// Returns the replica count the ring was constructed with.
    pub fn replicas(&self) -> usize {
        self.replicas
    }

    /// Returns the number of occupied positions, i.e. `replicas` times the
    /// number of registered nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the ring has no registered nodes.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.len() / self.replicas
    }

    /// Positions the given name's replicas occupy, in replica-index order.
    fn replica_positions(&self, name: &str) -> Vec<RingPosition> {
        (0..self.replicas)
            .map(|i| self.partitioner.position(format!("{name}:{i}").as_bytes()))
            .collect()
    }
}
