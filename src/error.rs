use thiserror::Error;

/// Errors produced by ring construction and the three ring operations.
///
/// The ring performs no I/O, so none of these are transient: every error
/// is reported synchronously to the caller and nothing is retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The ring was constructed with a replica count of zero.
    #[error("replica count must be positive")]
    InvalidConfiguration,

    /// A replica position of the inserted name is already occupied.
    ///
    /// Carries the name whose insertion failed. This is also what
    /// re-inserting an already-present name produces, since its replica
    /// positions are recomputed identically.
    #[error("node name {0:?} is already present on the ring")]
    DuplicateNode(String),

    /// A replica position of the removed name is not occupied, i.e. the
    /// name was never inserted.
    #[error("node name {0:?} is not present on the ring")]
    NodeNotFound(String),

    /// Lookup attempted on a ring with no registered nodes.
    #[error("ring has no nodes")]
    EmptyRing,
}
