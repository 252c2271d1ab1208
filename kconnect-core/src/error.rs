//! Error types for the kconnect core library.
//!
//! Each public error enum carries a stable machine-readable code so callers
//! can branch on failures without parsing display strings.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::builder::ExecutionStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A malformed adjacency description rejected by [`crate::Graph`] construction.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An adjacency entry referenced a label outside `0..vertex_count`.
    #[error("vertex {vertex} lists neighbour {neighbour} outside 0..{vertex_count}")]
    VertexOutOfRange {
        /// Vertex whose adjacency list holds the bad entry.
        vertex: usize,
        /// The out-of-range label.
        neighbour: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A vertex listed itself as a neighbour.
    #[error("vertex {vertex} lists itself as a neighbour")]
    SelfLoop {
        /// The vertex carrying the loop.
        vertex: usize,
    },
    /// A neighbour appeared more than once in one adjacency list.
    #[error("vertex {vertex} lists neighbour {neighbour} more than once")]
    DuplicateNeighbour {
        /// Vertex whose adjacency list repeats an entry.
        vertex: usize,
        /// The repeated neighbour.
        neighbour: usize,
    },
    /// `neighbour` is adjacent to `vertex` but not the other way round.
    #[error("vertex {vertex} lists neighbour {neighbour} but {neighbour} does not list {vertex}")]
    Asymmetric {
        /// Vertex holding the one-sided entry.
        vertex: usize,
        /// Neighbour missing the reverse entry.
        neighbour: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An adjacency entry referenced a label outside the vertex range.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// A vertex listed itself as a neighbour.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// A neighbour appeared more than once in one adjacency list.
        DuplicateNeighbour => DuplicateNeighbour { .. } => "GRAPH_DUPLICATE_NEIGHBOUR",
        /// Adjacency was not symmetric.
        Asymmetric => Asymmetric { .. } => "GRAPH_ASYMMETRIC_ADJACENCY",
    }
}

/// An invalid request made of [`crate::Combinations`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SubsetError {
    /// More elements were requested than the pool holds.
    #[error("cannot draw {k} elements from a pool of {available}")]
    SizeExceedsPool {
        /// Requested subset size.
        k: usize,
        /// Number of elements in the pool.
        available: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SubsetError`] variants.
    enum SubsetErrorCode for SubsetError {
        /// More elements were requested than the pool holds.
        SizeExceedsPool => SizeExceedsPool { .. } => "SUBSET_SIZE_EXCEEDS_POOL",
    }
}

/// A failure raised while deriving an induced subgraph.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InduceError {
    /// The removal set named a vertex the graph does not have.
    #[error("cannot remove vertex {vertex}: graph has {vertex_count} vertices")]
    RemovalOutOfRange {
        /// The offending label.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The removal set named the same vertex twice.
    #[error("vertex {vertex} appears more than once in the removal set")]
    DuplicateRemoval {
        /// The repeated label.
        vertex: usize,
    },
    /// A surviving vertex could not be mapped into the relabelled range.
    #[error("surviving vertex {original} has no label in the induced subgraph")]
    RelabelInvariant {
        /// Original label that failed to map.
        original: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`InduceError`] variants.
    enum InduceErrorCode for InduceError {
        /// The removal set named a vertex the graph does not have.
        RemovalOutOfRange => RemovalOutOfRange { .. } => "INDUCE_REMOVAL_OUT_OF_RANGE",
        /// The removal set named the same vertex twice.
        DuplicateRemoval => DuplicateRemoval { .. } => "INDUCE_DUPLICATE_REMOVAL",
        /// A surviving vertex could not be relabelled.
        RelabelInvariant => RelabelInvariant { .. } => "INDUCE_RELABEL_INVARIANT",
    }
}

/// Error type produced when configuring or running [`crate::Verifier`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum VerifierError {
    /// The upper bound on removal size must be at least one.
    #[error("upper_bound must be at least 1 (got {got})")]
    InvalidUpperBound {
        /// The rejected bound.
        got: usize,
    },
    /// The upper bound exceeded the number of vertices in the graph.
    #[error(
        "graph `{data_source}` has {vertex_count} vertices but upper_bound is {upper_bound}"
    )]
    UpperBoundExceedsVertexCount {
        /// Name of the graph source.
        data_source: Arc<str>,
        /// Configured upper bound.
        upper_bound: usize,
        /// Number of vertices available for removal.
        vertex_count: usize,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
    /// Subset enumeration rejected the requested level.
    #[error("graph `{data_source}` subset enumeration failed: {error}")]
    Subset {
        /// Name of the graph source.
        data_source: Arc<str>,
        /// Underlying enumeration error.
        #[source]
        error: SubsetError,
    },
    /// Building an induced subgraph failed.
    #[error("graph `{data_source}` induced subgraph failed: {error}")]
    Induce {
        /// Name of the graph source.
        data_source: Arc<str>,
        /// Underlying induce error.
        #[source]
        error: InduceError,
    },
}

define_error_codes! {
    /// Stable codes describing [`VerifierError`] variants.
    enum VerifierErrorCode for VerifierError {
        /// The upper bound on removal size must be at least one.
        InvalidUpperBound => InvalidUpperBound { .. } => "VERIFIER_INVALID_UPPER_BOUND",
        /// The upper bound exceeded the number of vertices in the graph.
        UpperBoundExceedsVertexCount => UpperBoundExceedsVertexCount { .. } => "VERIFIER_UPPER_BOUND_EXCEEDS_VERTEX_COUNT",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "VERIFIER_BACKEND_UNAVAILABLE",
        /// Subset enumeration rejected the requested level.
        SubsetFailure => Subset { .. } => "VERIFIER_SUBSET_FAILURE",
        /// Building an induced subgraph failed.
        InduceFailure => Induce { .. } => "VERIFIER_INDUCE_FAILURE",
    }
}

impl VerifierError {
    /// Retrieve the inner [`InduceErrorCode`] when the error originated while
    /// building an induced subgraph.
    #[must_use]
    pub const fn induce_code(&self) -> Option<InduceErrorCode> {
        match self {
            Self::Induce { error, .. } => Some(error.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`SubsetErrorCode`] when the error originated in the
    /// subset enumerator.
    #[must_use]
    pub const fn subset_code(&self) -> Option<SubsetErrorCode> {
        match self {
            Self::Subset { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the verifier API.
pub type Result<T> = core::result::Result<T, VerifierError>;
