//! Result types produced by [`crate::Verifier`].

use std::{collections::BTreeMap, fmt};

use crate::subsets::VertexSubset;

/// Outcome of checking every removal of one size.
///
/// # Examples
/// ```
/// use kconnect_core::{VerifierBuilder, fixtures};
///
/// let cycle = fixtures::cycle(4).expect("4-cycle");
/// let verifier = VerifierBuilder::new().with_upper_bound(2).build().expect("valid");
/// let report = verifier.run(&cycle).expect("2 <= 4");
/// let level = report.level(2).expect("level 2 was checked");
/// assert!(!level.connected());
/// assert_eq!(level.witness(), Some(&[0, 2][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelOutcome {
    level: usize,
    subsets_examined: usize,
    cuts_found: usize,
    witness: Option<VertexSubset>,
}

impl LevelOutcome {
    pub(crate) fn new(
        level: usize,
        subsets_examined: usize,
        cuts_found: usize,
        witness: Option<VertexSubset>,
    ) -> Self {
        Self {
            level,
            subsets_examined,
            cuts_found,
            witness,
        }
    }

    /// Removal size k.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// `true` when no removal of size k disconnects the graph.
    #[must_use]
    pub fn connected(&self) -> bool {
        self.witness.is_none()
    }

    /// Number of subsets evaluated.
    ///
    /// Equals C(n, k) unless the level short-circuited. Under the parallel
    /// strategy with short-circuiting the count depends on scheduling.
    #[must_use]
    pub fn subsets_examined(&self) -> usize {
        self.subsets_examined
    }

    /// Number of disconnecting subsets found.
    ///
    /// Exact only when short-circuiting is disabled; otherwise at most one.
    #[must_use]
    pub fn cuts_found(&self) -> usize {
        self.cuts_found
    }

    /// The lexicographically first disconnecting subset, if any.
    #[must_use]
    pub fn witness(&self) -> Option<&[usize]> {
        self.witness.as_deref()
    }
}

/// What a report establishes about the vertex connectivity κ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityBound {
    /// κ equals the value.
    Exact(usize),
    /// κ is at least the value.
    AtLeast(usize),
}

impl fmt::Display for ConnectivityBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(value) => write!(f, "= {value}"),
            Self::AtLeast(value) => write!(f, ">= {value}"),
        }
    }
}

/// Per-level verdicts for one graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityReport {
    data_source: String,
    vertex_count: usize,
    min_degree: Option<usize>,
    base_connected: bool,
    upper_bound: usize,
    levels: Vec<LevelOutcome>,
}

impl ConnectivityReport {
    pub(crate) fn new(
        data_source: String,
        vertex_count: usize,
        min_degree: Option<usize>,
        base_connected: bool,
        levels: Vec<LevelOutcome>,
    ) -> Self {
        let upper_bound = levels.last().map_or(0, LevelOutcome::level);
        Self {
            data_source,
            vertex_count,
            min_degree,
            base_connected,
            upper_bound,
            levels,
        }
    }

    /// Name of the analysed graph source.
    #[must_use]
    pub fn data_source(&self) -> &str {
        &self.data_source
    }

    /// Number of vertices in the analysed graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Smallest vertex degree of the analysed graph.
    #[must_use]
    pub fn min_degree(&self) -> Option<usize> {
        self.min_degree
    }

    /// Whether the graph is connected before any removal.
    #[must_use]
    pub fn base_connected(&self) -> bool {
        self.base_connected
    }

    /// Largest removal size checked.
    #[must_use]
    pub fn upper_bound(&self) -> usize {
        self.upper_bound
    }

    /// Level outcomes for k = 1..=K, in order.
    #[must_use]
    pub fn levels(&self) -> &[LevelOutcome] {
        &self.levels
    }

    /// Outcome for removal size `k`, if it was checked.
    #[must_use]
    pub fn level(&self, k: usize) -> Option<&LevelOutcome> {
        self.levels.iter().find(|outcome| outcome.level == k)
    }

    /// Mapping from k to whether the graph survives every k-removal.
    ///
    /// # Examples
    /// ```
    /// use kconnect_core::{VerifierBuilder, fixtures};
    ///
    /// let path = fixtures::path(3).expect("path");
    /// let verifier = VerifierBuilder::new().with_upper_bound(2).build().expect("valid");
    /// let map = verifier.run(&path).expect("2 <= 3").as_map();
    /// assert_eq!(map.get(&1), Some(&false));
    /// assert_eq!(map.get(&2), Some(&true));
    /// ```
    #[must_use]
    pub fn as_map(&self) -> BTreeMap<usize, bool> {
        self.levels
            .iter()
            .map(|outcome| (outcome.level, outcome.connected()))
            .collect()
    }

    /// `true` when every checked level left the graph connected.
    #[must_use]
    pub fn all_connected(&self) -> bool {
        self.levels.iter().all(LevelOutcome::connected)
    }

    /// Smallest k at which some removal disconnected the graph.
    #[must_use]
    pub fn first_failing_level(&self) -> Option<&LevelOutcome> {
        self.levels.iter().find(|outcome| !outcome.connected())
    }

    /// The bound on vertex connectivity these levels establish.
    ///
    /// A disconnected graph has κ = 0. Otherwise the smallest failing level is
    /// κ itself, since every smaller removal left the graph connected. When no
    /// level fails, κ > K; because κ never exceeds the minimum degree δ, a run
    /// with K + 1 ≥ δ pins κ = δ.
    ///
    /// # Examples
    /// ```
    /// use kconnect_core::{ConnectivityBound, VerifierBuilder, fixtures};
    ///
    /// let reference = fixtures::reference().expect("reference graph");
    /// let verifier = VerifierBuilder::new().with_upper_bound(3).build().expect("valid");
    /// let report = verifier.run(&reference).expect("3 <= 8");
    /// assert_eq!(report.bound(), ConnectivityBound::Exact(4));
    /// ```
    #[must_use]
    pub fn bound(&self) -> ConnectivityBound {
        if !self.base_connected {
            return ConnectivityBound::Exact(0);
        }
        if let Some(outcome) = self.first_failing_level() {
            return ConnectivityBound::Exact(outcome.level);
        }
        let next = self.upper_bound.saturating_add(1);
        match self.min_degree {
            Some(min_degree) if next >= min_degree => ConnectivityBound::Exact(min_degree),
            _ => ConnectivityBound::AtLeast(next),
        }
    }
}
