use core::cmp::Ordering;

/// A token attached to an NFA accept state: an opaque identifier plus the
/// priority used to resolve conflicts when several patterns accept the
/// same prefix.
///
/// Tokens order by priority first (numerically smaller wins), then by id,
/// so `min` over a set of candidate tokens is the conflict resolution
/// rule used throughout subset construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    id: usize,
    priority: usize,
}

impl Token {
    /// Create a token with the given id and priority.
    #[must_use]
    pub const fn new(id: usize, priority: usize) -> Self {
        Self { id, priority }
    }

    /// The token's identifier.
    #[must_use]
    pub const fn id(self) -> usize {
        self.id
    }

    /// The token's priority. Smaller values win.
    #[must_use]
    pub const fn priority(self) -> usize {
        self.priority
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
