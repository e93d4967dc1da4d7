//! Tell the live session apart from superseded ones.
use std::fmt;

/// The generation a session was opened under.
///
/// Generations only ever grow. Anything created during a session captures the
/// generation and must no-op once it is no longer current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    /// The generation before any session has been opened.
    pub const NONE: Self = Self(0);

    /// Returns the raw value of the [`Generation`].
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A monotonically increasing [`Generation`] counter.
#[derive(Debug, Clone, Default)]
pub struct SessionGate {
    current: Generation,
}

impl SessionGate {
    /// Creates a new [`SessionGate`] with no session issued yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the [`Generation`] of a new session, superseding every previous one.
    pub fn advance(&mut self) -> Generation {
        self.current = Generation(self.current.0 + 1);
        self.current
    }

    /// Returns the [`Generation`] of the latest session.
    pub fn current(&self) -> Generation {
        self.current
    }

    /// Returns true if `generation` belongs to the latest session.
    pub fn is_current(&self, generation: Generation) -> bool {
        generation != Generation::NONE && generation == self.current
    }
}
