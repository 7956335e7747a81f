//! State Machine Runtime
//!
//! Flat state machines over user-defined enums. The enum describes its own
//! transition table through [`StateTransitions`]; [`Machine`] holds the
//! current state, applies optional guards and records history.

use std::fmt::Debug;
use std::hash::Hash;

use crate::events::EventType;

/// Transition table for a state enum
///
/// # Example
///
/// ```rust
/// use vitrine_core::events::event_types::*;
/// use vitrine_core::fsm::StateTransitions;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum Hover {
///     Idle,
///     Hovered,
/// }
///
/// impl StateTransitions for Hover {
///     fn on_event(&self, event: u32) -> Option<Self> {
///         match (self, event) {
///             (Hover::Idle, POINTER_ENTER) => Some(Hover::Hovered),
///             (Hover::Hovered, POINTER_LEAVE) => Some(Hover::Idle),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + Debug + 'static {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// Default number of transitions kept in history
const DEFAULT_HISTORY_LIMIT: usize = 64;

/// A state machine instance
#[derive(Debug, Clone)]
pub struct Machine<S: StateTransitions> {
    current: S,
    /// History of state transitions (for debugging)
    history: Vec<(S, EventType, S)>,
    history_limit: usize,
}

impl<S: StateTransitions> Machine<S> {
    /// Create a machine in its initial state
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Bound the number of recorded transitions (0 disables history)
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self.history.truncate(limit);
        self
    }

    /// Get the current state
    pub fn current(&self) -> S {
        self.current
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current == state
    }

    /// Check if an event would trigger a transition from the current state
    pub fn can_send(&self, event: EventType) -> bool {
        self.current.on_event(event).is_some()
    }

    /// Send an event, returning the new state if a transition happened
    pub fn send(&mut self, event: EventType) -> Option<S> {
        self.send_guarded(event, |_, _| true)
    }

    /// Send an event, letting `guard` veto the transition
    ///
    /// The guard sees `(from, to)` and returns whether the transition may
    /// proceed. A vetoed transition leaves the machine untouched.
    pub fn send_guarded<G>(&mut self, event: EventType, guard: G) -> Option<S>
    where
        G: FnOnce(S, S) -> bool,
    {
        let from = self.current;
        let to = from.on_event(event)?;

        if !guard(from, to) {
            tracing::trace!(?from, ?to, event, "transition vetoed by guard");
            return None;
        }

        self.current = to;
        self.record(from, event, to);
        Some(to)
    }

    /// Get transition history
    pub fn history(&self) -> &[(S, EventType, S)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn record(&mut self, from: S, event: EventType, to: S) {
        if self.history_limit == 0 {
            return;
        }
        if self.history.len() == self.history_limit {
            self.history.remove(0);
        }
        self.history.push((from, event, to));
    }
}

impl<S: StateTransitions + Default> Default for Machine<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
