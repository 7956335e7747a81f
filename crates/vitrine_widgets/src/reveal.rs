//! Reveal-on-scroll classes and project card hover lift
//!
//! Hosts feed intersection ratios per element; an element gets its class the
//! first time it crosses the threshold and is latched afterwards. Root margins
//! (the page shrinks the bottom edge by 50px) are the host observer's concern.

use rustc_hash::FxHashSet;
use vitrine_core::events::{event_types, EventType};
use vitrine_core::fsm::StateTransitions;

/// One-shot class assignment on intersection
#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: f32,
    class: &'static str,
    revealed: FxHashSet<u64>,
}

impl RevealObserver {
    pub fn new(threshold: f32, class: &'static str) -> Self {
        Self {
            threshold,
            class,
            revealed: FxHashSet::default(),
        }
    }

    /// Skill items, project cards, timeline items and stats fading in
    pub fn animate_in() -> Self {
        Self::new(0.1, "animate-in")
    }

    /// Skill items pulsing once they are half visible
    pub fn skill_pulse() -> Self {
        Self::new(0.5, "skill-animate")
    }

    /// Element `id` is now `ratio` visible; returns the class to add, once
    pub fn observe(&mut self, id: u64, ratio: f32) -> Option<&'static str> {
        if ratio <= 0.0 || ratio < self.threshold {
            return None;
        }
        if self.revealed.insert(id) {
            tracing::trace!(id, class = self.class, "element revealed");
            Some(self.class)
        } else {
            None
        }
    }

    pub fn is_revealed(&self, id: u64) -> bool {
        self.revealed.contains(&id)
    }
}

/// Project card hover states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardHover {
    #[default]
    Resting,
    Lifted,
}

impl CardHover {
    /// Inline transform for the card
    pub fn transform(&self) -> &'static str {
        match self {
            CardHover::Resting => "translateY(0) scale(1)",
            CardHover::Lifted => "translateY(-10px) scale(1.02)",
        }
    }
}

impl StateTransitions for CardHover {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (CardHover::Resting, event_types::POINTER_ENTER) => Some(CardHover::Lifted),
            (CardHover::Lifted, event_types::POINTER_LEAVE) => Some(CardHover::Resting),
            _ => None,
        }
    }
}
