//! Page navigation: anchor scrolling, navbar background, mobile menu

use serde::{Deserialize, Serialize};
use vitrine_core::events::{event_types, EventType};
use vitrine_core::fsm::{Machine, StateTransitions};

/// Navigation-specific FSM events
pub mod nav_events {
    use vitrine_core::EventType;

    /// A navigation link inside the menu was followed
    pub const LINK_FOLLOWED: EventType = 200;
}

/// Navigation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Height of the fixed navbar subtracted from anchor targets
    pub navbar_offset: f32,
    /// Window scroll past which the navbar gets its solid background
    pub scrolled_threshold: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            navbar_offset: 70.0,
            scrolled_threshold: 50.0,
        }
    }
}

/// Resolves in-page anchor links to window scroll targets
#[derive(Debug, Clone)]
pub struct SmoothScroller {
    navbar_offset: f32,
}

impl SmoothScroller {
    pub fn new(config: &NavConfig) -> Self {
        Self {
            navbar_offset: config.navbar_offset,
        }
    }

    /// Window offset for a section at `section_top`, or None if it is missing
    pub fn target_for(&self, section_top: Option<f32>) -> Option<f32> {
        section_top.map(|top| (top - self.navbar_offset).max(0.0))
    }
}

/// Tracks the navbar `scrolled` class
#[derive(Debug, Clone)]
pub struct NavbarScroll {
    threshold: f32,
    scrolled: bool,
}

impl NavbarScroll {
    pub fn new(config: &NavConfig) -> Self {
        Self {
            threshold: config.scrolled_threshold,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Window scrolled to `y`; returns the new class state when it changed
    pub fn on_scroll(&mut self, y: f32) -> Option<bool> {
        let scrolled = y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

/// Mobile menu states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl StateTransitions for MenuState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (MenuState::Closed, event_types::CLICK) => Some(MenuState::Open),
            (MenuState::Open, event_types::CLICK) => Some(MenuState::Closed),
            (MenuState::Open, nav_events::LINK_FOLLOWED) => Some(MenuState::Closed),
            _ => None,
        }
    }
}

/// Hamburger menu; `active` applies to both the menu and its button
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    state: Machine<MenuState>,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_in(MenuState::Open)
    }

    /// Menu button clicked
    pub fn toggle(&mut self) -> bool {
        self.state.send(event_types::CLICK);
        self.is_active()
    }

    /// A navigation link was clicked
    pub fn on_link_click(&mut self) {
        self.state.send(nav_events::LINK_FOLLOWED);
    }
}
