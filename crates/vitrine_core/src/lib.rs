//! Vitrine Core Runtime
//!
//! Foundational primitives shared by every Vitrine widget:
//!
//! - **Events**: a host-agnostic input model (pointer, touch, key, resize, visibility)
//! - **State Machines**: enum-based machines with guarded transitions and history
//!
//! # Example
//!
//! ```rust
//! use vitrine_core::events::event_types::*;
//! use vitrine_core::fsm::{Machine, StateTransitions};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Menu {
//!     Closed,
//!     Open,
//! }
//!
//! impl StateTransitions for Menu {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Menu::Closed, POINTER_UP) => Some(Menu::Open),
//!             (Menu::Open, POINTER_UP) => Some(Menu::Closed),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut menu = Machine::new(Menu::Closed);
//! menu.send(POINTER_UP);
//! assert!(menu.is_in(Menu::Open));
//! ```

pub mod events;
pub mod fsm;

pub use events::{Event, EventData, EventType, KeyCode};
pub use fsm::{Machine, StateTransitions};
