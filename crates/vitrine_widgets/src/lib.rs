//! Vitrine Widget Library
//!
//! FSM-driven portfolio page components. Every widget is host-agnostic: the
//! host measures layout, performs scrolls, owns timers and feeds events in.

pub mod carousel;
pub mod certificates;
pub mod contact;
pub mod counter;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod style;
pub mod theme;
pub mod typing;

pub use carousel::{
    Carousel, CarouselConfig, CarouselHost, CarouselPhase, Direction, KeyboardScope, Metrics,
    ScrollBehavior,
};
pub use contact::{ContactConfig, ContactForm};
pub use counter::{CounterConfig, StatsCounter};
pub use modal::CertificateModal;
pub use nav::{MobileMenu, NavConfig, NavbarScroll, SmoothScroller};
pub use reveal::{CardHover, RevealObserver};
pub use style::StyleParseError;
pub use theme::{ColorScheme, MemoryStore, PreferenceError, PreferenceStore, ThemeToggle};
pub use typing::{TypingAnimation, TypingConfig};
