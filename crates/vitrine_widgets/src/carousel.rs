//! Horizontally paged carousel with FSM-driven interactions
//!
//! The carousel owns a host that measures layout and performs scrolls, and
//! drives it from discrete input callbacks:
//!
//! - **Paging**: `advance(Next | Previous)` with clamped indexes, no wraparound
//! - **Auto-advance**: a periodic timer while the carousel is on a desktop-width
//!   viewport, sufficiently visible and not hovered
//! - **Grab-scroll drag**: pointer movement scrolls the content directly
//! - **Touch swipe**: one page per swipe past the threshold, snap otherwise
//! - **Snap**: any free-form position is corrected to the nearest item boundary
//!
//! Which input source drives the scroll offset is tracked by a
//! [`CarouselPhase`] machine. Pointer drag and the auto-advance timer never
//! overlap: pressing the pointer cancels the timer before the drag begins, and
//! the timer cannot be started while a drag is active.
//!
//! Geometry is never cached. Every position calculation re-measures the first
//! item's width and the container's computed gap through [`CarouselHost`].
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_widgets::carousel::{Carousel, CarouselConfig, Direction};
//!
//! let mut carousel = Carousel::new(host, CarouselConfig::default());
//! carousel.on_visibility_change(0.6);
//! carousel.advance(Direction::Next);
//! assert_eq!(carousel.current_index(), 1);
//! ```

use serde::{Deserialize, Serialize};
use vitrine_animation::TimerId;
use vitrine_core::events::{event_types, Event, EventData, EventType, KeyCode};
use vitrine_core::fsm::{Machine, StateTransitions};

use crate::style;

/// Carousel-internal FSM events
pub mod carousel_events {
    use vitrine_core::EventType;

    pub const AUTO_START: EventType = 100;
    pub const AUTO_STOP: EventType = 101;
    pub const DRAG_START: EventType = 102;
    pub const DRAG_END: EventType = 103;
    /// An animated page or snap was requested
    pub const SCROLL_REQUESTED: EventType = 104;
    /// The last animated scroll reached its target
    pub const SCROLL_SETTLED: EventType = 105;
}

/// What is currently driving the scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselPhase {
    /// Nothing is moving the content
    #[default]
    Idle,
    /// The auto-advance timer is armed
    AutoAdvancing,
    /// A pointer drag owns the offset
    Dragging,
    /// A manual page or snap animation is in flight
    Snapping,
}

impl StateTransitions for CarouselPhase {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use carousel_events::*;
        use CarouselPhase::*;
        match (self, event) {
            (Idle, AUTO_START) => Some(AutoAdvancing),
            (AutoAdvancing, AUTO_STOP) => Some(Idle),
            (Idle | AutoAdvancing | Snapping, DRAG_START) => Some(Dragging),
            (Dragging, DRAG_END) => Some(Snapping),
            (Idle | AutoAdvancing | Snapping, SCROLL_REQUESTED) => Some(Snapping),
            (Snapping, SCROLL_SETTLED) => Some(Idle),
            _ => None,
        }
    }
}

/// Paging direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// How the host should realize a scroll request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Jump immediately
    Instant,
    /// Animate toward the target
    #[default]
    Smooth,
}

/// Which key presses may page the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardScope {
    /// Arrow keys page the carousel wherever focus is
    #[default]
    Global,
    /// Arrow keys only page while the carousel has focus
    Focused,
}

/// Carousel behavior configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Auto-advance period in milliseconds
    pub auto_advance_period_ms: u64,
    /// Minimum viewport width (logical px) for auto-advance
    pub desktop_min_width: f32,
    /// Minimum visible fraction of the container for auto-advance
    pub visibility_threshold: f32,
    /// Horizontal touch displacement (logical px) that counts as a swipe
    pub swipe_threshold: f32,
    /// Gap used when the computed gap style is missing or unparseable
    pub default_gap: f32,
    pub keyboard_scope: KeyboardScope,
    /// Assumed duration of a smooth scroll when the host never reports settle
    pub settle_estimate_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_period_ms: 6000,
            desktop_min_width: 1024.0,
            visibility_threshold: 0.4,
            swipe_threshold: 40.0,
            default_gap: 32.0,
            keyboard_scope: KeyboardScope::Global,
            settle_estimate_ms: 600,
        }
    }
}

impl CarouselConfig {
    /// Set the auto-advance period
    pub fn period_ms(mut self, period_ms: u64) -> Self {
        self.auto_advance_period_ms = period_ms;
        self
    }

    /// Set the keyboard scope
    pub fn keyboard_scope(mut self, scope: KeyboardScope) -> Self {
        self.keyboard_scope = scope;
        self
    }

    /// Set the settle estimate
    pub fn settle_estimate_ms(mut self, ms: u64) -> Self {
        self.settle_estimate_ms = ms;
        self
    }
}

/// Layout measurements and scroll/timer effects supplied by the host
pub trait CarouselHost {
    /// Number of items currently laid out
    fn item_count(&self) -> usize;

    /// Rendered width of the item at `index`, if it exists
    fn item_width(&self, index: usize) -> Option<f32>;

    /// Computed horizontal gap style of the container (e.g. `"32px"`)
    fn gap_style(&self) -> Option<String>;

    /// Current horizontal scroll offset of the container
    fn scroll_offset(&self) -> f32;

    /// Viewport width in logical pixels
    fn viewport_width(&self) -> f32;

    /// Host clock in milliseconds
    fn now_ms(&self) -> u64;

    /// Scroll the container to an absolute horizontal offset
    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior);

    /// Apply or remove the "dragging" affordance
    fn set_dragging(&mut self, dragging: bool);

    /// Start a periodic timer that reports back through [`Carousel::on_timer`]
    fn start_interval(&mut self, period_ms: u64) -> TimerId;

    /// Cancel a timer started with [`CarouselHost::start_interval`]
    fn cancel_interval(&mut self, id: TimerId);
}

/// Geometry measured for one position calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub item_count: usize,
    pub item_width: f32,
    pub gap: f32,
}

impl Metrics {
    /// Distance between consecutive item boundaries
    pub fn stride(&self) -> f32 {
        self.item_width + self.gap
    }

    /// Scroll offset that aligns `index` with the container start
    pub fn offset_of(&self, index: usize) -> f32 {
        index as f32 * self.stride()
    }

    pub fn last_index(&self) -> usize {
        self.item_count.saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy)]
struct DragOrigin {
    start_x: f32,
    start_offset: f32,
}

#[derive(Debug, Clone, Copy)]
struct TouchTrack {
    start_x: f32,
    last_x: f32,
}

/// Carousel controller
pub struct Carousel<H: CarouselHost> {
    host: H,
    config: CarouselConfig,
    index: usize,
    phase: Machine<CarouselPhase>,
    timer: Option<TimerId>,
    hovered: bool,
    focused: bool,
    visible_ratio: f32,
    drag: Option<DragOrigin>,
    touch: Option<TouchTrack>,
    /// Host time after which the last smooth scroll is assumed settled
    in_flight_until: Option<u64>,
}

impl<H: CarouselHost> Carousel<H> {
    /// Create a carousel at index 0
    pub fn new(host: H, config: CarouselConfig) -> Self {
        Self {
            host,
            config,
            index: 0,
            phase: Machine::new(CarouselPhase::Idle),
            timer: None,
            hovered: false,
            focused: false,
            visible_ratio: 0.0,
            drag: None,
            touch: None,
            in_flight_until: None,
        }
    }

    /// Index of the current item, clamped to the host's item list as it is now
    pub fn current_index(&self) -> usize {
        self.index.min(self.host.item_count().saturating_sub(1))
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase.current()
    }

    /// Transition history of the phase machine
    pub fn phase_history(&self) -> &[(CarouselPhase, EventType, CarouselPhase)] {
        self.phase.history()
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Measure the current geometry, or None when there is nothing to page
    pub fn measure(&self) -> Option<Metrics> {
        let item_count = self.host.item_count();
        if item_count == 0 {
            return None;
        }
        let item_width = self.host.item_width(0)?;
        let gap = style::resolve_gap(self.host.gap_style().as_deref(), self.config.default_gap);
        let metrics = Metrics {
            item_count,
            item_width,
            gap,
        };
        if metrics.stride() > 0.0 {
            Some(metrics)
        } else {
            tracing::trace!(?metrics, "degenerate carousel geometry");
            None
        }
    }

    // ========================================================================
    // Paging
    // ========================================================================

    /// Page one item in `direction`
    pub fn advance(&mut self, direction: Direction) {
        self.settle_if_elapsed();
        self.index = self.current_index();
        if self.phase.is_in(CarouselPhase::Dragging) {
            tracing::trace!(?direction, "advance rejected while dragging");
            return;
        }
        if self.page(direction) {
            self.send(carousel_events::SCROLL_REQUESTED);
        }
    }

    /// Correct the scroll offset to the nearest item boundary
    pub fn snap_to_nearest(&mut self) {
        self.settle_if_elapsed();
        self.index = self.current_index();
        if self.phase.is_in(CarouselPhase::Dragging) {
            tracing::trace!("snap rejected while dragging");
            return;
        }
        if self.snap() {
            self.send(carousel_events::SCROLL_REQUESTED);
        }
    }

    fn page(&mut self, direction: Direction) -> bool {
        let Some(metrics) = self.measure() else {
            return false;
        };
        let current = self.index.min(metrics.last_index());
        let target = match direction {
            Direction::Next => (current + 1).min(metrics.last_index()),
            Direction::Previous => current.saturating_sub(1),
        };
        self.index = target;
        self.request_scroll(metrics.offset_of(target));
        tracing::debug!(?direction, index = target, "carousel paged");
        true
    }

    fn snap(&mut self) -> bool {
        let Some(metrics) = self.measure() else {
            return false;
        };
        let nearest = (self.host.scroll_offset() / metrics.stride()).round();
        let index = if nearest.is_finite() && nearest > 0.0 {
            (nearest as usize).min(metrics.last_index())
        } else {
            0
        };
        self.index = index;
        self.request_scroll(metrics.offset_of(index));
        tracing::debug!(index, "carousel snapped");
        true
    }

    fn request_scroll(&mut self, offset: f32) {
        self.host.scroll_to(offset, ScrollBehavior::Smooth);
        self.in_flight_until = Some(
            self.host
                .now_ms()
                .saturating_add(self.config.settle_estimate_ms),
        );
    }

    // ========================================================================
    // Auto-advance
    // ========================================================================

    /// Start the auto-advance timer if every condition holds (idempotent)
    pub fn start_auto_advance(&mut self) {
        if self.timer.is_some() {
            return;
        }
        if !self.auto_advance_allowed() {
            tracing::trace!(
                viewport = self.host.viewport_width(),
                visible = self.visible_ratio,
                hovered = self.hovered,
                "auto-advance conditions not met"
            );
            return;
        }
        let id = self.host.start_interval(self.config.auto_advance_period_ms);
        self.timer = Some(id);
        self.send(carousel_events::AUTO_START);
        tracing::debug!(period_ms = self.config.auto_advance_period_ms, "auto-advance started");
    }

    /// Cancel the auto-advance timer if present (idempotent)
    pub fn pause_auto_advance(&mut self) {
        if let Some(id) = self.timer.take() {
            self.host.cancel_interval(id);
            self.send(carousel_events::AUTO_STOP);
            tracing::debug!("auto-advance paused");
        }
    }

    fn auto_advance_allowed(&self) -> bool {
        self.host.item_count() > 0
            && !self.phase.is_in(CarouselPhase::Dragging)
            && !self.hovered
            && self.visible_ratio >= self.config.visibility_threshold
            && self.host.viewport_width() >= self.config.desktop_min_width
    }

    fn refresh_auto_advance(&mut self) {
        if self.auto_advance_allowed() {
            self.start_auto_advance();
        } else {
            self.pause_auto_advance();
        }
    }

    /// A host timer fired
    pub fn on_timer(&mut self, id: TimerId) {
        if self.timer != Some(id) {
            tracing::trace!(?id, "ignoring stale timer");
            return;
        }
        self.settle_if_elapsed();

        match self.phase.current() {
            CarouselPhase::Dragging | CarouselPhase::Snapping => {
                tracing::trace!(phase = ?self.phase.current(), "auto-advance tick rejected");
            }
            CarouselPhase::Idle | CarouselPhase::AutoAdvancing => {
                if self.in_flight_until.is_some() {
                    tracing::trace!("auto-advance tick coalesced with in-flight scroll");
                    return;
                }
                self.page(Direction::Next);
            }
        }
    }

    // ========================================================================
    // Scroll completion
    // ========================================================================

    /// The host reports that the last animated scroll reached its target
    pub fn on_scroll_settled(&mut self) {
        if self.in_flight_until.is_some() || self.phase.is_in(CarouselPhase::Snapping) {
            self.finish_scroll();
        }
    }

    fn settle_if_elapsed(&mut self) {
        if let Some(until) = self.in_flight_until {
            if self.host.now_ms() >= until {
                self.finish_scroll();
            }
        }
    }

    fn finish_scroll(&mut self) {
        self.in_flight_until = None;
        if self.send(carousel_events::SCROLL_SETTLED) && self.timer.is_some() {
            self.send(carousel_events::AUTO_START);
        }
    }

    // ========================================================================
    // Pointer drag
    // ========================================================================

    /// Begin a grab-scroll drag at horizontal coordinate `x`
    pub fn on_pointer_down(&mut self, x: f32) {
        if self.measure().is_none() {
            return;
        }
        self.settle_if_elapsed();
        self.pause_auto_advance();
        if !self.send(carousel_events::DRAG_START) {
            return;
        }
        self.in_flight_until = None;
        self.drag = Some(DragOrigin {
            start_x: x,
            start_offset: self.host.scroll_offset(),
        });
        self.host.set_dragging(true);
    }

    /// Follow the pointer while dragging
    pub fn on_pointer_move(&mut self, x: f32) {
        let Some(drag) = self.drag else {
            return;
        };
        let offset = drag.start_offset + (drag.start_x - x);
        self.host.scroll_to(offset, ScrollBehavior::Instant);
    }

    /// End the drag and snap to the nearest item
    pub fn on_pointer_up(&mut self) {
        if self.drag.take().is_none() {
            return;
        }
        self.host.set_dragging(false);
        self.send(carousel_events::DRAG_END);
        if !self.snap() {
            self.finish_scroll();
        }
        self.refresh_auto_advance();
    }

    /// Pointer entered the container
    pub fn on_pointer_enter(&mut self) {
        self.hovered = true;
        self.pause_auto_advance();
    }

    /// Pointer left the container
    pub fn on_pointer_leave(&mut self) {
        self.hovered = false;
        self.refresh_auto_advance();
    }

    // ========================================================================
    // Touch
    // ========================================================================

    pub fn on_touch_start(&mut self, x: f32) {
        if self.drag.is_some() {
            return;
        }
        self.touch = Some(TouchTrack {
            start_x: x,
            last_x: x,
        });
    }

    pub fn on_touch_move(&mut self, x: f32) {
        if let Some(track) = self.touch.as_mut() {
            track.last_x = x;
        }
    }

    /// Page on a swipe past the threshold, otherwise snap
    pub fn on_touch_end(&mut self) {
        let Some(track) = self.touch.take() else {
            return;
        };
        let displacement = track.start_x - track.last_x;
        if displacement.abs() > self.config.swipe_threshold {
            let direction = if displacement > 0.0 {
                Direction::Next
            } else {
                Direction::Previous
            };
            self.advance(direction);
        } else {
            self.snap_to_nearest();
        }
    }

    // ========================================================================
    // Keyboard, focus, layout
    // ========================================================================

    pub fn on_key_down(&mut self, key: KeyCode) {
        if self.config.keyboard_scope == KeyboardScope::Focused && !self.focused {
            return;
        }
        match key {
            KeyCode::LEFT => self.advance(Direction::Previous),
            KeyCode::RIGHT => self.advance(Direction::Next),
            _ => {}
        }
    }

    pub fn on_focus(&mut self) {
        self.focused = true;
    }

    pub fn on_blur(&mut self) {
        self.focused = false;
    }

    /// Re-align after a layout change and re-check the desktop condition
    pub fn on_resize(&mut self) {
        self.settle_if_elapsed();
        self.refresh_auto_advance();
        self.snap_to_nearest();
    }

    /// The container's visible fraction changed
    pub fn on_visibility_change(&mut self, ratio: f32) {
        self.visible_ratio = ratio.clamp(0.0, 1.0);
        self.refresh_auto_advance();
    }

    /// Route a host event to the matching handler
    pub fn handle_event(&mut self, event: &Event) {
        use event_types::*;
        match (event.event_type, &event.data) {
            (POINTER_DOWN, _) => {
                if let Some(x) = event.x() {
                    self.on_pointer_down(x);
                }
            }
            (POINTER_MOVE, _) => {
                if let Some(x) = event.x() {
                    self.on_pointer_move(x);
                }
            }
            (POINTER_UP, _) => self.on_pointer_up(),
            (POINTER_ENTER, _) => self.on_pointer_enter(),
            (POINTER_LEAVE, _) => self.on_pointer_leave(),
            (TOUCH_START, _) => {
                if let Some(x) = event.x() {
                    self.on_touch_start(x);
                }
            }
            (TOUCH_MOVE, _) => {
                if let Some(x) = event.x() {
                    self.on_touch_move(x);
                }
            }
            (TOUCH_END, _) => self.on_touch_end(),
            (KEY_DOWN, EventData::Key { key }) => self.on_key_down(*key),
            (FOCUS, _) => self.on_focus(),
            (BLUR, _) => self.on_blur(),
            (RESIZE, _) => self.on_resize(),
            (VISIBILITY, EventData::Visibility { ratio }) => self.on_visibility_change(*ratio),
            (SCROLL_END, _) => self.on_scroll_settled(),
            (TIMER, EventData::Timer { id }) => self.on_timer(TimerId::from_raw(*id)),
            _ => {}
        }
    }

    /// Release the timer and any active drag, handing the host back
    pub fn detach(mut self) -> H {
        self.pause_auto_advance();
        if self.drag.take().is_some() {
            self.host.set_dragging(false);
        }
        self.host
    }

    fn send(&mut self, event: EventType) -> bool {
        let from = self.phase.current();
        match self.phase.send(event) {
            Some(to) => {
                if from != to {
                    tracing::debug!(?from, ?to, "carousel phase changed");
                }
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_animation::Scheduler;

    struct StubHost {
        widths: Vec<f32>,
        gap: Option<String>,
        offset: f32,
        viewport: f32,
        scheduler: Scheduler,
        scrolls: Vec<(f32, ScrollBehavior)>,
        dragging: bool,
    }

    impl StubHost {
        fn new(items: usize) -> Self {
            Self {
                widths: vec![300.0; items],
                gap: Some("32px".to_string()),
                offset: 0.0,
                viewport: 1280.0,
                scheduler: Scheduler::new(),
                scrolls: Vec::new(),
                dragging: false,
            }
        }
    }

    impl CarouselHost for StubHost {
        fn item_count(&self) -> usize {
            self.widths.len()
        }
        fn item_width(&self, index: usize) -> Option<f32> {
            self.widths.get(index).copied()
        }
        fn gap_style(&self) -> Option<String> {
            self.gap.clone()
        }
        fn scroll_offset(&self) -> f32 {
            self.offset
        }
        fn viewport_width(&self) -> f32 {
            self.viewport
        }
        fn now_ms(&self) -> u64 {
            self.scheduler.now_ms()
        }
        fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior) {
            self.offset = offset;
            self.scrolls.push((offset, behavior));
        }
        fn set_dragging(&mut self, dragging: bool) {
            self.dragging = dragging;
        }
        fn start_interval(&mut self, period_ms: u64) -> TimerId {
            self.scheduler.set_interval(period_ms)
        }
        fn cancel_interval(&mut self, id: TimerId) {
            self.scheduler.cancel(id);
        }
    }

    fn carousel(items: usize) -> Carousel<StubHost> {
        Carousel::new(StubHost::new(items), CarouselConfig::default())
    }

    fn run_for(carousel: &mut Carousel<StubHost>, ms: u64) {
        let fired = carousel.host_mut().scheduler.advance(ms);
        for id in fired {
            carousel.on_timer(id);
        }
    }

    fn last_scroll(carousel: &Carousel<StubHost>) -> Option<(f32, ScrollBehavior)> {
        carousel.host().scrolls.last().copied()
    }

    #[test]
    fn test_position_formula() {
        let metrics = Metrics {
            item_count: 5,
            item_width: 300.0,
            gap: 32.0,
        };
        assert_eq!(metrics.offset_of(2), 664.0);
    }

    #[test]
    fn test_gap_is_measured_per_call() {
        let mut c = carousel(5);
        c.advance(Direction::Next);
        assert_eq!(last_scroll(&c), Some((332.0, ScrollBehavior::Smooth)));

        c.host_mut().gap = Some("24px".to_string());
        c.advance(Direction::Next);
        assert_eq!(last_scroll(&c), Some((648.0, ScrollBehavior::Smooth)));

        c.host_mut().gap = Some("normal".to_string());
        c.advance(Direction::Next);
        assert_eq!(last_scroll(&c), Some((996.0, ScrollBehavior::Smooth)));
    }

    #[test]
    fn test_advance_clamps_at_both_ends() {
        let mut c = carousel(3);
        c.advance(Direction::Previous);
        assert_eq!(c.current_index(), 0);
        assert_eq!(last_scroll(&c), Some((0.0, ScrollBehavior::Smooth)));

        for _ in 0..5 {
            c.advance(Direction::Next);
        }
        assert_eq!(c.current_index(), 2);
        assert_eq!(last_scroll(&c), Some((664.0, ScrollBehavior::Smooth)));
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = carousel(0);
        c.advance(Direction::Next);
        c.snap_to_nearest();
        c.on_pointer_down(10.0);
        c.on_pointer_move(0.0);
        c.on_pointer_up();
        c.on_visibility_change(1.0);

        assert_eq!(c.current_index(), 0);
        assert!(c.host().scrolls.is_empty());
        assert!(!c.is_auto_advancing());
        assert_eq!(c.phase(), CarouselPhase::Idle);
    }

    #[test]
    fn test_index_follows_shrinking_item_list() {
        let mut c = carousel(5);
        for _ in 0..4 {
            c.advance(Direction::Next);
        }
        assert_eq!(c.current_index(), 4);

        c.host_mut().widths.truncate(2);
        assert_eq!(c.current_index(), 1);
        c.advance(Direction::Previous);
        assert_eq!(c.current_index(), 0);
        assert_eq!(last_scroll(&c), Some((0.0, ScrollBehavior::Smooth)));

        c.host_mut().widths.clear();
        assert_eq!(c.current_index(), 0);
        c.advance(Direction::Next);
        assert_eq!(c.current_index(), 0);

        // Items come back: paging starts from the clamped index
        c.host_mut().widths = vec![300.0; 5];
        assert_eq!(c.current_index(), 0);
        c.advance(Direction::Next);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_snap_rounds_to_nearest_boundary() {
        let mut c = carousel(5);
        c.host_mut().offset = 500.0;
        c.snap_to_nearest();
        assert_eq!(c.current_index(), 2);
        assert_eq!(last_scroll(&c), Some((664.0, ScrollBehavior::Smooth)));

        c.host_mut().offset = 10_000.0;
        c.snap_to_nearest();
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn test_snap_is_idempotent() {
        let mut c = carousel(5);
        c.host_mut().offset = 700.0;
        c.snap_to_nearest();
        let first = c.current_index();
        c.snap_to_nearest();
        assert_eq!(c.current_index(), first);
    }

    #[test]
    fn test_auto_advance_requires_all_conditions() {
        let mut c = carousel(5);
        c.on_visibility_change(0.39);
        assert!(!c.is_auto_advancing());

        c.on_visibility_change(0.4);
        assert!(c.is_auto_advancing());
        assert_eq!(c.phase(), CarouselPhase::AutoAdvancing);

        c.on_pointer_enter();
        assert!(!c.is_auto_advancing());
        c.on_pointer_leave();
        assert!(c.is_auto_advancing());

        c.host_mut().viewport = 1023.0;
        c.on_resize();
        assert!(!c.is_auto_advancing());
        assert!(c.host().scheduler.is_empty());
    }

    #[test]
    fn test_start_and_pause_are_idempotent() {
        let mut c = carousel(5);
        c.on_visibility_change(1.0);
        c.start_auto_advance();
        c.start_auto_advance();
        assert_eq!(c.host().scheduler.len(), 1);

        c.pause_auto_advance();
        c.pause_auto_advance();
        assert!(c.host().scheduler.is_empty());
        assert_eq!(c.phase(), CarouselPhase::Idle);
    }

    #[test]
    fn test_auto_advance_ticks_page_forward() {
        let mut c = carousel(5);
        c.on_visibility_change(1.0);

        run_for(&mut c, 6000);
        assert_eq!(c.current_index(), 1);
        run_for(&mut c, 6000);
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.phase(), CarouselPhase::AutoAdvancing);
    }

    #[test]
    fn test_fast_ticks_are_coalesced() {
        let config = CarouselConfig::default().period_ms(100).settle_estimate_ms(600);
        let mut c = Carousel::new(StubHost::new(10), config);
        c.on_visibility_change(1.0);

        // First tick pages, the following five land inside the estimate
        run_for(&mut c, 600);
        assert_eq!(c.current_index(), 1);

        // Settle reported by the host lets the next tick page again
        c.on_scroll_settled();
        run_for(&mut c, 100);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut c = carousel(5);
        let stray = c.host_mut().scheduler.set_timeout(1);
        c.on_timer(stray);
        assert_eq!(c.current_index(), 0);
        assert!(c.host().scrolls.is_empty());
    }

    #[test]
    fn test_drag_scrolls_opposite_to_pointer() {
        let mut c = carousel(5);
        c.host_mut().offset = 100.0;

        c.on_pointer_down(500.0);
        assert!(c.is_dragging());
        assert!(c.host().dragging);
        assert_eq!(c.phase(), CarouselPhase::Dragging);

        c.on_pointer_move(400.0);
        assert_eq!(last_scroll(&c), Some((200.0, ScrollBehavior::Instant)));
        c.on_pointer_move(550.0);
        assert_eq!(last_scroll(&c), Some((50.0, ScrollBehavior::Instant)));

        c.on_pointer_up();
        assert!(!c.is_dragging());
        assert!(!c.host().dragging);
        assert_eq!(c.current_index(), 0);
        assert_eq!(last_scroll(&c), Some((0.0, ScrollBehavior::Smooth)));
        assert_eq!(c.phase(), CarouselPhase::Snapping);
    }

    #[test]
    fn test_drag_and_timer_never_overlap() {
        let mut c = carousel(5);
        c.on_visibility_change(1.0);
        assert!(c.is_auto_advancing());

        c.on_pointer_down(300.0);
        assert!(!c.is_auto_advancing());

        c.start_auto_advance();
        assert!(!c.is_auto_advancing());
        c.on_visibility_change(1.0);
        assert!(!c.is_auto_advancing());

        // Drag ended away from the container: the timer comes back
        c.on_pointer_up();
        assert!(c.is_auto_advancing());
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_paging_is_ignored_mid_drag() {
        let mut c = carousel(5);
        c.on_touch_start(400.0);
        c.on_pointer_down(500.0);
        c.on_touch_move(300.0);

        c.on_key_down(KeyCode::RIGHT);
        c.on_touch_end();
        c.advance(Direction::Next);
        c.snap_to_nearest();
        assert_eq!(c.current_index(), 0);
        assert!(c.host().scrolls.is_empty());
        assert_eq!(c.phase(), CarouselPhase::Dragging);

        c.on_pointer_up();
        c.on_key_down(KeyCode::RIGHT);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_pointer_move_without_drag_is_ignored() {
        let mut c = carousel(5);
        c.on_pointer_move(42.0);
        c.on_pointer_up();
        assert!(c.host().scrolls.is_empty());
    }

    #[test]
    fn test_touch_threshold() {
        let mut c = carousel(5);
        c.on_touch_start(200.0);
        c.on_touch_move(159.0);
        c.on_touch_end();
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.host().scrolls.len(), 1);

        // 39px swipe only snaps back to the current boundary
        c.on_touch_start(200.0);
        c.on_touch_move(161.0);
        c.on_touch_end();
        assert_eq!(c.current_index(), 1);
        assert_eq!(last_scroll(&c), Some((332.0, ScrollBehavior::Smooth)));

        // Rightward swipe pages back
        c.on_touch_start(100.0);
        c.on_touch_move(160.0);
        c.on_touch_end();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_tap_without_move_snaps() {
        let mut c = carousel(5);
        c.host_mut().offset = 340.0;
        c.on_touch_start(10.0);
        c.on_touch_end();
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_keyboard_global_scope() {
        let mut c = carousel(5);
        c.on_key_down(KeyCode::RIGHT);
        c.on_key_down(KeyCode::RIGHT);
        c.on_key_down(KeyCode::LEFT);
        c.on_key_down(KeyCode::ENTER);
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.host().scrolls.len(), 3);
    }

    #[test]
    fn test_keyboard_focused_scope() {
        let config = CarouselConfig::default().keyboard_scope(KeyboardScope::Focused);
        let mut c = Carousel::new(StubHost::new(5), config);

        c.on_key_down(KeyCode::RIGHT);
        assert_eq!(c.current_index(), 0);

        c.on_focus();
        c.on_key_down(KeyCode::RIGHT);
        assert_eq!(c.current_index(), 1);

        c.on_blur();
        c.on_key_down(KeyCode::RIGHT);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_snapping_settles_after_estimate() {
        let mut c = carousel(5);
        c.advance(Direction::Next);
        assert_eq!(c.phase(), CarouselPhase::Snapping);

        c.host_mut().scheduler.advance(600);
        c.advance(Direction::Next);
        // Settled first, then a new page was requested
        assert_eq!(c.phase(), CarouselPhase::Snapping);
        assert!(c
            .phase_history()
            .iter()
            .any(|(_, event, to)| *event == carousel_events::SCROLL_SETTLED
                && *to == CarouselPhase::Idle));
    }

    #[test]
    fn test_settle_resumes_auto_advancing_phase() {
        let mut c = carousel(5);
        c.on_visibility_change(1.0);
        c.on_key_down(KeyCode::RIGHT);
        assert_eq!(c.phase(), CarouselPhase::Snapping);
        assert!(c.is_auto_advancing());

        c.on_scroll_settled();
        assert_eq!(c.phase(), CarouselPhase::AutoAdvancing);
    }

    #[test]
    fn test_handle_event_routes_input() {
        let mut c = carousel(5);
        c.handle_event(&Event::key_down(0, KeyCode::RIGHT));
        assert_eq!(c.current_index(), 1);

        c.handle_event(&Event::visibility(0, 0.9));
        assert!(c.is_auto_advancing());

        c.handle_event(&Event::pointer(event_types::POINTER_ENTER, 0, 0.0, 0.0));
        assert!(!c.is_auto_advancing());
    }

    #[test]
    fn test_detach_releases_timer() {
        let mut c = carousel(5);
        c.on_visibility_change(1.0);
        c.on_pointer_leave();
        let host = c.detach();
        assert!(host.scheduler.is_empty());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: CarouselConfig =
            serde_json::from_str(r#"{ "keyboard_scope": "focused", "swipe_threshold": 60.0 }"#)
                .unwrap();
        assert_eq!(config.keyboard_scope, KeyboardScope::Focused);
        assert_eq!(config.swipe_threshold, 60.0);
        assert_eq!(config.auto_advance_period_ms, 6000);
        assert_eq!(config.desktop_min_width, 1024.0);
    }
}
