//! Simulated carousel host for headless runs.
//!
//! Lays out a row of equally sized items inside a fixed-width container,
//! animates smooth scrolls with the CSS `ease` curve and owns the timer
//! scheduler. Scroll offsets are clamped to the scrollable range the way a
//! browser clamps `scrollTo`.

use serde::{Deserialize, Serialize};
use vitrine_animation::scheduler::Fired;
use vitrine_animation::{Easing, Scheduler, TimerId, Tween};
use vitrine_widgets::style::resolve_gap;
use vitrine_widgets::{CarouselHost, ScrollBehavior};

use crate::headless_runtime::HeadlessRunConfig;

/// Layout of the simulated carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSetup {
    pub items: usize,
    pub item_width: f32,
    /// Computed gap style as the host would report it
    pub gap: Option<String>,
    /// Visible width of the scroll container
    pub container_width: f32,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            items: 5,
            item_width: 300.0,
            gap: Some("32px".to_string()),
            container_width: 300.0,
        }
    }
}

/// What happened during one simulated frame
#[derive(Debug, Default)]
pub struct FrameEvents {
    /// A smooth scroll reached its target this frame
    pub settled: bool,
    /// Timers that fired this frame, in due order
    pub fired: Fired,
}

/// Deterministic in-memory host
pub struct HeadlessHost {
    page: PageSetup,
    viewport_width: f32,
    scroll: Tween,
    scheduler: Scheduler,
    dragging: bool,
    /// A smooth request that needed no movement settles on the next frame
    settle_next_frame: bool,
}

impl HeadlessHost {
    pub fn new(page: PageSetup, config: &HeadlessRunConfig) -> Self {
        Self {
            page,
            viewport_width: config.viewport_width,
            scroll: Tween::at(0.0, config.scroll_duration_ms, Easing::CSS_EASE),
            scheduler: Scheduler::new(),
            dragging: false,
            settle_next_frame: false,
        }
    }

    pub fn page(&self) -> &PageSetup {
        &self.page
    }

    /// Rendered scroll offset right now
    pub fn offset(&self) -> f32 {
        self.scroll.value()
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_playing()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Change the computed gap style; the layout reflows immediately
    pub fn set_gap(&mut self, gap: Option<String>) {
        self.page.gap = gap;
        let clamped = self.clamp(self.scroll.value());
        if clamped != self.scroll.value() {
            self.scroll.jump(clamped);
        }
    }

    /// Largest reachable scroll offset
    pub fn max_offset(&self) -> f32 {
        let n = self.page.items;
        if n == 0 {
            return 0.0;
        }
        // Unparseable gaps lay out as zero, like `gap: normal` in a flex row
        let gap = resolve_gap(self.page.gap.as_deref(), 0.0).max(0.0);
        let content = n as f32 * self.page.item_width + (n - 1) as f32 * gap;
        (content - self.page.container_width).max(0.0)
    }

    fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset())
    }

    /// Advance the simulation by `dt_ms`
    pub fn step(&mut self, dt_ms: u64) -> FrameEvents {
        let mut settled = std::mem::take(&mut self.settle_next_frame);
        if self.scroll.tick(dt_ms as f32) {
            settled = true;
        }
        let fired = self.scheduler.advance(dt_ms);
        FrameEvents { settled, fired }
    }
}

impl CarouselHost for HeadlessHost {
    fn item_count(&self) -> usize {
        self.page.items
    }

    fn item_width(&self, index: usize) -> Option<f32> {
        (index < self.page.items).then_some(self.page.item_width)
    }

    fn gap_style(&self) -> Option<String> {
        self.page.gap.clone()
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll.value()
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior) {
        let target = self.clamp(offset);
        match behavior {
            ScrollBehavior::Instant => {
                self.scroll.jump(target);
                self.settle_next_frame = false;
            }
            ScrollBehavior::Smooth => {
                self.scroll.retarget(target);
                self.settle_next_frame = !self.scroll.is_playing();
            }
        }
        tracing::trace!(target, ?behavior, "headless scroll");
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
