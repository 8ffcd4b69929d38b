//! Drag, swipe and arrow-key scrolling for horizontal slider rows.
//!
//! The gesture logic here never touches the DOM directly. Elements are reached
//! through [`ScrollSurface`], which `dom` implements for `HtmlElement`, so the
//! whole deck can run against an in-memory surface in tests.

pub mod dom;

use crate::config::SliderConfig;
use crate::state::{DragState, Engaged};

pub use dom::{scroll_slider, SliderRuntime};

/// The slice of an element the gesture handlers need.
pub trait ScrollSurface {
    fn offset_left(&self) -> f64;
    fn scroll_left(&self) -> f64;
    fn set_scroll_left(&self, value: f64);
    /// Animated scroll relative to the current position.
    fn scroll_by_smooth(&self, amount: f64);
    fn set_marker(&self, class: &str, on: bool);
}

/// Resolves a slider by element id.
pub trait SliderLookup {
    type Surface: ScrollSurface;
    fn find(&self, id: &str) -> Option<Self::Surface>;
}

/// Smooth-scrolls the slider with the given id. Returns false, and does
/// nothing else, when no such slider exists.
pub fn scroll_by_id<L: SliderLookup>(lookup: &L, id: &str, amount: f64) -> bool {
    match lookup.find(id) {
        Some(surface) => {
            surface.scroll_by_smooth(amount);
            true
        }
        None => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

impl ArrowKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(ArrowKey::Left),
            "ArrowRight" => Some(ArrowKey::Right),
            _ => None,
        }
    }

    pub fn scroll_amount(self, step: f64) -> f64 {
        match self {
            ArrowKey::Left => -step,
            ArrowKey::Right => step,
        }
    }
}

/// One slider element plus its in-flight gesture.
#[derive(Debug)]
pub struct SliderController<S> {
    surface: S,
    drag: DragState,
}

impl<S: ScrollSurface> SliderController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            drag: DragState::default(),
        }
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    fn begin(&mut self, page_x: f64, cfg: &SliderConfig) {
        let x = page_x - self.surface.offset_left();
        self.drag.begin(x, self.surface.scroll_left());
        self.surface.set_marker(cfg.active_class, true);
    }

    fn track(&mut self, page_x: f64, cfg: &SliderConfig) -> bool {
        let x = page_x - self.surface.offset_left();
        match self.drag.track(x, cfg.drag_multiplier) {
            Some(left) => {
                self.surface.set_scroll_left(left);
                true
            }
            None => false,
        }
    }

    fn end(&mut self, cfg: &SliderConfig) {
        self.drag.end();
        self.surface.set_marker(cfg.active_class, false);
    }
}

/// Every bound slider on the page and the slider arrow keys currently target.
#[derive(Debug)]
pub struct SliderDeck<S> {
    config: SliderConfig,
    sliders: Vec<SliderController<S>>,
    engaged: Engaged,
}

impl<S: ScrollSurface> SliderDeck<S> {
    pub fn new(config: SliderConfig, surfaces: impl IntoIterator<Item = S>) -> Self {
        Self {
            config,
            sliders: surfaces.into_iter().map(SliderController::new).collect(),
            engaged: Engaged::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    #[cfg(test)]
    pub fn slider(&self, idx: usize) -> Option<&SliderController<S>> {
        self.sliders.get(idx)
    }

    #[cfg(test)]
    pub fn engaged(&self) -> Option<usize> {
        self.engaged.current()
    }

    /// Mouse press. Only the primary button (0) starts a drag.
    pub fn press(&mut self, idx: usize, button: i16, page_x: f64) {
        if button != 0 {
            return;
        }
        let cfg = &self.config;
        if let Some(s) = self.sliders.get_mut(idx) {
            s.begin(page_x, cfg);
        }
    }

    /// Mouse move. Returns true when the move scrolled the slider, in which
    /// case the caller must suppress the browser default (text selection).
    pub fn move_pointer(&mut self, idx: usize, page_x: f64) -> bool {
        let cfg = &self.config;
        match self.sliders.get_mut(idx) {
            Some(s) => s.track(page_x, cfg),
            None => false,
        }
    }

    pub fn release(&mut self, idx: usize) {
        let cfg = &self.config;
        if let Some(s) = self.sliders.get_mut(idx) {
            s.end(cfg);
        }
    }

    pub fn pointer_enter(&mut self, idx: usize) {
        if idx < self.sliders.len() {
            self.engaged.pointer_enter(idx);
        }
    }

    /// Pointer left the element: cancels any drag and drops hover.
    pub fn pointer_leave(&mut self, idx: usize) {
        self.release(idx);
        self.engaged.pointer_leave(idx);
    }

    pub fn touch_start(&mut self, idx: usize, page_x: f64) {
        let cfg = &self.config;
        if let Some(s) = self.sliders.get_mut(idx) {
            s.begin(page_x, cfg);
        }
    }

    pub fn touch_move(&mut self, idx: usize, page_x: f64) {
        self.move_pointer(idx, page_x);
    }

    pub fn touch_end(&mut self, idx: usize) {
        self.release(idx);
    }

    pub fn focus_in(&mut self, idx: usize) {
        if idx < self.sliders.len() {
            self.engaged.focus_in(idx);
        }
    }

    pub fn focus_out(&mut self, idx: usize) {
        self.engaged.focus_out(idx);
    }

    /// Global keydown. Scrolls the engaged slider on an arrow key.
    pub fn key_down(&mut self, key: &str) -> KeyScroll {
        let Some(arrow) = ArrowKey::from_key(key) else {
            return KeyScroll::Ignored;
        };
        let Some(idx) = self.engaged.current() else {
            return KeyScroll::Ignored;
        };
        let Some(s) = self.sliders.get(idx) else {
            return KeyScroll::Ignored;
        };
        s.surface.scroll_by_smooth(arrow.scroll_amount(self.config.key_step));
        if self.engaged.focused == Some(idx) {
            KeyScroll::Focused
        } else {
            KeyScroll::Hovered
        }
    }
}

/// What a keydown did to the sliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyScroll {
    Ignored,
    /// Scrolled a slider the pointer is over; focus is elsewhere.
    Hovered,
    /// Scrolled the slider that holds keyboard focus.
    Focused,
}

impl KeyScroll {
    #[cfg(test)]
    pub fn scrolled(self) -> bool {
        self != KeyScroll::Ignored
    }

    /// Only a focused slider would also scroll natively, so only then is the
    /// browser default suppressed. Carets and other focused widgets keep
    /// their arrow keys while the pointer merely rests on a shelf.
    pub fn suppress_default(self) -> bool {
        self == KeyScroll::Focused
    }
}
