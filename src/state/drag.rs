// Drag gesture state shared by the pointer and touch handlers of one slider
#[derive(Default, Debug, Clone, PartialEq)]
pub struct DragState {
    pub dragging: bool,
    pub start_x: f64,
    pub scroll_origin_left: f64,
}

impl DragState {
    /// Starts a gesture. `x` is already relative to the element's offsetLeft.
    pub fn begin(&mut self, x: f64, scroll_left: f64) {
        self.dragging = true;
        self.start_x = x;
        self.scroll_origin_left = scroll_left;
    }

    /// New scrollLeft for a move to `x`, or `None` when no gesture is running.
    pub fn track(&self, x: f64, multiplier: f64) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        let delta = (x - self.start_x) * multiplier;
        Some(self.scroll_origin_left - delta)
    }

    pub fn end(&mut self) {
        self.dragging = false;
    }
}
