// Fixed slider constants. Nothing is read from the page or the environment.

pub const CONTAINER_CLASS: &str = "slider-container";
pub const ACTIVE_CLASS: &str = "active";
pub const DRAG_MULTIPLIER: f64 = 2.0;
pub const KEY_STEP: f64 = 280.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    /// Marker class identifying slider containers.
    pub container_class: &'static str,
    /// Class toggled while a gesture is in progress.
    pub active_class: &'static str,
    /// Scroll pixels per pixel of pointer travel.
    pub drag_multiplier: f64,
    /// Arrow key scroll distance.
    pub key_step: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            container_class: CONTAINER_CLASS,
            active_class: ACTIVE_CLASS,
            drag_multiplier: DRAG_MULTIPLIER,
            key_step: KEY_STEP,
        }
    }
}
