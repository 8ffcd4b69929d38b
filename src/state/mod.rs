pub mod drag;
pub mod engaged;

pub use drag::DragState;
pub use engaged::Engaged;
