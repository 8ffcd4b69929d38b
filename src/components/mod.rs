pub mod app;
pub mod product_card;
pub mod shelf;

pub use app::App;
