mod components;
mod config;
mod model;
mod slider;
mod state;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
