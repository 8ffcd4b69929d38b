use super::shelf::ShelfRow;
use crate::config::SliderConfig;
use crate::model::Catalog;
use crate::slider::SliderRuntime;
use crate::util::{clog, cwarn};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let catalog = use_memo((), |_| Catalog::bundled());

    // Sliders are bound after the first render so every shelf row is in the
    // document; the teardown drops the runtime, which detaches its listeners.
    use_effect_with((), move |_| {
        let runtime = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| match SliderRuntime::install(&doc, SliderConfig::default()) {
                Ok(rt) => Some(rt),
                Err(err) => {
                    cwarn(&format!("slider setup failed: {err:?}"));
                    None
                }
            });
        if runtime.as_ref().is_some_and(|rt| rt.is_empty()) {
            clog("no slider containers on page");
        }
        move || drop(runtime)
    });

    html! {<main style="max-width:1100px; margin:0 auto; padding:16px; font-family:sans-serif;">
        <h1 style="margin:0 0 8px;">{"FreshCart"}</h1>
        { for catalog.shelves.iter().map(|s| html! { <ShelfRow key={s.id.clone()} shelf={s.clone()} /> }) }
    </main>}
}
