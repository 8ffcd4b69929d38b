use super::product_card::ProductCard;
use crate::config::{CONTAINER_CLASS, KEY_STEP};
use crate::model::Shelf;
use crate::slider::scroll_slider;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShelfRowProps {
    pub shelf: Shelf,
}

// Heading with prev/next buttons over one horizontally scrolling row
#[function_component(ShelfRow)]
pub fn shelf_row(props: &ShelfRowProps) -> Html {
    let prev = {
        let id = props.shelf.id.clone();
        Callback::from(move |_| scroll_slider(&id, -KEY_STEP))
    };
    let next = {
        let id = props.shelf.id.clone();
        Callback::from(move |_| scroll_slider(&id, KEY_STEP))
    };
    html! {<section style="margin:24px 0;">
        <div style="display:flex; align-items:center; justify-content:space-between; margin-bottom:8px;">
            <h2 style="margin:0; font-size:20px;">{ props.shelf.title.clone() }</h2>
            <div style="display:flex; gap:6px;">
                <button onclick={prev} aria-label="Scroll left">{"←"}</button>
                <button onclick={next} aria-label="Scroll right">{"→"}</button>
            </div>
        </div>
        <div id={props.shelf.id.clone()} class={CONTAINER_CLASS} tabindex="0">
            { for props.shelf.products.iter().map(|p| html! { <ProductCard key={p.name.clone()} product={p.clone()} /> }) }
        </div>
    </section>}
}
