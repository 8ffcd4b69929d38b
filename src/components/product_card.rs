use crate::model::Product;
use crate::util::format_price;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    pub product: Product,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let p = &props.product;
    html! {<div class="product-card" style="flex:0 0 260px; padding:12px; border:1px solid #e1e4e8; border-radius:8px; background:#fff;">
        <div style="height:120px; background:#f3f6f1; border-radius:6px; margin-bottom:8px;"></div>
        <div style="font-weight:600;">{ p.name.clone() }</div>
        <div style="display:flex; justify-content:space-between; font-size:13px; color:#57606a;">
            <span>{ format_price(p.price_cents) }</span>
            <span>{ p.unit.clone() }</span>
        </div>
    </div>}
}
