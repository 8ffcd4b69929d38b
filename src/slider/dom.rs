use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, EventTarget, FocusEvent, HtmlElement,
    KeyboardEvent, MouseEvent, ScrollBehavior, ScrollToOptions, TouchEvent,
};

use super::{scroll_by_id, ScrollSurface, SliderDeck, SliderLookup};
use crate::config::SliderConfig;
use crate::util::{clog, cwarn};

impl ScrollSurface for HtmlElement {
    fn offset_left(&self) -> f64 {
        HtmlElement::offset_left(self) as f64
    }

    fn scroll_left(&self) -> f64 {
        Element::scroll_left(self) as f64
    }

    fn set_scroll_left(&self, value: f64) {
        Element::set_scroll_left(self, value as _);
    }

    fn scroll_by_smooth(&self, amount: f64) {
        let opts = ScrollToOptions::new();
        opts.set_left(amount);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.scroll_by_with_scroll_to_options(&opts);
    }

    fn set_marker(&self, class: &str, on: bool) {
        let list = self.class_list();
        let _ = if on { list.add_1(class) } else { list.remove_1(class) };
    }
}

impl SliderLookup for Document {
    type Surface = HtmlElement;

    fn find(&self, id: &str) -> Option<HtmlElement> {
        self.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }
}

/// Smooth-scrolls the slider with id `slider_id` by `scroll_amount` pixels
/// (positive is rightward). Unknown ids are ignored.
///
/// Trunk puts this export under `window.wasmBindings`; while a
/// [`SliderRuntime`] is installed it is also reachable as the global
/// `window.scrollSlider`, so inline `onclick="scrollSlider('id', 280)"`
/// handlers in page markup work.
#[wasm_bindgen(js_name = scrollSlider)]
pub fn scroll_slider(slider_id: &str, scroll_amount: f64) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if !scroll_by_id(&document, slider_id, scroll_amount) {
        #[cfg(debug_assertions)]
        clog(&format!("scrollSlider: no element #{slider_id}"));
    }
}

// A registered listener; dropping it unregisters the callback.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: js_sys::Function,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.callback);
    }
}

fn listen<E>(
    target: &EventTarget,
    event: &'static str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) -> Result<Listener, JsValue>
where
    E: FromWasmAbi + 'static,
{
    let callback: js_sys::Function = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>)
        .into_js_value()
        .unchecked_into();
    if passive {
        let opts = AddEventListenerOptions::new();
        opts.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event, &callback, &opts,
        )?;
    } else {
        target.add_event_listener_with_callback(event, &callback)?;
    }
    Ok(Listener {
        target: target.clone(),
        event,
        callback,
    })
}

const GLOBAL_SCROLL_FN: &str = "scrollSlider";

// `window.scrollSlider`; dropping it removes the global again.
struct GlobalScrollFn {
    window: web_sys::Window,
    _callback: js_sys::Function,
}

impl GlobalScrollFn {
    fn expose() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
        let callback: js_sys::Function = Closure::wrap(Box::new(|id: String, amount: f64| {
            scroll_slider(&id, amount);
        }) as Box<dyn FnMut(String, f64)>)
        .into_js_value()
        .unchecked_into();
        js_sys::Reflect::set(&window, &JsValue::from_str(GLOBAL_SCROLL_FN), &callback)?;
        Ok(Self {
            window,
            _callback: callback,
        })
    }
}

impl Drop for GlobalScrollFn {
    fn drop(&mut self) {
        let _ = js_sys::Reflect::delete_property(&self.window, &JsValue::from_str(GLOBAL_SCROLL_FN));
    }
}

type SharedDeck = Rc<RefCell<SliderDeck<HtmlElement>>>;

/// Listeners for every slider container on a page. Dropping the runtime
/// detaches all of them.
pub struct SliderRuntime {
    deck: SharedDeck,
    _listeners: Vec<Listener>,
    _global: Option<GlobalScrollFn>,
}

impl SliderRuntime {
    /// Binds drag, swipe and arrow-key scrolling to every element carrying
    /// the container class. Call once the page markup is in the document.
    pub fn install(document: &Document, config: SliderConfig) -> Result<Self, JsValue> {
        let elements = slider_elements(document, config.container_class);
        let deck: SharedDeck = Rc::new(RefCell::new(SliderDeck::new(
            config,
            elements.iter().cloned(),
        )));
        let mut listeners = Vec::new();
        for (idx, el) in elements.iter().enumerate() {
            match bind_slider(&deck, idx, el) {
                Ok(mut bound) => listeners.append(&mut bound),
                Err(err) => cwarn(&format!("slider {idx}: listeners not attached: {err:?}")),
            }
        }
        listeners.push(bind_keyboard(&deck, document)?);
        let global = match GlobalScrollFn::expose() {
            Ok(g) => Some(g),
            Err(err) => {
                cwarn(&format!("window.{GLOBAL_SCROLL_FN} not set: {err:?}"));
                None
            }
        };
        #[cfg(debug_assertions)]
        clog(&format!("bound {} slider(s)", elements.len()));
        Ok(Self {
            deck,
            _listeners: listeners,
            _global: global,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.deck.borrow().is_empty()
    }
}

fn slider_elements(document: &Document, class: &str) -> Vec<HtmlElement> {
    let found = document.get_elements_by_class_name(class);
    (0..found.length())
        .filter_map(|i| found.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn bind_slider(deck: &SharedDeck, idx: usize, el: &HtmlElement) -> Result<Vec<Listener>, JsValue> {
    let target: &EventTarget = el.as_ref();
    let mut out = Vec::with_capacity(10);

    // Pointer drag
    {
        let deck = deck.clone();
        out.push(listen(target, "mousedown", false, move |e: MouseEvent| {
            deck.borrow_mut().press(idx, e.button(), e.page_x() as f64);
        })?);
    }
    {
        let deck = deck.clone();
        out.push(listen(target, "mousemove", false, move |e: MouseEvent| {
            if deck.borrow_mut().move_pointer(idx, e.page_x() as f64) {
                e.prevent_default();
            }
        })?);
    }
    {
        let deck = deck.clone();
        out.push(listen(target, "mouseup", false, move |_e: MouseEvent| {
            deck.borrow_mut().release(idx);
        })?);
    }
    {
        let deck = deck.clone();
        out.push(listen(target, "mouseenter", false, move |_e: MouseEvent| {
            deck.borrow_mut().pointer_enter(idx);
        })?);
    }
    {
        let deck = deck.clone();
        out.push(listen(target, "mouseleave", false, move |_e: MouseEvent| {
            deck.borrow_mut().pointer_leave(idx);
        })?);
    }

    // Touch swipe, passive so native scrolling stays fast
    {
        let deck = deck.clone();
        out.push(listen(target, "touchstart", true, move |e: TouchEvent| {
            if let Some(t0) = e.touches().item(0) {
                deck.borrow_mut().touch_start(idx, t0.page_x() as f64);
            }
        })?);
    }
    {
        let deck = deck.clone();
        out.push(listen(target, "touchmove", true, move |e: TouchEvent| {
            if let Some(t0) = e.touches().item(0) {
                deck.borrow_mut().touch_move(idx, t0.page_x() as f64);
            }
        })?);
    }
    for event in ["touchend", "touchcancel"] {
        let deck = deck.clone();
        out.push(listen(target, event, true, move |_e: TouchEvent| {
            deck.borrow_mut().touch_end(idx);
        })?);
    }

    // Keyboard focus
    {
        let deck = deck.clone();
        out.push(listen(target, "focusin", false, move |_e: FocusEvent| {
            deck.borrow_mut().focus_in(idx);
        })?);
    }
    {
        let deck = deck.clone();
        out.push(listen(target, "focusout", false, move |_e: FocusEvent| {
            deck.borrow_mut().focus_out(idx);
        })?);
    }
    Ok(out)
}

fn bind_keyboard(deck: &SharedDeck, document: &Document) -> Result<Listener, JsValue> {
    let deck = deck.clone();
    listen(document.as_ref(), "keydown", false, move |e: KeyboardEvent| {
        if deck.borrow_mut().key_down(&e.key()).suppress_default() {
            e.prevent_default();
        }
    })
}
