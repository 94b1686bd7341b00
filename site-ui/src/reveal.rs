use leptos::html::Section;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the section that must be on screen before it is revealed.
const REVEAL_THRESHOLD: f64 = 0.15;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Becomes true, once, when the section first scrolls into view.
pub fn use_reveal(node: NodeRef<Section>) -> ReadSignal<bool> {
    let (visible, set_visible) = create_signal(false);
    let active: Rc<RefCell<Option<(IntersectionObserver, ObserverCallback)>>> = Rc::default();

    let slot = Rc::clone(&active);
    node.on_load(move |el| {
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        set_visible.set(true);
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&el);
                *slot.borrow_mut() = Some((observer, callback));
            }
            Err(err) => {
                tracing::warn!(?err, "IntersectionObserver unavailable; revealing immediately");
                set_visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        if let Some((observer, _callback)) = active.borrow_mut().take() {
            observer.disconnect();
        }
    });

    visible
}

#[component]
pub fn RevealSection(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = create_node_ref::<Section>();
    let visible = use_reveal(node);
    view! {
        <section
            id=id
            node_ref=node
            class=format!("reveal {class}")
            class:visible=move || visible.get()
        >
            {children()}
        </section>
    }
}
