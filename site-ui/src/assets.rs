//! Font and image readiness for the first paint.
//!
//! Images are preloaded from an explicit URL list rather than scraped from
//! the DOM, so the gating set does not depend on what happens to be mounted.

use futures::channel::oneshot;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

const EVENTS: [&str; 2] = ["load", "error"];

struct ImageListener {
    image: HtmlImageElement,
    callback: Closure<dyn FnMut()>,
}

impl Drop for ImageListener {
    fn drop(&mut self) {
        for event in EVENTS {
            let _ = self
                .image
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Keeps image listeners attached; dropping it detaches them.
pub struct AssetWatch {
    _listeners: Vec<ImageListener>,
}

/// Starts loading `urls` and returns a future that resolves once fonts and
/// every image have loaded or errored. Images that cannot be watched count as
/// ready.
pub fn watch(urls: &[&str]) -> (AssetWatch, impl Future<Output = ()>) {
    let mut listeners = Vec::new();
    let mut pending = Vec::new();
    for url in urls {
        match watch_image(url) {
            Ok(Some((listener, settled))) => {
                listeners.push(listener);
                pending.push(settled);
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(url, %err, "image not watched; treating as ready"),
        }
    }

    let ready = async move {
        futures::future::join(fonts_ready(), futures::future::join_all(pending)).await;
        tracing::debug!("critical assets settled");
    };
    (
        AssetWatch {
            _listeners: listeners,
        },
        ready,
    )
}

fn watch_image(url: &str) -> Result<Option<(ImageListener, oneshot::Receiver<()>)>, String> {
    let image = HtmlImageElement::new().map_err(|e| format!("{e:?}"))?;
    let (tx, rx) = oneshot::channel();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let callback = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(());
        }
    });
    let listener = ImageListener { image, callback };

    for event in EVENTS {
        listener
            .image
            .add_event_listener_with_callback(event, listener.callback.as_ref().unchecked_ref())
            .map_err(|e| format!("{e:?}"))?;
    }
    listener.image.set_src(url);

    // Cached or already-failed images may never fire an event.
    if listener.image.complete() {
        return Ok(None);
    }
    Ok(Some((listener, rx)))
}

async fn fonts_ready() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let promise = match document.fonts().ready() {
        Ok(promise) => promise,
        Err(err) => {
            tracing::warn!(?err, "document.fonts.ready unavailable");
            return;
        }
    };
    if let Err(err) = JsFuture::from(promise).await {
        tracing::warn!(?err, "font loading rejected");
    }
}
