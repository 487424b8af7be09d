use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::SiteError;

#[derive(Clone, Debug, PartialEq)]
pub struct InViewOptions {
    /// Fraction of the element that must be visible, 0.0..=1.0.
    pub threshold: f64,
    /// CSS margin around the viewport, e.g. `"0px 0px -10% 0px"`.
    pub root_margin: String,
    /// Stop observing after the first time the element enters the viewport.
    pub once: bool,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            root_margin: "0px 0px -10% 0px".to_string(),
            once: true,
        }
    }
}

/// Intersection-based trigger for a single element. Disconnects on drop.
pub struct InViewObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl InViewObserver {
    pub fn observe<F>(target: &Element, options: &InViewOptions, mut on_change: F) -> Result<Self, SiteError>
    where
        F: FnMut(bool) + 'static,
    {
        let once = options.once;
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let visible = entry.is_intersecting();
                on_change(visible);
                if visible && once {
                    observer.disconnect();
                    return;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold.clamp(0.0, 1.0)));
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| SiteError::unavailable("IntersectionObserver", e))?;
        observer.observe(target);

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for InViewObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
