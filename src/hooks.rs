use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::utils::debounce::Debouncer;
use crate::utils::dom::current_scroll_y;
use crate::utils::observer::{InViewObserver, InViewOptions};

/// Runs `handler` once on mount and then, debounced, after every burst of
/// `event` on the window. The listener and any pending call go away on unmount.
#[hook]
pub fn use_debounced_window_event<F>(event: &'static str, delay_ms: u32, handler: F)
where
    F: Fn() + 'static,
{
    use_effect_with_deps(
        move |_| {
            let handler = Rc::new(handler);
            handler();

            let mut listener = None;
            if let Some(window) = web_sys::window() {
                let debouncer = {
                    let handler = handler.clone();
                    Debouncer::new(move |_: ()| handler(), delay_ms)
                };
                debug!("debouncing window {} by {}ms", event, debouncer.delay_ms());
                let callback = Closure::<dyn Fn()>::new(move || debouncer.call(()));
                match window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                    Ok(()) => listener = Some((window, callback)),
                    Err(e) => warn!("could not listen for {}: {:?}", event, e),
                }
            }

            move || {
                if let Some((window, callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
                }
            }
        },
        (event, delay_ms),
    );
}

/// Window scroll offset, refreshed once scrolling pauses for `delay_ms`.
#[hook]
pub fn use_window_scroll(delay_ms: u32) -> f64 {
    let scroll_y = use_state_eq(current_scroll_y);
    {
        let setter = scroll_y.setter();
        use_debounced_window_event("scroll", delay_ms, move || setter.set(current_scroll_y()));
    }
    *scroll_y
}

/// True while the referenced element intersects the viewport. With
/// `options.once` it latches on the first hit. If the observer cannot be
/// created the element is reported visible straight away.
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let in_view = use_state_eq(|| false);
    {
        let setter = in_view.setter();
        use_effect_with_deps(
            move |(node, options)| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let once = options.once;
                    let on_change = {
                        let setter = setter.clone();
                        move |visible: bool| {
                            if visible || !once {
                                setter.set(visible);
                            }
                        }
                    };
                    match InViewObserver::observe(&element, options, on_change) {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            warn!("{}; revealing without scroll trigger", e);
                            setter.set(true);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            (node, options),
        );
    }
    *in_view
}
