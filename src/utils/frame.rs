use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::SiteError;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Calls `on_frame` once per `requestAnimationFrame` until it returns false
/// or the loop is dropped.
pub struct AnimationFrameLoop {
    window: Window,
    slot: FrameSlot,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl AnimationFrameLoop {
    pub fn start<F>(mut on_frame: F) -> Result<Self, SiteError>
    where
        F: FnMut() -> bool + 'static,
    {
        let window = web_sys::window().ok_or_else(|| SiteError::Unavailable("window".to_string()))?;
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));

        // Weak so the closure does not keep its own slot alive.
        let weak_slot = Rc::downgrade(&slot);
        let ids = frame_id.clone();
        let win = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            ids.set(None);
            if !on_frame() {
                return;
            }
            let Some(slot) = weak_slot.upgrade() else {
                return;
            };
            let slot = slot.borrow();
            if let Some(cb) = slot.as_ref() {
                match win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => ids.set(Some(id)),
                    Err(e) => log::warn!("requestAnimationFrame failed mid-loop: {:?}", e),
                }
            }
        }) as Box<dyn FnMut()>);

        let id = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| SiteError::unavailable("requestAnimationFrame", e))?;
        frame_id.set(Some(id));
        *slot.borrow_mut() = Some(closure);

        Ok(Self { window, slot, frame_id })
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.slot.borrow_mut().take();
    }
}
