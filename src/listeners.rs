use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, Window};

/// Event listener that unregisters itself when dropped.
pub struct DomListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn Fn(Event)>,
    frame: Option<AnimationFrame>,
}

impl DomListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: Fn(Event) + 'static,
    {
        let callback = Closure::<dyn Fn(Event)>::new(handler);
        if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            warn!("Failed to listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            callback,
            frame: None,
        })
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Tracks the id of the animation frame requested but not yet run.
#[derive(Debug, Default)]
pub struct FrameSlot {
    pending: Cell<Option<i32>>,
}

impl FrameSlot {
    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn requested(&self, id: i32) {
        self.pending.set(Some(id));
    }

    pub fn ran(&self) {
        self.pending.set(None);
    }

    /// Hands back the pending id, leaving the slot empty.
    pub fn take(&self) -> Option<i32> {
        self.pending.take()
    }
}

/// Frame callback kept alive until any request for it has been cancelled.
struct AnimationFrame {
    window: Window,
    slot: Rc<FrameSlot>,
    _callback: Rc<Closure<dyn Fn()>>,
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let Some(id) = self.slot.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
    }
}

/// Runs `on_frame` at most once per animation frame while the window scrolls.
pub fn throttled_scroll<F>(window: &Window, on_frame: F) -> Option<DomListener>
where
    F: Fn() + 'static,
{
    let slot = Rc::new(FrameSlot::default());
    let callback = {
        let slot = slot.clone();
        Rc::new(Closure::<dyn Fn()>::new(move || {
            slot.ran();
            on_frame();
        }))
    };

    let win = window.clone();
    let mut listener = {
        let slot = slot.clone();
        let callback = callback.clone();
        DomListener::new(window, "scroll", move |_| {
            if slot.is_pending() {
                return;
            }
            match win.request_animation_frame((*callback).as_ref().unchecked_ref()) {
                Ok(id) => slot.requested(id),
                Err(e) => warn!("requestAnimationFrame failed: {:?}", e),
            }
        })?
    };
    listener.frame = Some(AnimationFrame {
        window: window.clone(),
        slot,
        _callback: callback,
    });
    Some(listener)
}
