//! Leptos Viewport Utilities
//!
//! Window-level listeners for Leptos: debounced resize, on-screen keyboard
//! detection, and small one-shot timers.

use std::cell::RefCell;
use std::rc::Rc;

use form_model::timer::TimerGate;
use form_model::viewport::KeyboardHeuristic;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Viewport state signals
#[derive(Clone, Copy)]
pub struct ViewportSignals {
    /// Inner width, updated once a resize burst settles
    pub width_read: ReadSignal<f64>,
    pub width_write: WriteSignal<f64>,
    /// Heuristic on-screen keyboard state
    pub keyboard_open_read: ReadSignal<bool>,
    pub keyboard_open_write: WriteSignal<bool>,
}

pub fn create_viewport_signals() -> ViewportSignals {
    let (width_read, width_write) = signal(inner_width());
    let (keyboard_open_read, keyboard_open_write) = signal(false);
    ViewportSignals {
        width_read,
        width_write,
        keyboard_open_read,
        keyboard_open_write,
    }
}

pub fn inner_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn inner_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn user_agent() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

/// Currently focused element, if any
pub fn active_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.active_element()
}

/// Attach a listener on `window` for the page lifetime
pub fn bind_window_listener<F>(event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Run `f` once after `ms` milliseconds
pub fn defer<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(ms, f).forget();
}

struct DebounceState {
    gate: TimerGate,
    pending: Option<Timeout>,
}

/// Trailing-edge debouncer: a burst of `trigger` calls runs the action once,
/// `window_ms` after the last call.
#[derive(Clone)]
pub struct Debouncer {
    window_ms: u32,
    state: Rc<RefCell<DebounceState>>,
    action: Rc<dyn Fn()>,
}

impl Debouncer {
    pub fn new<F>(window_ms: u32, action: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            window_ms,
            state: Rc::new(RefCell::new(DebounceState { gate: TimerGate::new(), pending: None })),
            action: Rc::new(action),
        }
    }

    pub fn trigger(&self) {
        let mut st = self.state.borrow_mut();
        let ticket = st.gate.arm();
        let state = self.state.clone();
        let action = self.action.clone();
        // replacing the handle cancels the previous timeout
        st.pending = Some(Timeout::new(self.window_ms, move || {
            let fire = state.borrow_mut().gate.fire(ticket);
            if fire {
                action();
            }
        }));
    }
}

/// Bind window resize handling.
///
/// Every resize feeds the keyboard heuristic (when given); the debounced
/// path updates the width signal and then calls `on_settled`.
pub fn bind_viewport<F>(vp: ViewportSignals, debounce_ms: u32, keyboard: Option<KeyboardHeuristic>, on_settled: F)
where
    F: Fn() + 'static,
{
    let debouncer = Debouncer::new(debounce_ms, move || {
        vp.width_write.set(inner_width());
        on_settled();
    });

    bind_window_listener("resize", move |_| {
        if let Some(heuristic) = keyboard {
            let open = heuristic.keyboard_open(inner_height());
            if open != vp.keyboard_open_read.get_untracked() {
                tracing::debug!(open, "on-screen keyboard state changed");
                vp.keyboard_open_write.set(open);
            }
        }
        debouncer.trigger();
    });
}

/// Toggle a class on `<body>`
pub fn set_body_class(class: &str, on: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let _ = if on { classes.add_1(class) } else { classes.remove_1(class) };
}
