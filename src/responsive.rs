//! Responsive Behaviours
//!
//! Debounced viewport changes and the on-screen keyboard class.

use leptos::prelude::*;

use form_model::viewport::{is_text_entry, KeyboardHeuristic};

use crate::browser;
use crate::context::FormContext;

const KEYBOARD_CLASS: &str = "keyboard-open";

pub fn setup_responsive(ctx: FormContext) {
    let (debounce_ms, threshold, scroll_delay) =
        ctx.with_config(|c| (c.resize_debounce_ms, c.keyboard_threshold_px, c.scroll_delay_ms));

    // keyboard tracking only makes sense on devices that were mobile at start
    let keyboard = ctx
        .mobile
        .then(|| KeyboardHeuristic::new(leptos_viewport::inner_height(), threshold));

    leptos_viewport::bind_viewport(ctx.viewport, debounce_ms, keyboard, move || {
        handle_viewport_change(ctx, scroll_delay);
    });

    Effect::new(move |_| {
        leptos_viewport::set_body_class(KEYBOARD_CLASS, ctx.viewport.keyboard_open_read.get());
    });
}

/// Runs once per settled resize burst
fn handle_viewport_change(ctx: FormContext, scroll_delay: u32) {
    browser::auto_resize_all();

    let width = ctx.viewport.width_read.get_untracked();
    let mobile = ctx.with_config(|c| form_model::viewport::is_mobile(c, width, &leptos_viewport::user_agent()));
    if !mobile {
        return;
    }
    let Some(active) = leptos_viewport::active_element() else {
        return;
    };
    if is_text_entry(&active.tag_name()) {
        leptos_viewport::defer(scroll_delay, move || browser::scroll_to_center(&active));
    }
}
