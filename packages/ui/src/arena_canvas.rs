//! Canvas view of the arena.
//!
//! Owns the frame loop (~60 Hz, cancelled with the component) and keyboard
//! input; the simulation itself lives in the `arena` crate.

use arena::{Arena, Input};
use dioxus::prelude::*;

const CANVAS_ID: &str = "arena-canvas";
const FRAME_MS: u32 = 16;

#[component]
pub fn ArenaCanvas(arena: Signal<Arena>) -> Element {
    let mut arena = arena;

    // Frame loop
    use_future(move || async move {
        #[cfg(target_arch = "wasm32")]
        {
            let mut last = js_sys::Date::now();
            loop {
                gloo_timers::future::TimeoutFuture::new(FRAME_MS).await;
                let now = js_sys::Date::now();
                arena.write().update((now - last) / 1000.0);
                last = now;
                render::draw(CANVAS_ID, &arena.peek());
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (arena, FRAME_MS);
        }
    });

    let mut on_key = move |evt: KeyboardEvent, down: bool| {
        if let Some(input) = Input::from_code(&evt.code().to_string()) {
            evt.prevent_default();
            arena.write().key(input, down);
        }
    };

    rsx! {
        div {
            class: "arena-frame",
            tabindex: 0,
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt| on_key(evt, true),
            onkeyup: move |evt| on_key(evt, false),
            canvas { id: CANVAS_ID, class: "arena-canvas" }
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod render {
    use arena::Arena;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    const COLUMN_STEP: f64 = 2.0;

    fn context(id: &str) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
        let canvas = web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some((canvas, ctx))
    }

    pub(super) fn draw(id: &str, arena: &Arena) {
        let Some((canvas, ctx)) = context(id) else {
            return;
        };
        // Track the CSS size so the drawing buffer never stretches
        let (w, h) = (canvas.client_width().max(1) as u32, canvas.client_height().max(1) as u32);
        if canvas.width() != w || canvas.height() != h {
            canvas.set_width(w);
            canvas.set_height(h);
        }
        let (width, height) = (w as f64, h as f64);

        ctx.set_fill_style_str("#050505");
        ctx.fill_rect(0.0, 0.0, width, height);
        ctx.set_fill_style_str("#1b1b1b");
        ctx.fill_rect(0.0, height / 2.0, width, height / 2.0);

        for slice in arena.cast(width, height, COLUMN_STEP) {
            ctx.set_fill_style_str(&slice.color());
            ctx.fill_rect(slice.x, slice.top, COLUMN_STEP, slice.height);
        }

        ctx.set_fill_style_str("#c62828");
        for sprite in arena.sprites(width, height) {
            ctx.fill_rect(sprite.x, sprite.y, sprite.size, sprite.size);
        }

        if arena.flash > 0.0 {
            ctx.set_fill_style_str(&format!("rgba(255,200,120,{})", arena.flash));
            ctx.fill_rect(0.0, 0.0, width, height);
        }
    }
}
