//! Browser shell: canvas setup, input listeners and the animation-frame loop.
//!
//! The game itself lives in [`GameState`]; this module only feeds it frames and
//! input events and paints whatever scene it returns.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window, window};

use crate::config::GameConfig;
use crate::game::GameState;
use crate::judge::InputEvent;
use crate::{Viewport, render};

const CANVAS_ID: &str = "pb-canvas";

struct AppState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    game: GameState,
    /// Monotonic frame counter; never reset, not even by a round reset.
    clock: u64,
}

thread_local! {
    static APP_STATE: RefCell<Option<AppState>> = const { RefCell::new(None) };
}

pub fn start(config: GameConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let viewport = window_viewport(&win);
    let game = GameState::try_new(config, viewport)?;

    // A second start only swaps the game; listeners and the loop are already live.
    if APP_STATE.with(|cell| cell.borrow().is_some()) {
        with_state(|state| state.game = game);
        log::info!("game restarted with new config");
        return Ok(());
    }

    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(CANVAS_ID) {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id(CANVAS_ID);
        c.set_attribute(
            "style",
            "position:fixed; left:0; top:0; display:block; touch-action:none;",
        )
        .ok();
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    size_canvas(&canvas, viewport);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    log::info!(
        "pulse bloom starting on {}x{} canvas",
        viewport.width,
        viewport.height
    );
    APP_STATE.with(|cell| {
        *cell.borrow_mut() = Some(AppState {
            canvas: canvas.clone(),
            ctx,
            game,
            clock: 0,
        });
    });

    // Keyboard activation (Space by default)
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let event = InputEvent::Key {
                code: evt.key_code(),
            };
            with_state(|state| {
                if event.is_activation(state.game.config(), state.game.viewport()) {
                    // keep Space from scrolling the page
                    evt.prevent_default();
                }
                state.game.handle_input(event);
            });
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Pointer / touch activation on the static circle
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::PointerEvent| {
            // offset_x/offset_y are already canvas-local
            let event = InputEvent::Tap {
                x: evt.offset_x() as f64,
                y: evt.offset_y() as f64,
            };
            with_state(|state| {
                state.game.handle_input(event);
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Resize keeps score and clock, only the surface changes
    {
        let closure = Closure::wrap(Box::new(move || {
            if let Some(win) = window() {
                let viewport = window_viewport(&win);
                with_state(|state| {
                    size_canvas(&state.canvas, viewport);
                    state.game.resize(viewport);
                });
            }
        }) as Box<dyn FnMut()>);
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    start_loop();
    Ok(())
}

pub fn reset() {
    with_state(|state| state.game.reset());
}

fn with_state(f: impl FnOnce(&mut AppState)) {
    APP_STATE.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            f(state);
        }
    });
}

fn window_viewport(win: &Window) -> Viewport {
    let width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(640.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(640.0);
    Viewport::new(width.max(1.0), height.max(1.0))
}

fn size_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        with_state(tick);
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (window(), g.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn tick(state: &mut AppState) {
    state.clock += 1;
    let scene = state.game.frame(state.clock);
    let vp = state.game.viewport();
    render::paint(&state.ctx, vp.width, vp.height, &scene);
}
