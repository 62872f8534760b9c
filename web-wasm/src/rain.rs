//! マトリックスレインのキャンバス描画
//!
//! 対象のcanvasが無ければ何もしない。ページが閉じられるまで動き続ける。

use arsenal_common::rain::{RainField, FADE_STYLE, FONT_SIZE, GLYPH_STYLE, TICK_MS};
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

fn window_size(window: &Window) -> (u32, u32) {
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// キャンバスをウィンドウ全体に合わせる
fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) -> (f64, f64) {
    let (width, height) = window_size(window);
    canvas.set_width(width);
    canvas.set_height(height);
    (f64::from(width), f64::from(height))
}

fn draw(ctx: &CanvasRenderingContext2d, field: &mut RainField, font: &str) {
    ctx.set_fill_style_str(FADE_STYLE);
    ctx.fill_rect(0.0, 0.0, field.width(), field.height());

    ctx.set_fill_style_str(GLYPH_STYLE);
    ctx.set_font(font);

    let mut buf = [0u8; 4];
    for glyph in field.tick(js_sys::Math::random) {
        let _ = ctx.fill_text(glyph.ch.encode_utf8(&mut buf), glyph.x, glyph.y);
    }
}

/// idのcanvasにアニメーションを取り付ける
pub fn attach(canvas_id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = window
        .document()
        .and_then(|doc| doc.get_element_by_id(canvas_id))
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return;
    };
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };

    let (width, height) = fit_to_window(&window, &canvas);
    let field = Rc::new(RefCell::new(RainField::new(width, height)));

    // リサイズ（デバウンス無し）
    {
        let field = Rc::clone(&field);
        let resize_window = window.clone();
        EventListener::new(&window, "resize", move |_| {
            let (width, height) = fit_to_window(&resize_window, &canvas);
            field.borrow_mut().resize(width, height);
        })
        .forget();
    }

    let font = format!("{}px monospace", FONT_SIZE);
    Interval::new(TICK_MS, move || {
        draw(&ctx, &mut field.borrow_mut(), &font);
    })
    .forget();
}
