//! Canvas 2D backend: replays a [`Scene`] onto a `CanvasRenderingContext2d`.

use web_sys::CanvasRenderingContext2d;

use crate::game::{DrawCommand, Scene};

pub fn paint(ctx: &CanvasRenderingContext2d, width: f64, height: f64, scene: &Scene) {
    for cmd in scene {
        match cmd {
            DrawCommand::Clear { color } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_rect(0.0, 0.0, width, height);
            }
            DrawCommand::Circle {
                x,
                y,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.begin_path();
                ctx.arc(*x, *y, radius.max(0.0), 0.0, std::f64::consts::TAU)
                    .ok();
                ctx.fill();
            }
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
            } => {
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*width);
                line(ctx, *x1, *y1, *x2, *y2);
            }
            DrawCommand::Text {
                x,
                y,
                text,
                size,
                color,
            } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.set_font(&format!("{size}px 'Fira Code', monospace"));
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                ctx.fill_text(text, *x, *y).ok();
            }
        }
    }
}

fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}
