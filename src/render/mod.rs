//! Canvas2D rendering
//!
//! Purely cosmetic: draws the current `GameState` onto a 2D context every
//! frame. The sim never depends on anything in here.

use web_sys::CanvasRenderingContext2d;

use crate::consts::*;
use crate::sim::state::{GameState, Obstacle, RockShade, Train};

const SKY_TOP: &str = "#4682B4";
const SKY_BOTTOM: &str = "#87CEEB";
const GROUND_FAR: &str = "#8B7355";
const GROUND_NEAR: &str = "#A0522D";
const RAIL: &str = "#505050";
const TIE: &str = "#8B4513";

const TRAIN_BODY: &str = "#B22222";
const TRAIN_BODY_DARK: &str = "#8B0000";
const TRAIN_ROOF: &str = "#4A4A4A";
const TRAIN_UNDER: &str = "#333333";
const TRAIN_WINDOW: &str = "#ADD8E6";
const HEADLIGHT: &str = "#FFFFE0";

const TIE_SPACING: f64 = 40.0;

impl RockShade {
    /// Base and darkened fill for the rock gradient
    fn colors(self) -> (&'static str, &'static str) {
        match self {
            RockShade::Light => ("#8B8989", "#615F5F"),
            RockShade::Mid => ("#696969", "#494949"),
            RockShade::Dark => ("#5A5A5A", "#3E3E3E"),
        }
    }
}

/// Draw one full frame: background, train, rocks
pub fn draw_frame(ctx: &CanvasRenderingContext2d, state: &GameState) {
    ctx.clear_rect(0.0, 0.0, PLAY_WIDTH as f64, PLAY_HEIGHT as f64);
    draw_background(ctx, state.scroll);
    draw_train(ctx, &state.train);
    for obstacle in &state.obstacles {
        draw_obstacle(ctx, obstacle);
    }
}

fn draw_background(ctx: &CanvasRenderingContext2d, scroll: f32) {
    let w = PLAY_WIDTH as f64;
    let h = PLAY_HEIGHT as f64;

    let sky = ctx.create_linear_gradient(0.0, 0.0, 0.0, h * 0.6);
    let _ = sky.add_color_stop(0.0, SKY_TOP);
    let _ = sky.add_color_stop(1.0, SKY_BOTTOM);
    ctx.set_fill_style_canvas_gradient(&sky);
    ctx.fill_rect(0.0, 0.0, w, h);

    let ground = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    let _ = ground.add_color_stop(0.0, GROUND_FAR);
    let _ = ground.add_color_stop(1.0, GROUND_NEAR);
    ctx.set_fill_style_canvas_gradient(&ground);
    ctx.fill_rect(0.0, 0.0, w, h);

    let rail_spacing = TRAIN_HEIGHT as f64 * 0.5;
    ctx.set_stroke_style_str(RAIL);
    ctx.set_line_width(4.0);
    ctx.set_fill_style_str(TIE);

    for lane in 0..LANES {
        let center_y = lane as f64 * LANE_HEIGHT as f64 + LANE_HEIGHT as f64 / 2.0;

        // Ties scroll with the world and wrap on their spacing
        let mut x = scroll as f64 % TIE_SPACING;
        if x > 0.0 {
            x -= TIE_SPACING;
        }
        while x < w {
            ctx.fill_rect(x - 7.5, center_y - 3.0, 15.0, 6.0);
            x += TIE_SPACING;
        }

        for rail_y in [center_y - rail_spacing / 2.0, center_y + rail_spacing / 2.0] {
            ctx.begin_path();
            ctx.move_to(0.0, rail_y);
            ctx.line_to(w, rail_y);
            ctx.stroke();
        }
    }
}

fn draw_train(ctx: &CanvasRenderingContext2d, train: &Train) {
    let x = train.pos.x as f64;
    let y = train.pos.y as f64;
    let w = train.width as f64;
    let h = train.height as f64;

    let body_h = h * 0.6;
    let roof_h = h * 0.2;
    let under_h = h * 0.2;

    ctx.set_fill_style_str(TRAIN_UNDER);
    ctx.fill_rect(x, y + roof_h + body_h, w, under_h);

    let body = ctx.create_linear_gradient(x, y + roof_h, x, y + roof_h + body_h);
    let _ = body.add_color_stop(0.0, TRAIN_BODY);
    let _ = body.add_color_stop(1.0, TRAIN_BODY_DARK);
    ctx.set_fill_style_canvas_gradient(&body);
    ctx.fill_rect(x, y + roof_h, w, body_h);

    ctx.set_fill_style_str(TRAIN_ROOF);
    ctx.fill_rect(x, y, w, roof_h);

    let win_x = x + w * 0.6;
    let win_y = y + roof_h + body_h * 0.15;
    let win_w = w * 0.25;
    let win_h = body_h * 0.5;
    ctx.set_fill_style_str(TRAIN_WINDOW);
    ctx.fill_rect(win_x, win_y, win_w, win_h);
    ctx.set_stroke_style_str("#222");
    ctx.set_line_width(1.0);
    ctx.stroke_rect(win_x, win_y, win_w, win_h);

    ctx.set_fill_style_str(HEADLIGHT);
    ctx.begin_path();
    let _ = ctx.arc(x + w - 6.0, y + h / 2.0, 4.0, 0.0, std::f64::consts::TAU);
    ctx.fill();
    ctx.set_fill_style_str("rgba(255, 255, 224, 0.3)");
    ctx.begin_path();
    let _ = ctx.arc(x + w - 6.0, y + h / 2.0, 7.0, 0.0, std::f64::consts::TAU);
    ctx.fill();

    // Coupling at the front
    ctx.set_fill_style_str(TRAIN_UNDER);
    ctx.fill_rect(x + w, y + h * 0.6, 5.0, h * 0.3);
}

fn draw_obstacle(ctx: &CanvasRenderingContext2d, obstacle: &Obstacle) {
    let x = obstacle.pos.x as f64;
    let y = obstacle.pos.y as f64;
    let w = obstacle.width as f64;
    let h = obstacle.height as f64;
    let (base, dark) = obstacle.shade.colors();

    let gradient = ctx.create_linear_gradient(x, y, x, y + h);
    let _ = gradient.add_color_stop(0.0, base);
    let _ = gradient.add_color_stop(1.0, dark);
    ctx.set_fill_style_canvas_gradient(&gradient);

    // Slightly irregular quad for a rock silhouette
    ctx.begin_path();
    ctx.move_to(x, y + h * 0.1);
    ctx.line_to(x + w * 0.9, y);
    ctx.line_to(x + w, y + h * 0.9);
    ctx.line_to(x + w * 0.1, y + h);
    ctx.close_path();
    ctx.fill();

    ctx.set_stroke_style_str("#444");
    ctx.set_line_width(1.0);
    ctx.stroke();
}
