use macroquad::prelude::*;

use crate::game::{GameStatus, Snapshot};
use crate::grid::{Cell, TILE_SIZE};
use crate::powerup::PowerUp;

const SNAKE_HEAD: Color = Color::new(0.2, 1.0, 0.2, 1.0);
const SNAKE_BODY: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const GHOST: Color = Color::new(0.5, 0.0, 0.5, 1.0);
const FOOD_OUTER: Color = RED;
const FOOD_INNER: Color = Color::new(1.0, 0.4, 0.4, 1.0);
const HUD_GOLD: Color = Color::new(1.0, 0.84, 0.0, 1.0);
const HUD_CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);
const HUD_MAGENTA: Color = Color::new(1.0, 0.0, 1.0, 1.0);

fn with_alpha(c: Color, a: f32) -> Color {
    Color::new(c.r, c.g, c.b, a)
}

/// Draws one frame. `time` only drives pulsing animations.
pub fn draw(snap: &Snapshot<'_>, time: f64) {
    clear_background(BLACK);

    draw_particles(snap);
    draw_snake(snap);
    draw_food(snap.food, time);
    for p in snap.power_ups {
        draw_power_up(p, time);
    }
    draw_hud(snap);

    if snap.status == GameStatus::GameOver {
        draw_game_over(snap.score);
    }
}

fn draw_particles(snap: &Snapshot<'_>) {
    for p in snap.particles {
        draw_circle(p.position.x, p.position.y, p.size, with_alpha(p.color, p.alpha()));
    }
}

fn draw_snake(snap: &Snapshot<'_>) {
    let ghost = snap.modifiers.ghost();

    for (i, c) in snap.snake.iter().enumerate() {
        let r = c.to_rect();
        if i == 0 {
            let color = if ghost { with_alpha(GHOST, 0.5) } else { SNAKE_HEAD };
            draw_rectangle(r.x - 2.0, r.y - 2.0, r.w + 4.0, r.h + 4.0, color);
        } else {
            let alpha = if ghost { 0.4 } else { (1.0 - i as f32 * 0.04).max(0.2) };
            let base = if ghost { GHOST } else { SNAKE_BODY };
            draw_rectangle(r.x, r.y, r.w, r.h, with_alpha(base, alpha));
        }
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, BLACK);
    }

    let n = snap.trail.len().max(1) as f32;
    for (i, c) in snap.trail.iter().enumerate() {
        let p = c.pixel_center();
        draw_circle(p.x, p.y, 3.0, Color::new(0.0, 1.0, 0.0, 0.2 * i as f32 / n));
    }
}

fn draw_food(cell: Cell, time: f64) {
    let pulse = ((time * 4.0).sin().abs() * 3.0) as f32;
    let c = cell.pixel_center();
    let half = TILE_SIZE as f32 / 2.0;
    draw_circle(c.x, c.y, half + pulse, FOOD_OUTER);
    draw_circle(c.x, c.y, half - 3.0, FOOD_INNER);
}

fn draw_power_up(p: &PowerUp, time: f64) {
    let color = p.kind.color();
    let glow = ((time * 5.0).sin().abs() * 0.4 + 0.6) as f32;
    let r = p.cell.to_rect();
    let c = p.cell.pixel_center();

    draw_rectangle(r.x - 2.0, r.y - 2.0, r.w + 4.0, r.h + 4.0, with_alpha(color, 0.35 * glow));
    draw_circle(c.x, c.y, r.w / 2.0 - 2.0, color);

    let symbol = p.kind.symbol();
    let m = measure_text(symbol, None, 14, 1.0);
    draw_text(symbol, c.x - m.width / 2.0, c.y + m.height / 2.0, 14.0, WHITE);
}

fn draw_hud(snap: &Snapshot<'_>) {
    draw_text(&format!("Score: {}", snap.score), 10.0, 30.0, 32.0, WHITE);

    let mut y = 58.0;
    let mut line = |text: &str, color: Color| {
        draw_text(text, 10.0, y, 22.0, color);
        y += 24.0;
    };
    if snap.modifiers.ghost() {
        line("GHOST MODE", GHOST);
    }
    if snap.modifiers.double_points() {
        line("DOUBLE POINTS", HUD_MAGENTA);
    }
    if snap.modifiers.speed_factor > 1.0 {
        line("SPEED BOOST", HUD_GOLD);
    } else if snap.modifiers.speed_factor < 1.0 {
        line("SLOW MOTION", HUD_CYAN);
    }
}

fn draw_game_over(score: u32) {
    let sw = screen_width();
    let sh = screen_height();
    draw_rectangle(0.0, 0.0, sw, sh, Color::new(0.0, 0.0, 0.0, 0.8));

    let lines = [
        ("Game Over!".to_string(), 48u16),
        (format!("Final Score: {}", score), 28),
        ("Press SPACE to restart or ESC to quit".to_string(), 24),
    ];
    let mut y = sh * 0.5 - 50.0;
    for (text, size) in &lines {
        let m = measure_text(text, None, *size, 1.0);
        draw_text(text, (sw - m.width) * 0.5, y, *size as f32, WHITE);
        y += 50.0;
    }
}
