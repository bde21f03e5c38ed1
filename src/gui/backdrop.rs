//! Decorative Menu Backdrop
//!
//! Procedurally painted background behind the billboard: a dusk sky
//! gradient, a low sun, and a racetrack sketched with perspective lines.
//! Purely presentational; nothing here carries game state.

use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Color pair interpolated over the sky band
const SKY_TOP: (u8, u8, u8) = (24, 18, 52);
const SKY_HORIZON: (u8, u8, u8) = (214, 112, 60);

/// Ground color below the horizon
const GROUND: Color = Color::RGB(38, 34, 38);

/// Track surface and lane-marking colors
const TRACK: Color = Color::RGB(58, 58, 62);
const LANE_MARK: Color = Color::RGB(230, 220, 190);

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

/// Painter for the menu background
///
/// Stateless apart from the cached screen size; `paint` redraws the whole
/// scene with gradient and line primitives each frame.
pub struct Backdrop {
    screen_width: u32,
    screen_height: u32,
}

impl Backdrop {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Backdrop {
            screen_width,
            screen_height,
        }
    }

    /// Paint sky, sun, ground and track onto the canvas
    pub fn paint(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let horizon_y = (self.screen_height * 2 / 3) as i32;

        self.paint_sky(canvas, horizon_y)?;
        self.paint_sun(canvas, horizon_y)?;
        self.paint_track(canvas, horizon_y)?;

        Ok(())
    }

    /// Vertical gradient from deep night at the top to dusk at the horizon
    fn paint_sky(&self, canvas: &mut Canvas<Window>, horizon_y: i32) -> Result<(), String> {
        for y in 0..horizon_y {
            let t = y as f32 / horizon_y as f32;
            canvas.set_draw_color(Color::RGB(
                lerp_channel(SKY_TOP.0, SKY_HORIZON.0, t),
                lerp_channel(SKY_TOP.1, SKY_HORIZON.1, t),
                lerp_channel(SKY_TOP.2, SKY_HORIZON.2, t),
            ));
            canvas.draw_line(
                Point::new(0, y),
                Point::new(self.screen_width as i32, y),
            )?;
        }
        Ok(())
    }

    /// Low sun half-sunk behind the horizon, drawn as stacked slices
    fn paint_sun(&self, canvas: &mut Canvas<Window>, horizon_y: i32) -> Result<(), String> {
        let radius = (self.screen_height / 8) as i32;
        let center_x = (self.screen_width * 4 / 5) as i32;

        canvas.set_draw_color(Color::RGB(250, 180, 90));
        for dy in 0..radius {
            let y = horizon_y - dy;
            let half_width = ((radius * radius - dy * dy) as f32).sqrt() as i32;
            canvas.draw_line(
                Point::new(center_x - half_width, y),
                Point::new(center_x + half_width, y),
            )?;
        }
        Ok(())
    }

    /// Ground plane with a road converging toward the horizon
    fn paint_track(&self, canvas: &mut Canvas<Window>, horizon_y: i32) -> Result<(), String> {
        canvas.set_draw_color(GROUND);
        canvas.fill_rect(Rect::new(
            0,
            horizon_y,
            self.screen_width,
            self.screen_height - horizon_y as u32,
        ))?;

        let bottom = self.screen_height as i32;
        let center_x = self.screen_width as i32 / 2;
        let road_half_bottom = self.screen_width as i32 / 4;
        let road_half_top = self.screen_width as i32 / 40;

        // Road surface: horizontal slices shrinking toward the horizon
        canvas.set_draw_color(TRACK);
        for y in horizon_y..bottom {
            let t = (y - horizon_y) as f32 / (bottom - horizon_y) as f32;
            let half = road_half_top + ((road_half_bottom - road_half_top) as f32 * t) as i32;
            canvas.draw_line(
                Point::new(center_x - half, y),
                Point::new(center_x + half, y),
            )?;
        }

        // Road edges
        canvas.set_draw_color(LANE_MARK);
        canvas.draw_line(
            Point::new(center_x - road_half_top, horizon_y),
            Point::new(center_x - road_half_bottom, bottom),
        )?;
        canvas.draw_line(
            Point::new(center_x + road_half_top, horizon_y),
            Point::new(center_x + road_half_bottom, bottom),
        )?;

        // Dashed center line
        let dash_count = 6;
        for i in 0..dash_count {
            let t0 = i as f32 / dash_count as f32;
            let t1 = (i as f32 + 0.5) / dash_count as f32;
            let y0 = horizon_y + ((bottom - horizon_y) as f32 * t0) as i32;
            let y1 = horizon_y + ((bottom - horizon_y) as f32 * t1) as i32;
            canvas.draw_line(Point::new(center_x, y0), Point::new(center_x, y1))?;
        }

        Ok(())
    }
}
