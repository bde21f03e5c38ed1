//! Race Launch Countdown Component
//!
//! Overlay shown after the player requests a start: darkens the menu and
//! counts down 3.. 2.. 1.. GO with the racer's name, then reports that the
//! countdown finished so the caller can return the menu to idle. The race
//! itself is outside this crate.

use crate::text::{draw_text_centered, line_height};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::{Duration, Instant};

/// Configuration for launch screen appearance
#[derive(Debug, Clone)]
pub struct LaunchScreenStyle {
    /// Overlay darkness (0-255, higher = darker)
    pub overlay_alpha: u8,

    /// Countdown digit color
    pub countdown_color: Color,

    /// "GO" color
    pub go_color: Color,

    /// Racer name color
    pub name_color: Color,
}

impl Default for LaunchScreenStyle {
    fn default() -> Self {
        LaunchScreenStyle {
            overlay_alpha: 200,
            countdown_color: Color::RGB(255, 255, 100),
            go_color: Color::RGB(80, 220, 90),
            name_color: Color::RGB(220, 220, 240),
        }
    }
}

/// State of the launch countdown
///
/// Idle until [`LaunchScreen::trigger`] is called with the confirmed racer
/// name; then active for the countdown duration plus a short "GO" hold.
///
/// # Example
///
/// ```rust
/// let mut launch = LaunchScreen::new();
///
/// // When the billboard fires its start event
/// launch.trigger("kart_42".to_string());
///
/// // In the game loop
/// launch.render(&mut canvas)?;
/// if launch.finished() {
///     launch.reset();
/// }
/// ```
pub struct LaunchScreen {
    countdown: Duration,
    go_hold: Duration,
    started: Option<Instant>,
    racer_name: String,
    style: LaunchScreenStyle,
}

impl LaunchScreen {
    /// Creates a launch screen with a 3-second countdown and 1-second GO hold
    pub fn new() -> Self {
        LaunchScreen {
            countdown: Duration::from_secs(3),
            go_hold: Duration::from_secs(1),
            started: None,
            racer_name: String::new(),
            style: LaunchScreenStyle::default(),
        }
    }

    /// Creates a launch screen with a custom countdown duration
    #[allow(dead_code)] // Reserved for quick-start game modes
    pub fn with_countdown(countdown: Duration) -> Self {
        LaunchScreen {
            countdown,
            ..Self::new()
        }
    }

    /// Start the countdown for the given racer
    ///
    /// Triggering while already active restarts the countdown; the billboard
    /// doesn't debounce repeated start activations and neither does this.
    pub fn trigger(&mut self, racer_name: String) {
        self.racer_name = racer_name;
        self.started = Some(Instant::now());
    }

    /// Clear the countdown (back to idle)
    pub fn reset(&mut self) {
        self.started = None;
    }

    /// True while the overlay should be shown
    pub fn is_active(&self) -> bool {
        self.started.is_some()
    }

    /// True once countdown and GO hold have both elapsed
    pub fn finished(&self) -> bool {
        match self.started {
            Some(started) => started.elapsed() >= self.countdown + self.go_hold,
            None => false,
        }
    }

    /// Remaining countdown in seconds (0 during the GO hold)
    pub fn remaining_time(&self) -> f32 {
        match self.started {
            Some(started) => {
                (self.countdown.as_secs_f32() - started.elapsed().as_secs_f32()).max(0.0)
            }
            None => 0.0,
        }
    }

    /// Render the countdown overlay; a no-op while idle
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        if self.started.is_none() {
            return Ok(());
        }

        // Dark overlay
        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(sdl2::render::BlendMode::None);

        // Use logical size (game coordinates), not physical window size
        let (screen_width, screen_height) = canvas.logical_size();
        let center_x = (screen_width / 2) as i32;
        let center_y = (screen_height / 2) as i32;

        let remaining = self.remaining_time();
        if remaining > 0.0 {
            let digit = format!("{:.0}", remaining.ceil());
            draw_text_centered(
                canvas,
                &digit,
                center_x,
                center_y - line_height(6) as i32 / 2,
                self.style.countdown_color,
                6,
            )?;
        } else {
            draw_text_centered(
                canvas,
                "GO!",
                center_x,
                center_y - line_height(6) as i32 / 2,
                self.style.go_color,
                6,
            )?;
        }

        let name_line = format!("GOOD LUCK, {}!", self.racer_name);
        draw_text_centered(
            canvas,
            &name_line,
            center_x,
            center_y + 60,
            self.style.name_color,
            2,
        )?;

        Ok(())
    }
}

impl Default for LaunchScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_triggered() {
        let launch = LaunchScreen::new();
        assert!(!launch.is_active());
        assert!(!launch.finished());
        assert_eq!(launch.remaining_time(), 0.0);
    }

    #[test]
    fn test_trigger_activates_with_full_countdown() {
        let mut launch = LaunchScreen::new();
        launch.trigger("kart_7".to_string());

        assert!(launch.is_active());
        assert!(!launch.finished());
        // Just triggered: essentially the whole countdown remains
        assert!(launch.remaining_time() > 2.9);
    }

    #[test]
    fn test_zero_countdown_finishes_after_go_hold_only() {
        let mut launch = LaunchScreen::with_countdown(Duration::ZERO);
        launch.trigger("kart_7".to_string());

        assert_eq!(launch.remaining_time(), 0.0);
        // GO hold hasn't elapsed yet
        assert!(!launch.finished());
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut launch = LaunchScreen::new();
        launch.trigger("kart_7".to_string());
        launch.reset();

        assert!(!launch.is_active());
        assert!(!launch.finished());
    }
}
