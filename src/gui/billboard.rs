//! Billboard Menu Screen
//!
//! The in-world sign presenting the main menu: the game title, a racer-name
//! input field and a start button, mounted on a panel and post. The
//! behavioral part is deliberately small and canvas-free:
//!
//! - one piece of state, the [`PlayerNameField`], seeded at construction
//!   from the injected [`SettingsStore`] if a name was persisted earlier
//! - one event, [`Billboard::on_game_start`], notified when the player
//!   activates the start control
//!
//! Rendering and hit-testing live alongside but only borrow the canvas when
//! called, so the state and event logic is testable without SDL.
//!
//! # Example
//!
//! ```rust
//! use crate::gui::Billboard;
//!
//! let mut billboard = Billboard::new(&store, 640, 360);
//! billboard.on_game_start.add(|| println!("lights out!"));
//!
//! // In the event loop
//! billboard.handle_click(click_x, click_y);
//!
//! // In the render loop
//! billboard.render(&mut canvas)?;
//! ```

use super::name_field::PlayerNameField;
use crate::events::Observable;
use crate::settings::{SettingsStore, PLAYER_NAME_KEY};
use crate::text::{draw_text, draw_text_centered, line_height, measure_text};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::Instant;

/// Caret blink period in milliseconds (on for half, off for half)
const CARET_BLINK_MS: u128 = 800;

/// Configuration for billboard appearance
#[derive(Debug, Clone)]
pub struct BillboardStyle {
    /// Panel background color
    pub panel_color: Color,

    /// Panel frame color
    pub frame_color: Color,

    /// Support post color
    pub post_color: Color,

    /// Title text color
    pub title_color: Color,

    /// Name input background (unfocused / focused)
    pub input_color: Color,
    pub input_focused_color: Color,

    /// Name input text color
    pub input_text_color: Color,

    /// Placeholder text color
    pub placeholder_color: Color,

    /// Start button background (idle / hovered)
    pub button_color: Color,
    pub button_hover_color: Color,

    /// Start button label color
    pub button_text_color: Color,
}

impl Default for BillboardStyle {
    fn default() -> Self {
        BillboardStyle {
            panel_color: Color::RGB(24, 28, 44),
            frame_color: Color::RGB(90, 96, 120),
            post_color: Color::RGB(60, 52, 46),
            title_color: Color::RGB(255, 255, 255),
            input_color: Color::RGB(205, 205, 210),
            input_focused_color: Color::RGB(250, 250, 250),
            input_text_color: Color::RGB(20, 20, 25),
            placeholder_color: Color::RGB(110, 110, 120),
            button_color: Color::RGB(76, 175, 80),
            button_hover_color: Color::RGB(69, 160, 73),
            button_text_color: Color::RGB(255, 255, 255),
        }
    }
}

/// Fixed pixel layout of the billboard, derived from the logical screen size
///
/// Computed once at construction so hit-testing doesn't need a canvas.
#[derive(Debug, Clone)]
pub struct BillboardLayout {
    pub post: Rect,
    pub panel: Rect,
    pub title_y: i32,
    pub name_input: Rect,
    pub start_button: Rect,
}

impl BillboardLayout {
    /// Lays the sign out centered in the upper two thirds of the screen
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        let panel_width = (screen_width * 3 / 5).max(260);
        let panel_height = (screen_height / 2).max(150);
        let panel_x = (screen_width as i32 - panel_width as i32) / 2;
        let panel_y = screen_height as i32 / 10;
        let panel = Rect::new(panel_x, panel_y, panel_width, panel_height);

        // Post runs from the panel's lower edge to the bottom of the screen
        let post_width = panel_width / 12;
        let post_x = screen_width as i32 / 2 - post_width as i32 / 2;
        let post_y = panel.bottom();
        let post = Rect::new(
            post_x,
            post_y,
            post_width,
            (screen_height as i32 - post_y).max(0) as u32,
        );

        let widget_width = panel_width - panel_width / 5;
        let widget_x = panel_x + (panel_width as i32 - widget_width as i32) / 2;
        let widget_height = panel_height / 5;

        let title_y = panel_y + panel_height as i32 / 8;
        let name_input = Rect::new(
            widget_x,
            panel_y + panel_height as i32 * 2 / 5,
            widget_width,
            widget_height,
        );
        let start_button = Rect::new(
            widget_x,
            name_input.bottom() + widget_height as i32 / 3,
            widget_width,
            widget_height,
        );

        BillboardLayout {
            post,
            panel,
            title_y,
            name_input,
            start_button,
        }
    }
}

/// The billboard menu screen
///
/// Owns the racer-name state and the start-requested event. The start event
/// carries no payload, is delivered synchronously to subscribers in
/// attachment order, and may fire any number of times; nothing debounces
/// repeated activations.
pub struct Billboard {
    name_field: PlayerNameField,

    /// Fired on every activation of the start control
    pub on_game_start: Observable,

    layout: BillboardLayout,
    style: BillboardStyle,
    input_focused: bool,
    hover_start: bool,
    created: Instant,
}

impl Billboard {
    /// Builds the billboard and seeds the name field from the store
    ///
    /// An absent or empty persisted name leaves the field empty; that is the
    /// normal first-run case, not an error.
    pub fn new(store: &dyn SettingsStore, screen_width: u32, screen_height: u32) -> Self {
        let name_field = match store.get(PLAYER_NAME_KEY) {
            Some(name) if !name.is_empty() => PlayerNameField::with_text(&name),
            _ => PlayerNameField::new(),
        };

        Billboard {
            name_field,
            on_game_start: Observable::new(),
            layout: BillboardLayout::new(screen_width, screen_height),
            style: BillboardStyle::default(),
            input_focused: true,
            hover_start: false,
            created: Instant::now(),
        }
    }

    /// The trimmed, never-empty racer name
    ///
    /// Generates and writes back a `kart_<n>` fallback when the field is
    /// blank, so the name shown after starting matches the name returned.
    pub fn racer_name(&mut self) -> String {
        self.name_field.display_name()
    }

    /// Raw field content, for rendering and tests
    pub fn name_text(&self) -> &str {
        self.name_field.raw_text()
    }

    /// Whether the name input currently has keyboard focus
    pub fn input_focused(&self) -> bool {
        self.input_focused
    }

    /// Append typed text to the name field (when focused)
    pub fn handle_text_input(&mut self, text: &str) {
        if self.input_focused {
            self.name_field.push_str(text);
        }
    }

    /// Delete the last character of the name field (when focused)
    pub fn handle_backspace(&mut self) {
        if self.input_focused {
            self.name_field.pop_char();
        }
    }

    /// Route a pointer release to the widget under it
    ///
    /// Clicking the start button activates start; clicking the name input
    /// focuses it; clicking anywhere else drops focus. Returns `true` when a
    /// widget consumed the click.
    pub fn handle_click(&mut self, x: i32, y: i32) -> bool {
        if self.layout.start_button.contains_point((x, y)) {
            self.activate_start();
            return true;
        }

        if self.layout.name_input.contains_point((x, y)) {
            self.input_focused = true;
            return true;
        }

        self.input_focused = false;
        false
    }

    /// Track pointer position for button hover styling
    pub fn handle_mouse_move(&mut self, x: i32, y: i32) {
        self.hover_start = self.layout.start_button.contains_point((x, y));
    }

    /// Activate the start control (Return key or button click)
    ///
    /// Notifies every `on_game_start` subscriber exactly once. There is no
    /// guard against repeated activation.
    pub fn activate_start(&mut self) {
        self.on_game_start.notify_observers();
    }

    /// Render the sign: post, framed panel, title, name input, start button
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let layout = &self.layout;
        let style = &self.style;

        // Support post behind the panel
        canvas.set_draw_color(style.post_color);
        canvas.fill_rect(layout.post)?;

        // Panel with a double frame
        canvas.set_draw_color(style.panel_color);
        canvas.fill_rect(layout.panel)?;
        canvas.set_draw_color(style.frame_color);
        canvas.draw_rect(layout.panel)?;
        canvas.draw_rect(Rect::new(
            layout.panel.x() + 2,
            layout.panel.y() + 2,
            layout.panel.width() - 4,
            layout.panel.height() - 4,
        ))?;

        // Title
        draw_text_centered(
            canvas,
            "KART RACER",
            layout.panel.x() + layout.panel.width() as i32 / 2,
            layout.title_y,
            style.title_color,
            3,
        )?;

        self.render_name_input(canvas)?;
        self.render_start_button(canvas)?;

        Ok(())
    }

    fn render_name_input(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let rect = self.layout.name_input;
        let style = &self.style;

        let background = if self.input_focused {
            style.input_focused_color
        } else {
            style.input_color
        };
        canvas.set_draw_color(background);
        canvas.fill_rect(rect)?;
        canvas.set_draw_color(style.frame_color);
        canvas.draw_rect(rect)?;

        let text_scale = 2;
        let text_x = rect.x() + 8;
        let text_y = rect.y() + (rect.height() as i32 - line_height(text_scale) as i32) / 2;

        let raw = self.name_field.raw_text();
        if raw.is_empty() {
            draw_text(
                canvas,
                "ENTER RACER NAME...",
                text_x,
                text_y,
                style.placeholder_color,
                text_scale,
            )?;
        } else {
            draw_text(canvas, raw, text_x, text_y, style.input_text_color, text_scale)?;
        }

        // Blinking caret while focused
        if self.input_focused && self.caret_visible() {
            let caret_x = text_x + measure_text(raw, text_scale) as i32 + 2;
            canvas.set_draw_color(style.input_text_color);
            canvas.fill_rect(Rect::new(caret_x, text_y, 2, line_height(text_scale)))?;
        }

        Ok(())
    }

    fn render_start_button(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let rect = self.layout.start_button;
        let style = &self.style;

        let background = if self.hover_start {
            style.button_hover_color
        } else {
            style.button_color
        };
        canvas.set_draw_color(background);
        canvas.fill_rect(rect)?;

        let text_scale = 2;
        draw_text_centered(
            canvas,
            "START GAME",
            rect.x() + rect.width() as i32 / 2,
            rect.y() + (rect.height() as i32 - line_height(text_scale) as i32) / 2,
            style.button_text_color,
            text_scale,
        )?;

        Ok(())
    }

    fn caret_visible(&self) -> bool {
        let elapsed = self.created.elapsed().as_millis();
        (elapsed % CARET_BLINK_MS) < CARET_BLINK_MS / 2
    }

    #[cfg(test)]
    pub fn layout(&self) -> &BillboardLayout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory store standing in for the settings file
    #[derive(Default)]
    struct MemoryStore {
        values: HashMap<String, String>,
    }

    impl MemoryStore {
        fn with_name(name: &str) -> Self {
            let mut store = MemoryStore::default();
            store.set(PLAYER_NAME_KEY, name);
            store
        }
    }

    impl SettingsStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.values.insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_seeds_name_from_store() {
        let store = MemoryStore::with_name("Alice");
        let billboard = Billboard::new(&store, 640, 360);
        assert_eq!(billboard.name_text(), "Alice");
    }

    #[test]
    fn test_empty_store_seeds_empty_field() {
        let store = MemoryStore::default();
        let billboard = Billboard::new(&store, 640, 360);
        assert_eq!(billboard.name_text(), "");
    }

    #[test]
    fn test_empty_persisted_name_is_ignored() {
        let store = MemoryStore::with_name("");
        let billboard = Billboard::new(&store, 640, 360);
        assert_eq!(billboard.name_text(), "");
    }

    #[test]
    fn test_racer_name_falls_back_when_blank() {
        let store = MemoryStore::default();
        let mut billboard = Billboard::new(&store, 640, 360);

        let name = billboard.racer_name();
        assert!(name.starts_with("kart_"));
        assert_eq!(billboard.name_text(), name);
        assert_eq!(billboard.racer_name(), name);
    }

    #[test]
    fn test_two_listeners_fire_once_in_order() {
        let store = MemoryStore::default();
        let mut billboard = Billboard::new(&store, 640, 360);

        let calls = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&calls);
        billboard.on_game_start.add(move || first.borrow_mut().push("first"));
        let second = Rc::clone(&calls);
        billboard.on_game_start.add(move || second.borrow_mut().push("second"));

        billboard.activate_start();
        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_no_activation_means_no_notification() {
        let store = MemoryStore::default();
        let mut billboard = Billboard::new(&store, 640, 360);

        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        billboard.on_game_start.add(move || *counter.borrow_mut() += 1);

        billboard.handle_text_input("Alice");
        billboard.handle_backspace();
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_repeated_activation_is_not_deduplicated() {
        let store = MemoryStore::default();
        let mut billboard = Billboard::new(&store, 640, 360);

        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        billboard.on_game_start.add(move || *counter.borrow_mut() += 1);

        billboard.activate_start();
        billboard.activate_start();
        billboard.activate_start();
        assert_eq!(*count.borrow(), 3);
    }

    #[test]
    fn test_click_on_start_button_activates() {
        let store = MemoryStore::default();
        let mut billboard = Billboard::new(&store, 640, 360);

        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        billboard.on_game_start.add(move || *counter.borrow_mut() += 1);

        let button = billboard.layout().start_button;
        let consumed = billboard.handle_click(button.x() + 5, button.y() + 5);
        assert!(consumed);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_click_routing_controls_focus() {
        let store = MemoryStore::default();
        let mut billboard = Billboard::new(&store, 640, 360);
        assert!(billboard.input_focused());

        // Clicking outside every widget drops focus
        assert!(!billboard.handle_click(0, 0));
        assert!(!billboard.input_focused());

        // Typing while unfocused is ignored
        billboard.handle_text_input("x");
        assert_eq!(billboard.name_text(), "");

        // Clicking the input restores focus
        let input = billboard.layout().name_input;
        assert!(billboard.handle_click(input.x() + 5, input.y() + 5));
        assert!(billboard.input_focused());

        billboard.handle_text_input("x");
        assert_eq!(billboard.name_text(), "x");
    }

    #[test]
    fn test_layout_widgets_sit_inside_panel() {
        let layout = BillboardLayout::new(640, 360);
        assert!(layout.panel.contains_rect(layout.name_input));
        assert!(layout.panel.contains_rect(layout.start_button));
        // Widgets must not overlap
        assert!(layout.name_input.bottom() <= layout.start_button.top());
        // Post starts where the panel ends
        assert_eq!(layout.post.top(), layout.panel.bottom());
    }
}
