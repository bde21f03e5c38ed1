//! Menu GUI System
//!
//! This module provides the menu screen's GUI components. They render at
//! fixed screen positions with procedural SDL2 primitives and keep their
//! state separate from rendering: every component computes its layout from
//! the logical screen size up front and only borrows the canvas inside
//! `render`/`paint`, so the stateful parts are testable without a window.
//!
//! # Available Components
//!
//! - [`Billboard`] - the main menu sign: title, racer-name input, start button
//! - [`PlayerNameField`] - the name state behind the input widget
//! - [`LaunchScreen`] - post-start countdown overlay
//! - [`Backdrop`] - procedurally painted background scenery
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::{Backdrop, Billboard, LaunchScreen};
//!
//! let mut billboard = Billboard::new(&settings, GAME_WIDTH, GAME_HEIGHT);
//! let backdrop = Backdrop::new(GAME_WIDTH, GAME_HEIGHT);
//!
//! // Render back to front
//! backdrop.paint(&mut canvas)?;
//! billboard.render(&mut canvas)?;
//! ```

pub mod backdrop;
pub mod billboard;
pub mod launch_screen;
pub mod name_field;

pub use backdrop::Backdrop;
pub use billboard::Billboard;
pub use launch_screen::LaunchScreen;
pub use name_field::PlayerNameField;
