use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// Actions the player can perform on the menu screen
///
/// This enum represents the high-level menu actions that can be triggered by
/// input. It decouples input handling from menu logic: the event loop polls
/// raw SDL2 events, this module translates them, and the menu components only
/// ever see `MenuAction`s.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    // === Name Editing ===
    AppendText(String), // SDL text-input event payload
    Backspace,

    // === Start Control ===
    Confirm, // Return/Enter activates start

    // === Pointer ===
    Click(i32, i32),     // pointer release, x/y in logical coordinates
    MouseMove(i32, i32), // x, y - track hover

    // === System ===
    Quit,
}

/// Input context determines which actions are available
///
/// The menu and the launch countdown want different input handling; this
/// enum represents the current mode so irrelevant inputs are filtered out
/// before the menu components see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Billboard is interactive - editing, clicking, confirming
    Menu,
    /// Launch countdown is running - everything but Quit is ignored
    Launching,
}

/// InputSystem processes SDL2 events and produces MenuActions
///
/// # Architecture
///
/// Input processing happens in phases:
/// 1. Determine current InputContext (Menu or Launching)
/// 2. Poll SDL2 events
/// 3. Filter events based on context
/// 4. Translate events to MenuActions
/// 5. Return actions to the event loop for execution
pub struct InputSystem {
    /// Current input context
    pub context: InputContext,
}

impl InputSystem {
    /// Creates a new InputSystem starting in Menu context
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Menu,
        }
    }

    /// Update the input context from the launch screen's state
    ///
    /// This should be called before poll_events() so the frame's input is
    /// filtered consistently.
    pub fn update_context(&mut self, launch_active: bool) {
        self.context = if launch_active {
            InputContext::Launching
        } else {
            InputContext::Menu
        };
    }

    /// Process SDL2 events and return the list of actions to handle
    ///
    /// This is the main entry point for input processing each frame. It
    /// polls all pending SDL2 events and converts them to MenuActions.
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<MenuAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    actions.push(MenuAction::Quit);
                }
                Event::TextInput { text, .. } => {
                    self.translate_text_input(text, &mut actions);
                }
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    self.translate_keydown(key, &mut actions);
                }
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    // Buttons activate on release, matching pointer-up
                    // semantics of the start control
                    if self.context == InputContext::Menu {
                        actions.push(MenuAction::Click(x, y));
                    }
                }
                Event::MouseMotion { x, y, .. } => {
                    if self.context == InputContext::Menu {
                        actions.push(MenuAction::MouseMove(x, y));
                    }
                }
                _ => {
                    // Ignore other event types
                }
            }
        }

        actions
    }

    fn translate_text_input(&self, text: String, actions: &mut Vec<MenuAction>) {
        if self.context == InputContext::Menu && !text.is_empty() {
            actions.push(MenuAction::AppendText(text));
        }
    }

    fn translate_keydown(&self, key: Keycode, actions: &mut Vec<MenuAction>) {
        match self.context {
            InputContext::Menu => match key {
                Keycode::Backspace => actions.push(MenuAction::Backspace),
                Keycode::Return | Keycode::KpEnter => actions.push(MenuAction::Confirm),
                Keycode::Escape => actions.push(MenuAction::Quit),
                _ => {
                    // Printable keys arrive as TextInput events instead
                }
            },
            InputContext::Launching => {
                if key == Keycode::Escape {
                    actions.push(MenuAction::Quit);
                }
            }
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_system_starts_in_menu_context() {
        let input = InputSystem::new();
        assert_eq!(input.context, InputContext::Menu);
    }

    #[test]
    fn test_context_follows_launch_state() {
        let mut input = InputSystem::new();

        input.update_context(true);
        assert_eq!(input.context, InputContext::Launching);

        input.update_context(false);
        assert_eq!(input.context, InputContext::Menu);
    }

    #[test]
    fn test_menu_keys_translate() {
        let input = InputSystem::new();

        let mut actions = Vec::new();
        input.translate_keydown(Keycode::Backspace, &mut actions);
        input.translate_keydown(Keycode::Return, &mut actions);
        input.translate_keydown(Keycode::KpEnter, &mut actions);
        input.translate_keydown(Keycode::Escape, &mut actions);
        // A letter key produces nothing; its text arrives as TextInput
        input.translate_keydown(Keycode::A, &mut actions);

        assert_eq!(
            actions,
            vec![
                MenuAction::Backspace,
                MenuAction::Confirm,
                MenuAction::Confirm,
                MenuAction::Quit,
            ]
        );
    }

    #[test]
    fn test_launching_context_filters_everything_but_quit() {
        let mut input = InputSystem::new();
        input.update_context(true);

        let mut actions = Vec::new();
        input.translate_keydown(Keycode::Return, &mut actions);
        input.translate_keydown(Keycode::Backspace, &mut actions);
        input.translate_text_input("abc".to_string(), &mut actions);
        assert!(actions.is_empty());

        input.translate_keydown(Keycode::Escape, &mut actions);
        assert_eq!(actions, vec![MenuAction::Quit]);
    }

    #[test]
    fn test_empty_text_input_is_dropped() {
        let input = InputSystem::new();

        let mut actions = Vec::new();
        input.translate_text_input(String::new(), &mut actions);
        assert!(actions.is_empty());

        input.translate_text_input("k".to_string(), &mut actions);
        assert_eq!(actions, vec![MenuAction::AppendText("k".to_string())]);
    }
}
