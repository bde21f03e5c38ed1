mod events;
mod gui;
mod input_system;
mod settings;
mod text;

use gui::{Backdrop, Billboard, LaunchScreen};
use input_system::{InputSystem, MenuAction};
use settings::{FileSettingsStore, SettingsStore, LAST_PLAYED_KEY, PLAYER_NAME_KEY};
use std::cell::Cell;
use std::rc::Rc;

// Game resolution constants
const GAME_WIDTH: u32 = 640;
const GAME_HEIGHT: u32 = 360;

/// Calculate window scale based on monitor size
///
/// Picks the largest integer scale of the logical resolution that fits in
/// ~90% of the display, clamped to 2x-6x.
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.current_display_mode(0) {
        Ok(display_mode) => {
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let max_scale_w = usable_w / GAME_WIDTH as i32;
            let max_scale_h = usable_h / GAME_HEIGHT as i32;

            // Use smaller scale to ensure both dimensions fit
            let scale = max_scale_w.min(max_scale_h);

            scale.clamp(2, 6) as u32
        }
        Err(_) => {
            println!("Warning: Could not detect monitor size, using 2x scale");
            2
        }
    }
}

/// Persist the confirmed racer name and launch timestamp
///
/// The billboard itself only reads the store; writing happens here, once a
/// race actually launches.
fn persist_racer_name(store: &mut FileSettingsStore, name: &str) {
    store.set(PLAYER_NAME_KEY, name);
    store.set(LAST_PLAYED_KEY, &chrono::Local::now().to_rfc3339());

    match store.flush() {
        Ok(()) => println!("✓ Saved racer name to: {}", store.path().display()),
        Err(e) => eprintln!("Warning: Failed to save settings: {}", e),
    }
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    // Calculate window scale based on monitor size
    let window_scale = calculate_window_scale(&video_subsystem);
    let window_width = GAME_WIDTH * window_scale;
    let window_height = GAME_HEIGHT * window_scale;

    println!("Monitor scale: {}x (window: {}x{})", window_scale, window_width, window_height);

    let window = video_subsystem
        .window("Kart Racer", window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Set logical size for automatic pixel-perfect scaling
    canvas.set_logical_size(GAME_WIDTH, GAME_HEIGHT).map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;

    // Keyboard text input feeds the name field
    video_subsystem.text_input().start();

    // Persisted settings (racer name from earlier sessions)
    let mut settings_store = FileSettingsStore::open(FileSettingsStore::default_path());
    if let Some(name) = settings_store.get(PLAYER_NAME_KEY) {
        println!("Welcome back, {}!", name);
    }

    // Menu components
    let backdrop = Backdrop::new(GAME_WIDTH, GAME_HEIGHT);
    let mut billboard = Billboard::new(&settings_store, GAME_WIDTH, GAME_HEIGHT);
    let mut launch_screen = LaunchScreen::new();
    let mut input_system = InputSystem::new();

    // The billboard's start event only signals; the loop below reacts by
    // reading the name, persisting it and starting the countdown
    let start_requested = Rc::new(Cell::new(false));
    let start_flag = Rc::clone(&start_requested);
    billboard.on_game_start.add(move || start_flag.set(true));

    println!("Controls:");
    println!("Type - Enter racer name");
    println!("Enter / click START GAME - Start a race");
    println!("ESC - Quit");

    'running: loop {
        // Handle events
        input_system.update_context(launch_screen.is_active());
        for action in input_system.poll_events(&mut event_pump) {
            match action {
                MenuAction::Quit => break 'running,
                MenuAction::AppendText(text) => billboard.handle_text_input(&text),
                MenuAction::Backspace => billboard.handle_backspace(),
                MenuAction::Confirm => billboard.activate_start(),
                MenuAction::Click(x, y) => {
                    billboard.handle_click(x, y);
                }
                MenuAction::MouseMove(x, y) => billboard.handle_mouse_move(x, y),
            }
        }

        // React to a start request raised by the billboard's observers
        if start_requested.replace(false) {
            let racer_name = billboard.racer_name();
            println!("Race requested by: {}", racer_name);
            persist_racer_name(&mut settings_store, &racer_name);
            launch_screen.trigger(racer_name);
        }

        // Countdown finished: back to the menu (the race itself lives in a
        // future milestone)
        if launch_screen.finished() {
            launch_screen.reset();
        }

        // Render back to front
        backdrop.paint(&mut canvas)?;
        billboard.render(&mut canvas)?;
        launch_screen.render(&mut canvas)?;

        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
