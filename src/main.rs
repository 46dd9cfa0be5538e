use anyhow::{Context, Result};
use log::info;
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use owlet_runner::engine::game_loop::GameLoop;
use owlet_runner::engine::input::InputManager;
use owlet_runner::engine::renderer::LogTarget;
use owlet_runner::game::characters::{AnimatorConfig, Character, ControlState};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Owlet Runner...");

    let mut character =
        Character::owlet(AnimatorConfig::default()).context("Invalid character animation setup")?;
    let mut input = InputManager::new();
    let mut clock = GameLoop::new();
    let mut target = LogTarget::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Owlet Runner")
        .with_inner_size(winit::dpi::LogicalSize::new(
            character.field.width,
            character.field.height,
        ))
        .with_resizable(false)
        .build(&event_loop)
        .context("Failed to create window")?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Keys released while unfocused never reach us
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if event.physical_key == PhysicalKey::Code(KeyCode::KeyP)
                    && event.state == ElementState::Pressed
                    && !event.repeat
                {
                    clock.toggle_pause();
                }
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let dt = clock.begin_frame();

                if input.quit_requested() {
                    info!("Quit requested, shutting down...");
                    elwt.exit();
                    return;
                }

                character.tick(ControlState::from_input(input.player()), dt);
                character.render(&mut target);
                input.update();

                if clock.frame_count() % 600 == 0 {
                    info!(
                        "{:.0} fps, {} sprites drawn, {} at ({:.0}, {:.0})",
                        clock.fps(),
                        target.draw_count(),
                        character.state().name(),
                        character.position.x,
                        character.position.y
                    );
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
