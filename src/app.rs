use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Duration;

use crate::entities::GameState;
use crate::game::Game;
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};
use crate::sprites::SpriteStore;

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    game: Game,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    sprites: SpriteStore,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Construct a new instance of [`App`]. The session starts in the
    /// "press space to start" state.
    pub fn new() -> Self {
        Self {
            running: true,
            game: Game::new(),
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
            sprites: SpriteStore::load(),
        }
    }

    /// Run the application's main loop: draw, poll input, apply actions,
    /// tick the simulation, sleep to pace the frame rate. The loop is the
    /// single writer of session state; input only produces intents.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            terminal.draw(|frame| {
                let view = RenderView {
                    game_state: self.game.state,
                    player: &self.game.player,
                    enemies: &self.game.enemies,
                    bullets: &self.game.bullets,
                    area: frame.area(),
                };
                self.renderer.render(frame, &view, &mut self.sprites);
            })?;

            self.input_manager.poll_events(&self.game.state)?;
            let actions = self.input_manager.get_actions(&self.game.state);
            self.process_actions(&actions);

            if self.game.state == GameState::Playing {
                self.game.update();
            }

            // Small sleep to maintain ~60 FPS and prevent CPU spinning
            std::thread::sleep(Duration::from_millis(16));
        }
        Ok(())
    }

    /// Apply this frame's input intents to the session.
    fn process_actions(&mut self, actions: &[InputAction]) {
        for action in actions {
            match action {
                InputAction::Quit => {
                    self.running = false;
                }
                InputAction::Start => {
                    self.game.restart();
                }
                InputAction::MoveLeft => {
                    self.game.player.move_left();
                }
                InputAction::MoveRight => {
                    self.game.player.move_right();
                }
                InputAction::Fire => {
                    self.game.fire();
                }
            }
        }
    }
}
