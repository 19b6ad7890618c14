use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::entities::GameState;

/// Semantic game actions that can be triggered by input. The loop applies
/// these between frames; input never mutates session state directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    Fire,
    /// Start or restart a session; only emitted outside Playing.
    Start,
    Quit,
}

/// Tracks keys that can be held down for continuous input.
#[derive(Debug, Default)]
struct KeyState {
    left: bool,
    right: bool,
    fire: bool,
}

/// Polls crossterm events and translates them into game actions.
#[derive(Default)]
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains all pending events without blocking. Call once per frame
    /// before `get_actions`.
    pub fn poll_events(&mut self, game_state: &GameState) -> color_eyre::Result<()> {
        self.oneshot_actions.clear();

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => {
                    self.handle_key_event(key_event, game_state);
                }
                Event::Mouse(_) => {
                    // Mouse events currently ignored
                }
                Event::Resize(_, _) => {
                    // The renderer re-projects from the frame area every draw
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, game_state: &GameState) {
        match key_event.kind {
            KeyEventKind::Press => {
                self.handle_key_press(key_event, game_state);
            }
            KeyEventKind::Release => {
                self.handle_key_release(key_event.code);
            }
            _ => {}
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, game_state: &GameState) {
        // Quit keys work in any state
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        if *game_state == GameState::Playing {
            // Space serves as the fire key during play
            match key_event.code {
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    self.key_state.left = true;
                    self.key_state.right = false;
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    self.key_state.right = true;
                    self.key_state.left = false;
                }
                KeyCode::Char(' ') => {
                    self.key_state.fire = true;
                }
                _ => {}
            }
        } else if key_event.code == KeyCode::Char(' ') {
            // The same key starts/restarts from any non-playing state; all
            // other input is ignored there.
            self.oneshot_actions.push(InputAction::Start);
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = false;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = false;
            }
            KeyCode::Char(' ') => {
                self.key_state.fire = false;
            }
            _ => {}
        }
    }

    /// Returns all actions for this frame, one-shot actions first. Must be
    /// called after `poll_events`.
    pub fn get_actions(&self, game_state: &GameState) -> Vec<InputAction> {
        let mut actions = Vec::new();
        actions.extend_from_slice(&self.oneshot_actions);

        // Held keys only act while playing
        if *game_state == GameState::Playing {
            if self.key_state.left {
                actions.push(InputAction::MoveLeft);
            }
            if self.key_state.right {
                actions.push(InputAction::MoveRight);
            }
            if self.key_state.fire {
                actions.push(InputAction::Fire);
            }
        }

        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_starts_outside_playing() {
        for state in [GameState::NotStarted, GameState::GameOver, GameState::GameWon] {
            let mut input = InputManager::new();
            input.handle_key_event(press(KeyCode::Char(' ')), &state);
            assert_eq!(input.get_actions(&state), vec![InputAction::Start]);
        }
    }

    #[test]
    fn test_space_fires_while_playing() {
        let mut input = InputManager::new();
        input.handle_key_event(press(KeyCode::Char(' ')), &GameState::Playing);
        assert_eq!(
            input.get_actions(&GameState::Playing),
            vec![InputAction::Fire]
        );
    }

    #[test]
    fn test_movement_ignored_outside_playing() {
        let mut input = InputManager::new();
        input.handle_key_event(press(KeyCode::Left), &GameState::GameOver);
        assert!(input.get_actions(&GameState::GameOver).is_empty());
    }

    #[test]
    fn test_opposite_directions_are_exclusive() {
        let mut input = InputManager::new();
        input.handle_key_event(press(KeyCode::Left), &GameState::Playing);
        input.handle_key_event(press(KeyCode::Right), &GameState::Playing);
        assert_eq!(
            input.get_actions(&GameState::Playing),
            vec![InputAction::MoveRight]
        );
    }

    #[test]
    fn test_quit_works_in_any_state() {
        for state in [
            GameState::NotStarted,
            GameState::Playing,
            GameState::GameOver,
            GameState::GameWon,
        ] {
            let mut input = InputManager::new();
            input.handle_key_event(press(KeyCode::Char('q')), &state);
            assert!(input.get_actions(&state).contains(&InputAction::Quit));
        }
    }
}
