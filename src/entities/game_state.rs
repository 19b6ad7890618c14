/// Which branch of the game loop runs this frame. Exactly one state holds at
/// any time; Playing is re-enterable from either terminal state via restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    Playing,
    GameOver,
    GameWon,
}
