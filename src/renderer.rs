use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use ratatui_image::StatefulImage;

use crate::entities::{
    Bullet, Enemy, GameState, Hitbox, Player, WORLD_HEIGHT, WORLD_WIDTH,
};
use crate::sprites::SpriteStore;

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub bullets: &'a [Bullet],
    pub area: Rect,
}

/// Projects 800x600 world coordinates onto the current terminal area.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    area: Rect,
}

impl Viewport {
    fn new(area: Rect) -> Self {
        Self { area }
    }

    fn cell(&self, x: f32, y: f32) -> (u16, u16) {
        let cx = (x / WORLD_WIDTH * self.area.width as f32) as u16;
        let cy = (y / WORLD_HEIGHT * self.area.height as f32) as u16;
        (
            self.area.x + cx.min(self.area.width.saturating_sub(1)),
            self.area.y + cy.min(self.area.height.saturating_sub(1)),
        )
    }

    /// Terminal rectangle covering a world hitbox, clipped to the area.
    fn rect(&self, hitbox: &Hitbox) -> Rect {
        let (x, y) = self.cell(hitbox.x, hitbox.y);
        let width = (hitbox.width / WORLD_WIDTH * self.area.width as f32).round() as u16;
        let height = (hitbox.height / WORLD_HEIGHT * self.area.height as f32).round() as u16;
        Rect {
            x,
            y,
            width: width.max(1),
            height: height.max(1),
        }
        .intersection(self.area)
    }
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer;

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView, sprites: &mut SpriteStore) {
        match view.game_state {
            GameState::NotStarted => self.render_start_prompt(frame, view),
            GameState::Playing => self.render_game(frame, view, sprites),
            GameState::GameOver => self.render_session_end(frame, view, "Game Over...", Color::Red),
            GameState::GameWon => self.render_session_end(frame, view, "Game Won!", Color::Green),
        }
    }

    /// Renders the active gameplay screen
    fn render_game(&self, frame: &mut Frame, view: &RenderView, sprites: &mut SpriteStore) {
        let viewport = Viewport::new(view.area);

        // Render enemies: image sprite when the variant loaded, glyph otherwise
        for enemy in view.enemies {
            let enemy_area = viewport.rect(&enemy.hitbox());
            if enemy_area.is_empty() {
                continue;
            }

            if let Some(protocol) = sprites.variant_mut(enemy.variant) {
                frame.render_stateful_widget(StatefulImage::default(), enemy_area, protocol);
            } else {
                let color = match enemy.variant % 5 {
                    0 => Color::Magenta,
                    1 => Color::Green,
                    2 => Color::Cyan,
                    3 => Color::Red,
                    _ => Color::White,
                };
                frame.render_widget(
                    Paragraph::new(enemy.glyph())
                        .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    enemy_area,
                );
            }
        }

        // Render player
        let player_area = viewport.rect(&view.player.hitbox());
        if !player_area.is_empty() {
            frame.render_widget(
                Paragraph::new(view.player.glyph()).style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                player_area,
            );
        }

        // Render bullets with direct buffer access
        let buffer = frame.buffer_mut();
        for bullet in view.bullets {
            if bullet.y < 0.0 {
                continue;
            }
            let (x, y) = viewport.cell(bullet.x, bullet.y);
            buffer.set_string(x, y, "|", Style::default().fg(Color::Blue));
        }

        // Stats overlay at the top
        let stats = Line::from(vec![
            Span::styled("Enemies: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.enemies.len()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let stats_area = Rect {
            x: view.area.x + 1,
            y: view.area.y,
            width: view.area.width.saturating_sub(2),
            height: 1,
        };

        frame.render_widget(Paragraph::new(stats), stats_area);

        // Controls hint at bottom
        let controls = Line::from(vec![Span::styled(
            "[A-D/Arrows: Move] [Space: Fire] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);

        let controls_area = Rect {
            x: view.area.x + 1,
            y: view.area.y + view.area.height.saturating_sub(1),
            width: view.area.width.saturating_sub(2),
            height: 1,
        };

        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    /// Renders the pre-game banner
    fn render_start_prompt(&self, frame: &mut Frame, view: &RenderView) {
        let text = vec![
            Line::from(""),
            Line::from("NINJA INVADERS").centered().green().bold(),
            Line::from(""),
            Line::from("Hit the space bar to start").centered().white(),
            Line::from("Press Q to quit").centered().dark_gray(),
        ];

        frame.render_widget(
            Paragraph::new(text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            view.area,
        );
    }

    /// Renders the game over / game won screen
    fn render_session_end(
        &self,
        frame: &mut Frame,
        view: &RenderView,
        banner: &'static str,
        color: Color,
    ) {
        let text = vec![
            Line::from(""),
            Line::styled(banner, Style::default().fg(color).add_modifier(Modifier::BOLD)).centered(),
            Line::from(""),
            Line::from("Press space to restart").centered().white(),
            Line::from("Press Q to quit").centered().dark_gray(),
        ];

        frame.render_widget(
            Paragraph::new(text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .alignment(Alignment::Center),
            view.area,
        );
    }
}
