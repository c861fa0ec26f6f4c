use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Cell, CollisionType, GameOverReason, Phase, Scheduler, Session};
use crate::metrics::GameMetrics;

/// Size of the game-over popup, borders included
const GAME_OVER_WIDTH: u16 = 56;
const GAME_OVER_HEIGHT: u16 = 9;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render<S: Scheduler>(
        &self,
        frame: &mut Frame,
        session: &Session<S>,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(session, metrics), chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        frame.render_widget(self.render_grid(session), game_area);

        // The final board stays visible around the popup
        if session.phase() == Phase::GameOver {
            let popup = centered_rect(GAME_OVER_WIDTH, GAME_OVER_HEIGHT, game_area);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(session), popup);
        }

        frame.render_widget(self.render_controls(session.phase()), chunks[2]);
    }

    fn render_grid<S: Scheduler>(&self, session: &Session<S>) -> Paragraph<'_> {
        let state = session.state();
        let head = state.snake.head();
        let mut lines = Vec::with_capacity(state.grid.rows());

        for y in 0..state.grid.rows() {
            let mut spans = Vec::with_capacity(state.grid.cols());

            for x in 0..state.grid.cols() {
                let cell = Cell::new(x as i32, y as i32);

                let span = if cell == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.occupies(cell) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if state.food == Some(cell) {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        let (title, border) = match session.phase() {
            Phase::Idle => (" Snake - press Space to start ", Color::White),
            Phase::Paused => (" PAUSED ", Color::Yellow),
            _ => (" Snake ", Color::White),
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats<S: Scheduler>(
        &self,
        session: &Session<S>,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let mut spans = vec![
            Span::styled("Score: ", label),
            Span::styled(
                session.score().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(session.best_score().to_string(), value),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(session.speed().level().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ];
        if session.is_muted() {
            spans.push(Span::raw("    "));
            spans.push(Span::styled("MUTED", Style::default().fg(Color::DarkGray)));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_game_over<S: Scheduler>(&self, session: &Session<S>) -> Paragraph<'_> {
        let reason = match session.game_over_reason() {
            Some(GameOverReason::Collision(CollisionType::Wall)) => "Hit the wall",
            Some(GameOverReason::Collision(CollisionType::SelfCollision)) => "Bit your own tail",
            Some(GameOverReason::BoardFilled) => "The board is full!",
            None => "",
        };

        let text = vec![
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(reason, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    session.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    session.best_score().to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again, ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to reset or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, phase: Phase) -> Paragraph<'_> {
        let toggle = match phase {
            Phase::Running => " pause | ",
            Phase::Paused => " resume | ",
            Phase::Idle | Phase::GameOver => " start | ",
        };

        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(toggle),
            Span::styled("R", Style::default().fg(Color::Cyan)),
            Span::raw(" restart | "),
            Span::styled("+/-", Style::default().fg(Color::Cyan)),
            Span::raw(" speed | "),
            Span::styled("M", Style::default().fg(Color::Cyan)),
            Span::raw(" mute | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
