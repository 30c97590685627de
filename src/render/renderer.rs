use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, Position, Rgb, Theme};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[0])[1];

        let grid = self.render_grid(game_area, state);
        frame.render_widget(grid, game_area);

        let controls = self.render_controls(chunks[1]);
        frame.render_widget(controls, chunks[1]);
    }

    fn render_grid(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let background: Color = self.theme.background.into();
        let mut lines = Vec::new();

        for y in 0..state.grid.height {
            let mut spans = Vec::new();

            for x in 0..state.grid.width {
                let pos = Position::new(x, y);

                let cell = if pos == state.snake.head() {
                    // Snake head - same color as the body, but bold
                    Span::styled(
                        "██",
                        Style::default()
                            .fg(self.theme.snake.into())
                            .bg(background)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.cells.contains(&pos) {
                    // Snake body
                    Span::styled(
                        "██",
                        Style::default().fg(self.theme.snake.into()).bg(background),
                    )
                } else if pos == state.food.position {
                    // Food
                    Span::styled(
                        "██",
                        Style::default().fg(self.theme.food.into()).bg(background),
                    )
                } else {
                    // Empty cell
                    Span::styled("  ", Style::default().bg(background))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(self.theme.border.into()))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}
