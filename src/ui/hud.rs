use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the status bar and returns the centered play area the game board
/// should be drawn into (grid plus a one-cell border on each side).
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [field_row, bar_row] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    let line = Line::from(vec![
        Span::styled(
            format!(" Score: {}", state.score),
            Style::new().fg(theme.hud_fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   Size: {}", state.snake.len()),
            Style::new().fg(theme.hud_fg),
        ),
        Span::styled(
            format!("   Bricks: {}", state.bricks.len()),
            Style::new().fg(theme.menu_footer),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), bar_row);

    centered_play_area(field_row, state)
}

/// Centers a rect sized for the board plus its border inside `area`,
/// clamping to whatever space the terminal actually has.
fn centered_play_area(area: Rect, state: &GameState) -> Rect {
    let board = state.board();
    let want_width = board.width.saturating_add(2).min(area.width);
    let want_height = board.height.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - want_width) / 2,
        y: area.y + (area.height - want_height) / 2,
        width: want_width,
        height: want_height,
    }
}
