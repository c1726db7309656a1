use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::board::{Board, Position};
use crate::config::{
    GLYPH_BODY_HORIZONTAL, GLYPH_BODY_VERTICAL, GLYPH_BRICK, GLYPH_CORNER_LEFT_DOWN,
    GLYPH_CORNER_LEFT_UP, GLYPH_CORNER_RIGHT_DOWN, GLYPH_CORNER_RIGHT_UP, GLYPH_FOOD,
    GLYPH_HEAD_DOWN, GLYPH_HEAD_LEFT, GLYPH_HEAD_RIGHT, GLYPH_HEAD_UP, GLYPH_TAIL_DOWN,
    GLYPH_TAIL_LEFT, GLYPH_TAIL_RIGHT, GLYPH_TAIL_UP, Theme,
};
use crate::game::GameState;
use crate::input::Direction;
use crate::snake::{Turn, classify_turn};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_outcome_menu, render_pause_menu, render_start_menu};

/// What the harness is currently showing on top of the game state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    Start,
    Running,
    Paused,
    Over,
}

/// Renders one full frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, screen: Screen, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, theme);

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_bricks(frame, inner, state, theme);
    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match screen {
        Screen::Start => render_start_menu(frame, play_area, theme),
        Screen::Paused => render_pause_menu(frame, play_area, theme),
        Screen::Over => render_outcome_menu(
            frame,
            play_area,
            state.score,
            state.snake.len(),
            state.outcome(),
            theme,
        ),
        Screen::Running => {}
    }
}

fn render_bricks(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for brick in state.bricks.iter() {
        let Some((x, y)) = logical_to_terminal(inner, state.board(), brick) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_BRICK, Style::new().fg(theme.brick));
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some(food) = state.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, state.board(), food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let board = state.board();
    let segments: Vec<Position> = state.snake.segments().copied().collect();

    let buffer = frame.buffer_mut();
    for (index, segment) in segments.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, board, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                head_glyph(state.snake.direction()),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else if index == segments.len() - 1 {
            buffer.set_string(
                x,
                y,
                tail_glyph(board, *segment, segments[index - 1]),
                Style::new().fg(theme.snake_tail),
            );
        } else {
            buffer.set_string(
                x,
                y,
                body_glyph(board, segments[index - 1], *segment, segments[index + 1]),
                Style::new().fg(theme.snake_body),
            );
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_HEAD_UP,
        Direction::Down => GLYPH_HEAD_DOWN,
        Direction::Left => GLYPH_HEAD_LEFT,
        Direction::Right => GLYPH_HEAD_RIGHT,
    }
}

/// Picks the glyph for an interior segment: a corner piece when the triple
/// around it bends, a straight piece otherwise.
fn body_glyph(board: Board, previous: Position, current: Position, next: Position) -> &'static str {
    match classify_turn(board, previous, current, next) {
        Some(Turn::RightUp | Turn::DownLeft) => GLYPH_CORNER_LEFT_UP,
        Some(Turn::RightDown | Turn::UpLeft) => GLYPH_CORNER_LEFT_DOWN,
        Some(Turn::LeftUp | Turn::DownRight) => GLYPH_CORNER_RIGHT_UP,
        Some(Turn::LeftDown | Turn::UpRight) => GLYPH_CORNER_RIGHT_DOWN,
        None => {
            let (dx, _) = board.adjacent_delta(previous, current);
            if dx != 0 {
                GLYPH_BODY_HORIZONTAL
            } else {
                GLYPH_BODY_VERTICAL
            }
        }
    }
}

/// The tail stub points toward the segment ahead of it.
fn tail_glyph(board: Board, tail: Position, ahead: Position) -> &'static str {
    match board.adjacent_delta(tail, ahead) {
        (_, -1) => GLYPH_TAIL_UP,
        (_, 1) => GLYPH_TAIL_DOWN,
        (-1, _) => GLYPH_TAIL_LEFT,
        _ => GLYPH_TAIL_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, board: Board, position: Position) -> Option<(u16, u16)> {
    if position.x < 0
        || position.y < 0
        || position.x >= i32::from(board.width)
        || position.y >= i32::from(board.height)
    {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
