use ratatui::style::Color;

/// Default board width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default board height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 16;

/// Smallest playable board edge; the fixed starting layout needs the room.
pub const MIN_GRID_EDGE: u16 = 10;

/// Movement tick interval in milliseconds.
pub const DEFAULT_MOVE_INTERVAL_MS: u64 = 250;

/// Brick placement interval in milliseconds.
pub const DEFAULT_BRICK_INTERVAL_MS: u64 = 5000;

/// Frame pacing / input poll timeout in milliseconds.
pub const FRAME_POLL_MS: u64 = 16;

/// Head glyph per facing direction.
pub const GLYPH_HEAD_UP: &str = "▲";
pub const GLYPH_HEAD_DOWN: &str = "▼";
pub const GLYPH_HEAD_LEFT: &str = "◀";
pub const GLYPH_HEAD_RIGHT: &str = "▶";

/// Straight body segments.
pub const GLYPH_BODY_HORIZONTAL: &str = "═";
pub const GLYPH_BODY_VERTICAL: &str = "║";

/// Corner segments, named by the two sides they connect.
pub const GLYPH_CORNER_LEFT_UP: &str = "╝";
pub const GLYPH_CORNER_LEFT_DOWN: &str = "╗";
pub const GLYPH_CORNER_RIGHT_UP: &str = "╚";
pub const GLYPH_CORNER_RIGHT_DOWN: &str = "╔";

/// Tail stubs, pointing toward the segment ahead of the tail.
pub const GLYPH_TAIL_UP: &str = "╵";
pub const GLYPH_TAIL_DOWN: &str = "╷";
pub const GLYPH_TAIL_LEFT: &str = "╴";
pub const GLYPH_TAIL_RIGHT: &str = "╶";

pub const GLYPH_BRICK: &str = "▒";
pub const GLYPH_FOOD: &str = "●";

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub brick: Color,
    pub food: Color,
    pub border_fg: Color,
    pub hud_fg: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    brick: Color::Red,
    food: Color::Yellow,
    border_fg: Color::White,
    hud_fg: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};
