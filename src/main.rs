use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use brick_snake::board::Board;
use brick_snake::config::{
    DEFAULT_BRICK_INTERVAL_MS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_MOVE_INTERVAL_MS,
    FRAME_POLL_MS, THEME_CLASSIC,
};
use brick_snake::error::{AppError, validate_grid};
use brick_snake::game::GameState;
use brick_snake::input::{self, GameInput};
use brick_snake::renderer::{self, Screen};

#[derive(Debug, Parser)]
#[command(name = "brick-snake", about = "Toroidal snake with growing brick walls")]
struct Cli {
    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Movement tick interval in milliseconds.
    #[arg(long = "move-interval", default_value_t = DEFAULT_MOVE_INTERVAL_MS)]
    move_interval_ms: u64,

    /// Brick placement interval in milliseconds.
    #[arg(long = "brick-interval", default_value_t = DEFAULT_BRICK_INTERVAL_MS)]
    brick_interval_ms: u64,

    /// RNG seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    validate_grid(cli.width, cli.height)?;

    install_panic_hook();

    let result = run(&cli);
    cleanup_terminal()?;
    result
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let mut terminal = setup_terminal()?;

    let move_interval = Duration::from_millis(cli.move_interval_ms);
    let brick_interval = Duration::from_millis(cli.brick_interval_ms);
    let theme = &THEME_CLASSIC;

    let mut state = new_session(cli);
    let mut screen = Screen::Start;
    let mut last_move = Instant::now();
    let mut last_brick = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, &state, screen, theme))?;

        if let Some(event) = input::poll_input(Duration::from_millis(FRAME_POLL_MS))? {
            match event {
                GameInput::Quit => break,
                GameInput::Confirm => match screen {
                    Screen::Start => {
                        screen = Screen::Running;
                        last_move = Instant::now();
                        last_brick = Instant::now();
                    }
                    Screen::Over => {
                        state = new_session(cli);
                        screen = Screen::Start;
                    }
                    _ => {}
                },
                GameInput::Pause => {
                    screen = match screen {
                        Screen::Running => Screen::Paused,
                        Screen::Paused => Screen::Running,
                        other => other,
                    };
                }
                GameInput::Direction(direction) => {
                    if screen == Screen::Running {
                        state = state.on_direction_input(direction);
                    }
                }
            }
        }

        if screen == Screen::Running {
            // When both cadences are due in the same pass, the brick lands
            // first and movement reacts to the updated field.
            if last_brick.elapsed() >= brick_interval {
                state = state.on_brick_tick();
                last_brick = Instant::now();
            }
            if last_move.elapsed() >= move_interval {
                state = state.on_movement_tick();
                last_move = Instant::now();
            }

            if state.is_terminal() {
                screen = Screen::Over;
            }
        }
    }

    Ok(())
}

fn new_session(cli: &Cli) -> GameState {
    let board = Board::new(cli.width, cli.height);
    match cli.seed {
        Some(seed) => GameState::new_with_seed(board, seed),
        None => GameState::new(board),
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show, LeaveAlternateScreen);
        default_hook(panic_info);
    }));
}
