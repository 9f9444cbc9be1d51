//! Main TUI application state and rendering

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::board::Square;
use crate::game::controller::{GameController, SessionEvent};
use crate::game::engine::SearchStats;
use crate::game::scoring::ScoreReporter;
use crate::game::session::{Phase, RenderModel};
use crate::tui::board_widget::{BoardGeometry, BoardWidget};
use crate::tui::Theme;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Format large numbers with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Who is driving the red pieces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Play,
    Watch,
}

/// What the user asked for with a key press or mouse click
enum UserAction {
    Quit,
    NewGame,
    Click(Square),
    MoveCursor(i8, i8),
}

/// Main TUI application
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    theme: Theme,
    cursor: Square,
    board_area: Rect,
}

impl TuiApp {
    /// Switches the terminal to raw mode on the alternate screen. The
    /// terminal is restored when the app is dropped.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            theme: Theme::default(),
            cursor: Square::new(5, 0),
            board_area: Rect::default(),
        })
    }

    /// Human versus computer. Arrow keys move the cursor, Enter or Space
    /// clicks the square under it, the mouse clicks directly.
    pub fn run_play<R: ScoreReporter>(
        &mut self,
        controller: &mut GameController<R>,
    ) -> io::Result<()> {
        loop {
            self.draw(controller, Mode::Play)?;

            let now = Instant::now();
            if controller.tick(now) {
                continue;
            }

            let timeout = controller
                .time_until_ai_move(now)
                .map_or(POLL_INTERVAL, |wait| wait.min(POLL_INTERVAL));

            match self.poll_action(timeout)? {
                Some(UserAction::Quit) => return Ok(()),
                Some(UserAction::NewGame) => {
                    controller.handle(SessionEvent::NewGame, Instant::now())
                }
                Some(UserAction::Click(square)) => {
                    self.cursor = square;
                    controller.handle(SessionEvent::CellClicked(square), Instant::now());
                }
                Some(UserAction::MoveCursor(d_row, d_col)) => {
                    if let Some(square) = self.cursor.offset(d_row, d_col) {
                        self.cursor = square;
                    }
                }
                None => {}
            }
        }
    }

    /// The engine plays red against the computer's black, one move every
    /// `delay`. `n` starts over and `q` quits.
    pub fn run_watch<R: ScoreReporter>(
        &mut self,
        controller: &mut GameController<R>,
        delay: Duration,
    ) -> io::Result<()> {
        let mut next_red_move_at = Instant::now() + delay;

        loop {
            self.draw(controller, Mode::Watch)?;

            let now = Instant::now();
            if controller.session().phase() == Phase::HumanTurn && now >= next_red_move_at {
                if let Some(red_move) = controller.play_best_human_move(now) {
                    debug!("watch: red plays {}", red_move);
                }
                continue;
            }
            if controller.tick(now) {
                next_red_move_at = Instant::now() + delay;
                continue;
            }

            match self.poll_action(POLL_INTERVAL)? {
                Some(UserAction::Quit) => return Ok(()),
                Some(UserAction::NewGame) => {
                    controller.handle(SessionEvent::NewGame, Instant::now());
                    next_red_move_at = Instant::now() + delay;
                }
                _ => {}
            }
        }
    }

    fn poll_action(&self, timeout: Duration) -> io::Result<Option<UserAction>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        let action = match event::read()? {
            Event::Key(KeyEvent { code, kind, .. }) if kind == KeyEventKind::Press => match code {
                KeyCode::Char('q') | KeyCode::Esc => Some(UserAction::Quit),
                KeyCode::Char('n') => Some(UserAction::NewGame),
                KeyCode::Enter | KeyCode::Char(' ') => Some(UserAction::Click(self.cursor)),
                KeyCode::Up => Some(UserAction::MoveCursor(-1, 0)),
                KeyCode::Down => Some(UserAction::MoveCursor(1, 0)),
                KeyCode::Left => Some(UserAction::MoveCursor(0, -1)),
                KeyCode::Right => Some(UserAction::MoveCursor(0, 1)),
                _ => None,
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => BoardGeometry::for_widget_area(self.board_area)
                .and_then(|geometry| geometry.square_at(column, row))
                .map(UserAction::Click),
            _ => None,
        };
        Ok(action)
    }

    fn draw<R: ScoreReporter>(
        &mut self,
        controller: &GameController<R>,
        mode: Mode,
    ) -> io::Result<()> {
        let model = controller.render_model();
        let stats = controller.search_stats();
        let generation = controller.session().generation();
        let cursor = match mode {
            Mode::Play => Some(self.cursor),
            Mode::Watch => None,
        };

        let theme = &self.theme;
        let mut board_area = self.board_area;
        self.terminal.draw(|frame| {
            let size = frame.area();

            let main_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(10), Constraint::Length(3)])
                .split(size);

            let board_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(main_chunks[0]);

            board_area = board_chunks[0];
            frame.render_widget(
                BoardWidget::new(&model, theme).cursor(cursor),
                board_chunks[0],
            );

            let info = Paragraph::new(info_text(&model, &stats, generation, mode))
                .block(Block::default().borders(Borders::ALL).title("Game Info"))
                .style(theme.text_style());
            frame.render_widget(info, board_chunks[1]);

            let status = Paragraph::new(status_text(&model, mode))
                .block(Block::default().borders(Borders::ALL).title("Status"))
                .style(theme.text_style());
            frame.render_widget(status, main_chunks[1]);
        })?;
        self.board_area = board_area;

        Ok(())
    }
}

fn info_text(model: &RenderModel, stats: &SearchStats, generation: u64, mode: Mode) -> String {
    let mut info_text = String::new();

    let mode_name = match mode {
        Mode::Play => "You (red) vs computer (black)",
        Mode::Watch => "Engine (red) vs computer (black)",
    };
    info_text.push_str(&format!("{}\n\n", mode_name));
    info_text.push_str(&format!("Game: {}\n", generation + 1));
    info_text.push_str(&format!("Turn: {}\n", model.turn));
    info_text.push_str(&format!("Position: {}\n\n", model.board.to_notation()));

    if let Some(selected) = model.selected {
        info_text.push_str(&format!("Selected: {}\n\n", selected));
    }

    info_text.push_str("Engine Stats:\n");
    info_text.push_str(&format!("  Strategy: {}\n", stats.strategy));
    info_text.push_str(&format!("  Depth: {}\n", stats.depth));
    if stats.positions_searched > 0 {
        info_text.push_str(&format!(
            "  Nodes: {}\n",
            format_number(stats.positions_searched as u64)
        ));
    } else {
        info_text.push_str("  Nodes: -\n");
    }
    if stats.cache_hits > 0 {
        info_text.push_str(&format!(
            "  Cache hits: {}\n",
            format_number(stats.cache_hits as u64)
        ));
    }
    match stats.last_search_duration {
        Some(duration) => info_text.push_str(&format!("  Time: {:.2}s\n", duration.as_secs_f64())),
        None => info_text.push_str("  Time: -\n"),
    }
    match stats.last_score {
        Some(score) => info_text.push_str(&format!("  Score: {}\n", score)),
        None => info_text.push_str("  Score: -\n"),
    }

    info_text
}

fn status_text(model: &RenderModel, mode: Mode) -> String {
    let keys = match (mode, model.phase) {
        (_, Phase::GameOver) => "n: new game, q: quit",
        (Mode::Play, _) => "arrows/mouse: pick, enter: click, n: new game, q: quit",
        (Mode::Watch, _) => "n: new game, q: quit",
    };
    format!("{}  ({})", model.status_line(), keys)
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
