use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{layout::Position, prelude::*, widgets::*};
use std::io::{self, Stdout};
use std::time::Duration;

use crate::config::{GlobalConfig, ThemeConfig};
use crate::store::{FileStore, StorageOperations, StoreError, TaskStatus};

use super::board::BoardState;
use super::command::{Command, Effect};
use super::input::InputMode;
use super::keymap;

/// Helper to convert hex color string to ratatui Color
fn hex_to_color(hex: &str) -> Color {
    ThemeConfig::parse_hex(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}

type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Input popup width including borders
const INPUT_POPUP_WIDTH: u16 = 60;
const INPUT_POPUP_HEIGHT: u16 = 3;

const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Result of running one command against the board and the store
#[derive(Debug, Default)]
pub struct Dispatch {
    /// Effects the board asked for, in execution order
    pub effects: Vec<Effect>,
    /// Storage failures hit while running those effects
    pub failures: Vec<StoreError>,
    pub quit: bool,
}

impl Dispatch {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Apply a command and run the side effects it requests.
///
/// Storage failures are logged and reported back but never abort the
/// session: the in-memory board stays authoritative.
pub fn dispatch(board: &mut BoardState, store: &dyn StorageOperations, command: Command) -> Dispatch {
    let effects = board.apply(command);
    let mut outcome = Dispatch::default();

    for effect in &effects {
        let result = match effect {
            Effect::Persist => board.save(store),
            Effect::Backup => board.backup(store).map(|()| tracing::info!("Backup written")),
            Effect::Quit => {
                outcome.quit = true;
                Ok(())
            }
        };
        if let Err(e) = result {
            tracing::warn!(error = ?e, "{:?} failed: {}", effect, e);
            outcome.failures.push(e);
        }
    }

    outcome.effects = effects;
    outcome
}

/// Application state (separate from terminal for borrow checker)
struct AppState {
    should_quit: bool,
    board: BoardState,
    store: Box<dyn StorageOperations>,
    theme: ThemeConfig,
    board_name: String,
}

pub struct App {
    terminal: Terminal,
    state: AppState,
}

impl App {
    pub fn new(config: &GlobalConfig) -> Result<Self> {
        let store = FileStore::new(&config.board_file, &config.backup_file);
        Self::with_store(config, Box::new(store))
    }

    pub fn with_store(config: &GlobalConfig, store: Box<dyn StorageOperations>) -> Result<Self> {
        // Load before touching the terminal
        let board = BoardState::initialize(store.as_ref(), config.title_char_limit);

        let board_name = config
            .board_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("board")
            .to_string();

        let terminal = setup_terminal()?;

        Ok(Self {
            terminal,
            state: AppState {
                should_quit: false,
                board,
                store,
                theme: config.theme.clone(),
                board_name,
            },
        })
    }

    pub fn run(&mut self) -> Result<()> {
        while !self.state.should_quit {
            self.draw()?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        tracing::info!("Quit requested");
        Ok(())
    }

    fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        let Some(command) = keymap::command_for_key(self.state.board.mode(), key) else {
            return;
        };
        let outcome = dispatch(&mut self.state.board, self.state.store.as_ref(), command);
        if outcome.quit {
            self.state.should_quit = true;
        }
    }

    fn draw(&mut self) -> Result<()> {
        let state = &self.state;
        self.terminal.draw(|frame| {
            let area = frame.area();
            Self::draw_board(state, frame, area);
        })?;

        Ok(())
    }

    fn draw_board(state: &AppState, frame: &mut Frame, area: Rect) {
        // Main layout: header, board, footer
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(area);

        // Header
        let header = Paragraph::new(format!(" kanterm · {} ", state.board_name))
            .style(Style::default().fg(hex_to_color(&state.theme.color_selected)).bold())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        // Board columns (To Do, In Progress, Done)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(chunks[1]);

        for (i, status) in TaskStatus::columns().iter().enumerate() {
            Self::draw_column(state, *status, frame, columns[i]);
        }

        // Footer
        let footer = Paragraph::new(keymap::help_text(state.board.mode()))
            .style(Style::default().fg(hex_to_color(&state.theme.color_dimmed)))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);

        if !state.board.mode().is_idle() {
            Self::draw_input_popup(state, frame, area);
        }
    }

    fn draw_column(state: &AppState, status: TaskStatus, frame: &mut Frame, area: Rect) {
        let theme = &state.theme;
        let column = state.board.column(status);
        let is_focused = state.board.focused() == status;

        let border_style = if is_focused {
            Style::default().fg(hex_to_color(&theme.color_selected))
        } else {
            Style::default().fg(hex_to_color(&theme.color_normal))
        };

        let title = format!(" {} ({}) ", column.title, column.len());
        let block = Block::default()
            .title(title)
            .title_style(Style::default().fg(hex_to_color(&theme.color_column_header)).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1));

        // Truncate titles to fit (char-safe for UTF-8)
        let max_title_len = area.width.saturating_sub(6) as usize;
        let items: Vec<ListItem> = column
            .tasks
            .iter()
            .map(|task| {
                let title: String = if task.title.chars().count() > max_title_len {
                    let truncated: String =
                        task.title.chars().take(max_title_len.saturating_sub(3)).collect();
                    format!("{}...", truncated)
                } else {
                    task.title.clone()
                };
                ListItem::new(title)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .style(Style::default().fg(hex_to_color(&theme.color_dimmed)))
            .highlight_style(Style::default().fg(hex_to_color(&theme.color_text)).bold())
            .highlight_symbol("> ")
            .highlight_spacing(HighlightSpacing::Always);

        // Only the focused column shows a selection; the list scrolls to keep it visible
        let mut list_state = ListState::default();
        if is_focused && !column.is_empty() {
            list_state.select(Some(state.board.cursor()));
        }
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn draw_input_popup(state: &AppState, frame: &mut Frame, area: Rect) {
        let theme = &state.theme;
        let input = state.board.input();
        let popup_area = centered_rect_fixed(INPUT_POPUP_WIDTH, INPUT_POPUP_HEIGHT, area);

        let title = match state.board.mode() {
            InputMode::Editing => " Edit task ",
            _ => " New task ",
        };
        let counter = format!(" {}/{} ", input.len(), input.char_limit());

        let block = Block::default()
            .title(title)
            .title_bottom(Line::from(counter).right_aligned())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(hex_to_color(&theme.color_popup_border)))
            .padding(Padding::horizontal(1));
        let inner = block.inner(popup_area);

        let (visible, caret) = input_window(input.value(), input.cursor(), inner.width as usize);
        let content = if input.is_empty() {
            Line::from(Span::styled(
                "Task...",
                Style::default().fg(hex_to_color(&theme.color_dimmed)).italic(),
            ))
        } else {
            Line::from(visible)
        };

        frame.render_widget(Clear, popup_area);
        frame.render_widget(Paragraph::new(content).block(block), popup_area);

        frame.set_cursor_position(Position::new(inner.x + caret as u16, inner.y));
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}

/// Enter raw mode and the alternate screen, restoring the terminal if
/// either step fails
fn setup_terminal() -> Result<Terminal> {
    let terminal = guarded_setup(
        enable_raw_mode,
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )?;
    Ok(terminal)
}

/// Run `enter`, then `build`; `restore` runs only when `build` fails
fn guarded_setup<T>(
    enter: impl FnOnce() -> io::Result<()>,
    build: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    enter()?;
    build().inspect_err(|_| restore())
}

/// Slice of `value` that fits in `width` columns with the caret visible,
/// and the caret's column within that slice.
///
/// The line scrolls only once the caret would pass the right edge.
fn input_window(value: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let offset = (cursor + 1).saturating_sub(width);
    let visible = value.chars().skip(offset).take(width).collect();
    (visible, cursor - offset)
}

/// Create a centered popup with fixed width and height, capped to the area
fn centered_rect_fixed(fixed_width: u16, fixed_height: u16, r: Rect) -> Rect {
    // Cap to terminal size minus some margin
    let width = fixed_width.min(r.width.saturating_sub(4));
    let height = fixed_height.min(r.height);

    let horizontal_margin = r.width.saturating_sub(width) / 2;
    let vertical_margin = r.height.saturating_sub(height) / 2;

    Rect {
        x: r.x + horizontal_margin,
        y: r.y + vertical_margin,
        width,
        height,
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
