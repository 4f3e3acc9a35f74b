use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::game::{GameConfig, GameState, MoveError, Status};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

/// Settings for the interactive front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Start a new game this many seconds after one ends. 0 disables.
    pub auto_reset_secs: u64,
    /// Where to write logs while the terminal UI owns the screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

pub struct App {
    game_config: GameConfig,
    ui_config: UiConfig,
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    finished_at: Option<Instant>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            game_config: config.game,
            ui_config: config.ui.clone(),
            game_state: GameState::with_config(&config.game),
            selected_column: config.game.width / 2, // Start in middle
            should_quit: false,
            message: None,
            finished_at: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                self.drop_piece(column);
            }
            KeyCode::Char('r') => {
                self.reset();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Auto-reset a finished game once its delay has passed
    fn tick(&mut self, now: Instant) {
        if self.ui_config.auto_reset_secs == 0 {
            return;
        }
        let delay = Duration::from_secs(self.ui_config.auto_reset_secs);
        if let Some(finished_at) = self.finished_at {
            if now.duration_since(finished_at) >= delay {
                self.reset();
                self.message = Some("New game started!".to_string());
            }
        }
    }

    fn reset(&mut self) {
        self.game_state = GameState::with_config(&self.game_config);
        self.selected_column = self.game_config.width / 2;
        self.finished_at = None;
    }

    /// Drop a piece for the active player in `column`
    fn drop_piece(&mut self, column: usize) {
        match self.game_state.apply_move(column) {
            Ok(outcome) => {
                self.selected_column = outcome.column;
                match outcome.status {
                    Status::InProgress => {}
                    Status::Won(player) => {
                        self.message = Some(format!("{player} wins!"));
                        self.finished_at = Some(Instant::now());
                    }
                    Status::Tied => {
                        self.message = Some("It's a tie!".to_string());
                        self.finished_at = Some(Instant::now());
                    }
                }
            }
            Err(MoveError::ColumnFull { column }) => {
                self.message = Some(format!("Column {} is full!", column + 1));
            }
            Err(MoveError::InvalidColumn { column, width }) => {
                self.message = Some(format!(
                    "There is no column {}, pick 1 to {width}.",
                    column.saturating_add(1)
                ));
            }
            Err(MoveError::InvalidState { .. }) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Player};
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_selector_stays_on_board() {
        let mut app = App::default();
        assert_eq!(app.selected_column, 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state().cell_at(5, 3), Cell::Owned(Player::One));
        assert_eq!(app.game_state().active_player(), Player::Two);
    }

    #[test]
    fn test_digit_keys_drop_directly() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.game_state().cell_at(5, 0), Cell::Owned(Player::One));
        assert_eq!(app.selected_column, 0);

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.message.as_deref(), Some("There is no column 9, pick 1 to 7."));
        assert_eq!(app.game_state().move_count(), 1);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::default();
        for _ in 0..6 {
            press(&mut app, KeyCode::Char('2'));
        }
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.message.as_deref(), Some("Column 2 is full!"));
    }

    #[test]
    fn test_win_then_restart() {
        let mut app = App::default();
        for key in ['4', '5', '4', '5', '4', '5', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.game_state().status(), Status::Won(Player::One));
        assert_eq!(app.message.as_deref(), Some("Player 1 wins!"));

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.message.as_deref(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state().status(), Status::InProgress);
        assert_eq!(app.game_state().move_count(), 0);
    }

    #[test]
    fn test_auto_reset_after_delay() {
        let config = AppConfig {
            ui: UiConfig {
                auto_reset_secs: 2,
                log_file: None,
            },
            ..AppConfig::default()
        };
        let mut app = App::new(&config);
        for key in ['4', '5', '4', '5', '4', '5', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        let finished_at = app.finished_at.expect("game should have finished");

        app.tick(finished_at + Duration::from_secs(1));
        assert!(app.game_state().is_terminal());

        app.tick(finished_at + Duration::from_secs(2));
        assert_eq!(app.game_state().status(), Status::InProgress);
        assert!(app.finished_at.is_none());
    }

    #[test]
    fn test_no_auto_reset_when_disabled() {
        let mut app = App::default();
        for key in ['4', '5', '4', '5', '4', '5', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        let finished_at = app.finished_at.unwrap();
        app.tick(finished_at + Duration::from_secs(3600));
        assert!(app.game_state().is_terminal());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_active_player() {
        let app = App::default();
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Player 1 to move"));
        assert!(screen.contains("Connect Four"));
    }
}
