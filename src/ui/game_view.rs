use crate::game::{Board, Cell, GameOutcome, GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PURPLE: Color = Color::Rgb(160, 32, 240);
const ORANGE: Color = Color::Rgb(255, 165, 0);

pub fn player_color(player: Player) -> Color {
    match player {
        Player::Purple => PURPLE,
        Player::Orange => ORANGE,
    }
}

/// Status line text and the player whose color it is drawn in.
pub fn status_message(game_state: &GameState) -> (String, Option<Player>) {
    match game_state.outcome() {
        GameOutcome::Tie => ("It's a Tie!!!!".to_string(), None),
        GameOutcome::Winner(player) => (
            format!("{} Wins!", player.name().to_uppercase()),
            Some(player),
        ),
        GameOutcome::InProgress => {
            let player = game_state.turn().unwrap_or(Player::Purple);
            (
                format!("{}'s Turn!", player.name().to_uppercase()),
                Some(player),
            )
        }
    }
}

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    notice: &Option<String>,
) {
    let board_height = game_state.board().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Status
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Notice
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_status(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_notice(frame, notice, chunks[2]);
    render_controls(frame, game_state.is_terminal(), chunks[3]);
}

fn render_status(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let (text, player) = status_message(game_state);
    let color = player.map(player_color).unwrap_or(Color::White);

    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(status, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let board = game_state.board();
    let mut lines = vec![selector_line(game_state, selected_column)];

    let width = board.columns() * 3;
    lines.push(Line::from(format!("╔{}╗", "═".repeat(width))));

    // Top row first
    for row in (0..board.rows()).rev() {
        lines.push(row_line(board, row));
    }

    lines.push(Line::from(format!("╚{}╝", "═".repeat(width))));

    let numbers: String = (1..=board.columns()).map(|n| format!(" {} ", n)).collect();
    lines.push(Line::from(Span::styled(
        format!(" {} ", numbers),
        Style::default().fg(Color::DarkGray),
    )));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

/// Drop markers above each column. A column's marker is hidden once it is
/// full or the game is over.
fn selector_line(game_state: &GameState, selected_column: usize) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for col in 0..game_state.board().columns() {
        if game_state.is_terminal() || game_state.is_column_full(col) {
            spans.push(Span::raw("   "));
        } else if col == selected_column {
            let color = game_state.turn().map(player_color).unwrap_or(Color::Cyan);
            spans.push(Span::styled(
                " ▼ ",
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(" ▽ ", Style::default().fg(Color::DarkGray)));
        }
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

fn row_line(board: &Board, row: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("║")];
    for col in 0..board.columns() {
        let (symbol, color) = match board.get(col, row).unwrap_or_default() {
            Cell::Empty => (" . ", Color::DarkGray),
            Cell::Purple => (" ● ", PURPLE),
            Cell::Orange => (" ● ", ORANGE),
        };
        spans.push(Span::styled(symbol, Style::default().fg(color)));
    }
    spans.push(Span::raw("║"));
    Line::from(spans)
}

fn render_notice(frame: &mut Frame, notice: &Option<String>, area: Rect) {
    let text = notice.as_deref().unwrap_or("");
    let notice_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(notice_widget, area);
}

fn render_controls(frame: &mut Frame, game_over: bool, area: Rect) {
    let text = if game_over {
        "R: Play Again  |  Q: Quit"
    } else {
        "←/→: Move  |  Enter or 1-9: Drop  |  Q: Quit"
    };

    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(game_state: &GameState, selected_column: usize, notice: Option<String>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 22)).unwrap();
        terminal
            .draw(|f| render(f, game_state, selected_column, &notice))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_status_message_for_each_outcome() {
        let mut state = GameState::new();
        assert_eq!(
            status_message(&state),
            ("PURPLE's Turn!".to_string(), Some(Player::Purple))
        );

        state.apply_move(0).unwrap();
        assert_eq!(status_message(&state).0, "ORANGE's Turn!");

        for col in [1, 0, 1, 0, 1, 0] {
            state.apply_move(col).unwrap();
        }
        assert_eq!(
            status_message(&state),
            ("PURPLE Wins!".to_string(), Some(Player::Purple))
        );

        let mut strip = GameState::with_config(GameConfig {
            columns: 2,
            rows: 1,
            win_length: 2,
        });
        strip.apply_move(0).unwrap();
        strip.apply_move(1).unwrap();
        assert_eq!(status_message(&strip), ("It's a Tie!!!!".to_string(), None));
    }

    #[test]
    fn test_render_new_game() {
        let state = GameState::new();
        let screen = draw(&state, 3, None);

        assert!(screen.contains("PURPLE's Turn!"));
        assert!(screen.contains(" .  .  .  .  .  .  . "));
        assert!(screen.contains(" ▼ "));
        assert!(!screen.contains("Play Again"));
    }

    #[test]
    fn test_render_pieces_and_notice() {
        let mut state = GameState::new();
        state.apply_move(0).unwrap();
        state.apply_move(0).unwrap();
        let screen = draw(&state, 0, Some("Column 9 is out of range".to_string()));

        assert_eq!(screen.matches('●').count(), 2);
        assert!(screen.contains("Column 9 is out of range"));
    }

    #[test]
    fn test_render_game_over_hides_selectors() {
        let mut state = GameState::new();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            state.apply_move(col).unwrap();
        }
        let screen = draw(&state, 0, None);

        assert!(screen.contains("PURPLE Wins!"));
        assert!(screen.contains("Play Again"));
        assert!(!screen.contains('▼'));
        assert!(!screen.contains('▽'));
    }

    #[test]
    fn test_full_column_selector_hidden() {
        let mut state = GameState::new();
        for _ in 0..6 {
            state.apply_move(6).unwrap();
        }
        let line = selector_line(&state, 0);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text.matches('▼').count(), 1);
        assert_eq!(text.matches('▽').count(), 5);
    }
}
