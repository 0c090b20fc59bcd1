//! Stateless UI rendering for the game screen.

use prs_rules::{Move, MoveSource, PendingResult};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::App;
use std::cmp::Ordering;

/// Renders the whole screen.
pub fn draw<S: MoveSource>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Computer header
            Constraint::Length(2), // Computer text
            Constraint::Length(1), // Player header
            Constraint::Length(9), // Buttons
            Constraint::Length(1), // Stats header
            Constraint::Length(2), // Stats
            Constraint::Min(3),    // Status
        ])
        .split(area);

    let title = Paragraph::new("PRS EXTREME")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if app.is_over() {
        draw_game_over(frame, chunks[1].union(chunks[4]), app);
    } else {
        draw_title_bar(frame, chunks[1], "Computer Chooses:");
        draw_computer(frame, chunks[2], app);

        draw_title_bar(frame, chunks[3], "Player Chooses:");
        draw_buttons(frame, chunks[4], app);
    }

    draw_title_bar(frame, chunks[5], "Stats");
    draw_stats(frame, chunks[6], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[7]);

    let state = app.engine().state();
    if state.result_pending() {
        draw_result(frame, area, &state.pending_result());
    }
}

fn draw_title_bar(frame: &mut Frame, area: Rect, title: &str) {
    let bar = Paragraph::new(title)
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .alignment(Alignment::Center);
    frame.render_widget(bar, area);
}

fn draw_computer<S: MoveSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let state = app.engine().state();
    let text = if state.result_pending() {
        state.computer_choice().label().to_string()
    } else {
        format!("... I'm going with... {} ...", state.computer_prediction())
    };
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_buttons<S: MoveSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let area = center_horizontally(area, 30);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 3])
        .split(area);

    let selected = app.engine().state().player_choice();
    for (row, choice) in rows.iter().zip(Move::ALL) {
        draw_button(frame, *row, choice, selected == Some(choice), app.cursor() == choice);
    }
}

fn draw_button(frame: &mut Frame, area: Rect, choice: Move, selected: bool, focused: bool) {
    let bg = if selected { Color::Blue } else { Color::Red };
    let mut style = Style::default().fg(Color::White).bg(bg);
    if focused {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }

    let label = format!("{} {}", symbol(choice), choice.label());
    let button = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}

fn symbol(choice: Move) -> &'static str {
    match choice {
        Move::Paper => "[P]",
        Move::Rock => "[R]",
        Move::Scissors => "[S]",
    }
}

fn draw_stats<S: MoveSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let board = app.engine().scoreboard();
    let rounds = match app.max_rounds() {
        Some(max) => format!("Rounds: {} / {}", board.rounds, max),
        None => format!("Rounds: {}", board.rounds),
    };
    let lines = vec![
        Line::from(format!(
            "Player: {}    Tied: {}    Computer: {}",
            board.player, board.tied, board.computer
        )),
        Line::from(format!("{}    Computer Lied: {}", rounds, board.computer_lied)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Replaces the play area once the round limit is reached.
fn draw_game_over<S: MoveSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let board = app.engine().scoreboard();
    let verdict = match board.player.cmp(&board.computer) {
        Ordering::Greater => "You won the match!",
        Ordering::Less => "The computer won the match.",
        Ordering::Equal => "The match is drawn.",
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            verdict,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Final score - Player: {}  Tied: {}  Computer: {}",
            board.player, board.tied, board.computer
        )),
        Line::from(format!(
            "The computer lied {} of {} rounds ({:.0}%)",
            board.computer_lied,
            board.rounds,
            board.lie_rate()
        )),
    ];
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("Game Over").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn draw_result(frame: &mut Frame, area: Rect, result: &PendingResult) {
    let popup = center_rect(area, 34, 9);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::styled(
            result.outcome().message(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Player chose: {}", result.player_label())),
        Line::from(format!("Computer chose: {}", result.computer())),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", Style::default().fg(Color::Cyan))),
    ];
    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("Result").borders(Borders::ALL));
    frame.render_widget(dialog, popup);
}

fn center_horizontally(area: Rect, width: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area)[1]
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    center_horizontally(vert[1], width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use prs_rules::{RoundEngine, ScriptedMoves};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App<ScriptedMoves>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 32)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_game_over_replaces_play_area() {
        let mut app = App::new(
            RoundEngine::new(ScriptedMoves::new([Move::Rock, Move::Scissors])),
            Some(1),
        );
        app.handle_key(KeyCode::Char('r'));
        app.handle_key(KeyCode::Enter);
        assert!(app.is_over());

        let screen = render(&app);
        assert!(screen.contains("Game Over"));
        assert!(screen.contains("You won the match!"));
        assert!(screen.contains("Final score - Player: 1  Tied: 0  Computer: 0"));
        assert!(screen.contains("The computer lied 1 of 1 rounds (100%)"));
        assert!(!screen.contains("I'm going with"));
        assert!(!screen.contains("Player Chooses:"));
        assert!(!screen.contains("[P] Paper"));
    }

    fn app() -> App<ScriptedMoves> {
        App::new(
            RoundEngine::new(ScriptedMoves::new([Move::Rock, Move::Scissors])),
            None,
        )
    }

    #[test]
    fn test_shows_prediction_before_choice() {
        let screen = render(&app());
        assert!(screen.contains("PRS EXTREME"));
        assert!(screen.contains("I'm going with... Rock"));
        assert!(screen.contains("Player: 0"));
        assert!(!screen.contains("Result"));
    }

    #[test]
    fn test_reveals_choice_in_result_dialog() {
        let mut app = app();
        app.handle_key(KeyCode::Char('r'));
        let screen = render(&app);
        assert!(screen.contains("You Win!"));
        assert!(screen.contains("Player chose: Rock"));
        assert!(screen.contains("Computer chose: Scissors"));
        assert!(!screen.contains("I'm going with"));
    }

    #[test]
    fn test_stats_update_after_acknowledge() {
        let mut app = app();
        app.handle_key(KeyCode::Char('r'));
        app.handle_key(KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("Player: 1"));
        assert!(screen.contains("Computer Lied: 1"));
        assert!(screen.contains("Rounds: 1"));
    }
}
