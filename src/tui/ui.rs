//! Stateless UI rendering for the name screen and the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, NameField, Screen};
use crate::games::tictactoe::{
    Board, DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME, Mark, Position, Square,
};

/// Renders the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let (status, help) = match app.screen() {
        Screen::NameEntry => {
            draw_name_entry(frame, chunks[1], app);
            (
                "Enter player names".to_string(),
                "Tab: switch field  Enter: start  Esc: quit",
            )
        }
        Screen::Board => {
            draw_board(frame, chunks[1], app.game().state().board(), app.cursor());
            let status = match app.notice() {
                Some(notice) => format!("{}  ({})", app.game().status_message(), notice),
                None => app.game().status_message(),
            };
            let help = if app.game().is_over() {
                "r: play again  n: new players  q: quit"
            } else {
                "1-9 or arrows+Enter: move  r: restart  n: new players  q: quit"
            };
            (status, help)
        }
    };

    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help_text = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help_text, chunks[3]);
}

fn draw_name_entry(frame: &mut Frame, area: Rect, app: &App) {
    let form = center_rect(area, 40, 6);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(form);

    draw_name_field(
        frame,
        rows[0],
        "Player 1 (X)",
        app.player1_input(),
        DEFAULT_PLAYER1_NAME,
        app.focus() == NameField::Player1,
    );
    draw_name_field(
        frame,
        rows[1],
        "Player 2 (O)",
        app.player2_input(),
        DEFAULT_PLAYER2_NAME,
        app.focus() == NameField::Player2,
    );
}

fn draw_name_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value.to_string())
    };
    let field = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(field, area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, start) in [(0, 0), (2, 3), (4, 6)] {
        let positions = [
            Position::ALL[start],
            Position::ALL[start + 1],
            Position::ALL[start + 2],
        ];
        draw_row(frame, rows[row], board, cursor, &positions);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    positions: &[Position; 3],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], board, cursor, positions[0]);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], board, cursor, positions[1]);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], board, cursor, positions[2]);
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (
            format!(" {} ", pos.cell_id()),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
