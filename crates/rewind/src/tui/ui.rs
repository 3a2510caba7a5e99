//! Stateless UI rendering: board, history list and status line.

use super::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{GameView, Player, Position, Square, winning_line};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.session().view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(24)])
        .split(chunks[1]);

    draw_board(frame, body[0], app, &view);
    draw_history(frame, body[1], app, &view);
    draw_status(frame, chunks[2], app, &view);

    let help = Paragraph::new(
        "arrows/1-9 move  enter place/jump  tab switch panel  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_style(focus_style(app.focus() == Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 40, 11);
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

    let highlight = winning_line(&view.board);
    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(rows[row * 2]);

        for (col, pos) in positions.iter().enumerate() {
            let winning = highlight.is_some_and(|line| line.contains(pos));
            draw_cell(frame, cols[col * 2], view, *pos, cursor == Some(*pos), winning);
            if col < 2 {
                draw_separator(frame, cols[col * 2 + 1], "│");
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1], &"─".repeat(38));
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    pos: Position,
    under_cursor: bool,
    winning: bool,
) {
    let (symbol, mut style) = match view.board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (player.to_string(), player_style(player)),
    };

    if winning {
        style = style.add_modifier(Modifier::REVERSED);
    }
    if under_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Middle line of the three-row cell.
    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let items: Vec<ListItem> = view
        .history
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if entry.is_current { "● " } else { "  " };
            ListItem::new(Line::from(Span::styled(format!("{}{}", marker, entry.label), style)))
        })
        .collect();

    let focused = app.focus() == Focus::History;
    let list = List::new(items)
        .block(
            Block::default()
                .title(" History ")
                .borders(Borders::ALL)
                .border_style(focus_style(focused)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(focused.then_some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let mut spans = vec![Span::styled(
        view.status_text.clone(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if view.is_draw {
        spans.push(Span::styled("  Draw", Style::default().fg(Color::Magenta)));
    }
    if let Some(rejection) = app.last_rejection() {
        spans.push(Span::styled(
            format!("  ({})", rejection),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn player_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect, text: &str) {
    let sep = Paragraph::new(text.to_string()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
