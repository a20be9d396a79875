//! Stateless UI rendering.
//!
//! Everything drawn here is derived from [`App`] on every frame.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timetravel_tictactoe::{GameSession, GameStatus, Mark, Square, Theme};

use crate::app::{App, Focus};

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
struct Palette {
    background: Color,
    text: Color,
    accent: Color,
    mark_a: Color,
    mark_b: Color,
    winning: Color,
    grid: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Midnight => Palette {
            background: Color::Rgb(15, 23, 42),
            text: Color::Gray,
            accent: Color::Cyan,
            mark_a: Color::LightBlue,
            mark_b: Color::LightMagenta,
            winning: Color::Green,
            grid: Color::DarkGray,
        },
        Theme::Light => Palette {
            background: Color::White,
            text: Color::Black,
            accent: Color::Blue,
            mark_a: Color::Blue,
            mark_b: Color::Red,
            winning: Color::LightGreen,
            grid: Color::Gray,
        },
        Theme::Batman => Palette {
            background: Color::Black,
            text: Color::Yellow,
            accent: Color::Yellow,
            mark_a: Color::Yellow,
            mark_b: Color::LightGreen,
            winning: Color::Rgb(255, 200, 0),
            grid: Color::DarkGray,
        },
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let session = app.session();
    let colors = palette(session.cosmetics().theme);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(colors.background).fg(colors.text)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Help / message
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(colors.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(36)])
        .split(chunks[1]);

    draw_game(frame, body[0], app, colors);
    draw_sidebar(frame, body[1], app, colors);
    draw_footer(frame, chunks[2], app, colors);
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App, colors: Palette) {
    let session = app.session();
    let status = session.status();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status
            Constraint::Length(1), // Banner
            Constraint::Min(3),    // Board
        ])
        .split(area);

    let status_text = Paragraph::new(session.status_line())
        .style(Style::default().fg(colors.text).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(status_text, rows[0]);

    if let GameStatus::Won { mark, .. } = status {
        let glyph = session.cosmetics().piece_set.glyph(mark);
        let banner = Paragraph::new(format!("*** {} wins! ***", glyph))
            .style(Style::default().fg(colors.winning).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(banner, rows[1]);
    }

    draw_board(frame, rows[2], app, colors);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, colors: Palette) {
    let session = app.session();
    let (cell_w, cell_h) = session.cosmetics().board_size.cell_dimensions();
    let board_area = center_rect(area, cell_w * 3 + 2, cell_h * 3 + 2);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(cell_h),
            Constraint::Length(1),
            Constraint::Length(cell_h),
            Constraint::Length(1),
            Constraint::Length(cell_h),
        ])
        .split(board_area);

    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, row_area, app, colors, row, cell_w);
    }
    for sep in [rows[1], rows[3]] {
        let line = "─".repeat(usize::from(sep.width));
        frame.render_widget(
            Paragraph::new(line).style(Style::default().fg(colors.grid)),
            sep,
        );
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, colors: Palette, row: usize, cell_w: u16) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(cell_w),
            Constraint::Length(1),
            Constraint::Length(cell_w),
            Constraint::Length(1),
            Constraint::Length(cell_w),
        ])
        .split(area);

    for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        draw_cell(frame, cell_area, app, colors, row * 3 + col);
    }
    for sep in [cols[1], cols[3]] {
        let bar = vec![Line::from("│"); usize::from(sep.height)];
        frame.render_widget(
            Paragraph::new(bar).style(Style::default().fg(colors.grid)),
            sep,
        );
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, colors: Palette, cell: usize) {
    let session = app.session();
    let board = session.history().current_board();
    let winning = session
        .status()
        .winning_line()
        .is_some_and(|line| line.contains(&cell));

    let (symbol, mut style) = match board.get(cell) {
        Some(Square::Occupied(mark)) => {
            let color = match mark {
                Mark::A => colors.mark_a,
                Mark::B => colors.mark_b,
            };
            (
                session.cosmetics().piece_set.glyph(mark).to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        _ => ((cell + 1).to_string(), Style::default().fg(colors.grid)),
    };

    if winning {
        style = style.bg(colors.winning).fg(Color::Black);
    }
    if app.focus() == Focus::Board && app.cursor() == cell {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let pad = usize::from(area.height.saturating_sub(1) / 2);
    let mut lines = vec![Line::from(""); pad];
    lines.push(Line::from(Span::styled(symbol, style)));

    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, colors: Palette) {
    let session = app.session();
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    let cosmetics = session.cosmetics();
    let options = vec![
        Line::from(format!("[t] Theme:  {}", cosmetics.theme.label())),
        Line::from(format!("[p] Pieces: {}", cosmetics.piece_set.label())),
        Line::from(format!("[s] Size:   {}", cosmetics.board_size.label())),
        Line::from("[r] Restart"),
    ];
    let options = Paragraph::new(options).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Options")
            .border_style(Style::default().fg(colors.accent)),
    );
    frame.render_widget(options, parts[0]);

    draw_history(frame, parts[1], app, session, colors);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, session: &GameSession, colors: Palette) {
    let current = session.history().current_move();
    let pieces = session.cosmetics().piece_set;

    let items: Vec<ListItem> = session
        .history()
        .history_descriptions()
        .iter()
        .map(|description| {
            let marker = if description.move_index == current { "▶ " } else { "  " };
            let detail = description
                .played
                .map(|mov| format!(" ({} on {})", pieces.glyph(mov.mark), mov.cell + 1))
                .unwrap_or_default();
            ListItem::new(format!("{}{}{}", marker, description.label(), detail))
        })
        .collect();

    let border = if app.focus() == Focus::History {
        colors.accent
    } else {
        colors.grid
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("History")
                .border_style(Style::default().fg(border)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if app.focus() == Focus::History {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, colors: Palette) {
    let text = app.message().map(str::to_string).unwrap_or_else(|| {
        "arrows/1-9 play · [ ] step · Home/End · Tab history · q quit".to_string()
    });
    let footer = Paragraph::new(text)
        .style(Style::default().fg(colors.accent))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
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
