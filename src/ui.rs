//! Terminal UI rendering with ratatui

use crate::board::{Cell, BOARD_HEIGHT, BOARD_WIDTH, BUFFER_HEIGHT, TOTAL_HEIGHT};
use crate::game::Game;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BLOCK: &str = "██";
const EMPTY: &str = "  ";

/// Board width in terminal cells: two characters per column plus borders
const GAME_WIDTH: u16 = (BOARD_WIDTH as u16) * 2 + 2;
/// Visible board height plus borders
const GAME_HEIGHT: u16 = (BOARD_HEIGHT as u16) + 2;

/// Render the entire game UI
pub fn render_game(frame: &mut Frame, game: &Game) {
    let area = frame.area();
    let game_area = center_rect(area, GAME_WIDTH, GAME_HEIGHT);

    render_board(frame, game_area, game);

    if game.is_game_over() {
        render_overlay(frame, area, "GAME OVER", "Press any key");
    }
}

/// Center a rect within another rect
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render the game board
fn render_board(frame: &mut Frame, area: Rect, game: &Game) {
    let block = Block::default()
        .title(" BLOCKFALL ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let piece_cells = game.current.cells();
    let piece_color = game.current.kind.color();

    // Hidden buffer rows are cropped; a freshly spawned piece pokes into
    // view from the top edge as it descends
    let mut lines: Vec<Line> = Vec::new();
    for row in BUFFER_HEIGHT..TOTAL_HEIGHT {
        let mut spans = Vec::new();
        for col in 0..BOARD_WIDTH {
            let pos = (row as i32, col as i32);

            let (text, style) = if piece_cells.contains(&pos) {
                (BLOCK, Style::default().fg(piece_color))
            } else {
                match game.board.get(pos.0, pos.1) {
                    Some(Cell::Filled(kind)) => (BLOCK, Style::default().fg(kind.color())),
                    _ => (EMPTY, Style::default()),
                }
            };

            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// Render an overlay (for game over)
fn render_overlay(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let popup_width = 24u16;
    let popup_height = 5u16;
    let popup_area = center_rect(area, popup_width, popup_height);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let text = vec![
        Line::styled(title.to_string(), Style::default().fg(Color::Yellow).bold()),
        Line::raw(""),
        Line::styled(subtitle.to_string(), Style::default().fg(Color::Gray)),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
