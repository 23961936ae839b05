//! UI rendering using ratatui
//!
//! One screen: header, the board beside the shop and score panels,
//! a feedback line and the key help footer.

use crate::app::{App, Tone};
use crate::game::{BoardCell, CellMark, Direction as Reading, Shop, GRID_SIZE};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Board panel width: 7 cells of 4 columns plus a gap each, and borders
const BOARD_WIDTH: u16 = (GRID_SIZE as u16) * 5 + 2;

/// Render the game screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                      // Header
            Constraint::Length(GRID_SIZE as u16 + 2),   // Board and side panels
            Constraint::Length(1),                      // Feedback
            Constraint::Min(0),                         // Scored words
            Constraint::Length(1),                      // Footer
        ])
        .split(area);

    render_header(frame, layout[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BOARD_WIDTH), // Board
            Constraint::Min(24),             // Shop and bank
        ])
        .split(layout[1]);

    render_board(frame, middle[0], app);
    render_side_panel(frame, middle[1], app);

    let (feedback_text, feedback_color) = format_feedback(&app.feedback, app.tone);
    let feedback = Paragraph::new(feedback_text)
        .style(Style::default().fg(feedback_color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(feedback, layout[2]);

    render_words(frame, layout[3], app);
    render_footer(frame, layout[4], app);
}

/// Render the header: title, seed, score
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Title
            Constraint::Min(10),    // Seed
            Constraint::Length(12), // Score
        ])
        .split(inner);

    let title = Paragraph::new("WORDSHOP")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let seed = Paragraph::new(format!("seed {}", app.seed))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(seed, header_layout[1]);

    let score = Paragraph::new(format!("Score {}", app.session().score()))
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Right);
    frame.render_widget(score, header_layout[2]);
}

/// Render the 7x7 board with cursor, multipliers and word highlights
fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let evaluation = session.evaluation();

    let lines: Vec<Line> = session
        .board()
        .rows()
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span> = cells
                .iter()
                .enumerate()
                .flat_map(|(col, cell)| {
                    let mut style = cell_style(cell, evaluation.mark(row, col));
                    if app.cursor == (row, col) {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    [Span::styled(format_cell(cell), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Board"),
    );
    frame.render_widget(board, area);
}

/// Render the shop, bank and action availability
fn render_side_panel(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Shop
            Constraint::Min(0),    // Bank
        ])
        .split(area);

    let shop = Paragraph::new(shop_line(session.shop(), app.selected, session.is_bankrupt())).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Shop"),
    );
    frame.render_widget(shop, layout[0]);

    let evaluation = session.evaluation();
    let balance_color = if session.is_bankrupt() {
        Color::Red
    } else if !session.can_refresh() {
        Color::Yellow
    } else {
        Color::Green
    };
    let items = vec![
        ListItem::new(format!("Bank: {}", session.balance()))
            .style(Style::default().fg(balance_color).bold()),
        ListItem::new(format!(
            "Across {}  Down {}",
            evaluation.horizontal, evaluation.vertical
        )),
        ListItem::new(format!("Refresh costs {}", session.rules().refresh_cost))
            .style(Style::default().fg(Color::DarkGray)),
    ];
    let bank = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Bank"),
    );
    frame.render_widget(bank, layout[1]);
}

/// Render the list of words currently scoring
fn render_words(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .session()
        .evaluation()
        .words
        .iter()
        .map(|word| {
            let arrow = match word.direction {
                Reading::Horizontal => "→",
                Reading::Vertical => "↓",
            };
            ListItem::new(format!("{} {} +{}", arrow, word.text, word.score))
                .style(Style::default().fg(Color::Green))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Words"),
    );
    frame.render_widget(list, area);
}

/// Render key help, dimming unavailable actions
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let key = |label: &'static str, enabled: bool| {
        let color = if enabled { Color::White } else { Color::DarkGray };
        Span::styled(label, Style::default().fg(color))
    };

    let footer = Line::from(vec![
        key("←↑↓→ Move  ", true),
        key("1-7 Pick  ", !session.is_bankrupt()),
        key("Enter Drop  ", app.selected.is_some()),
        key("r Refresh  ", session.can_refresh()),
        key("s Shuffle  ", session.can_shuffle()),
        key("u Undo  ", session.can_undo()),
        key("q Quit", true),
    ]);
    frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), area);
}

/// Shop slots as styled spans
fn shop_line(shop: &Shop, selected: Option<usize>, bankrupt: bool) -> Line<'static> {
    let spans: Vec<Span> = shop
        .slots()
        .iter()
        .enumerate()
        .flat_map(|(i, slot)| {
            let text = match slot {
                Some(letter) => format!("{}{}", letter, letter.base_score()),
                None => "__".to_string(),
            };
            let style = if bankrupt || slot.is_none() {
                Style::default().fg(Color::DarkGray)
            } else if selected == Some(i) {
                Style::default().fg(Color::Black).bg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::Cyan).bold()
            };
            [Span::styled(text, style), Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

/// Format one board cell: letter, base score and level pips
fn format_cell(cell: &BoardCell) -> String {
    match cell.letter() {
        Some(letter) => {
            let pips = match cell.level() {
                0 => " ",
                1 => "'",
                _ => "\"",
            };
            format!("{}{:<2}{}", letter, letter.base_score(), pips)
        }
        None => " ·  ".to_string(),
    }
}

/// Style a board cell by multiplier level and word membership
fn cell_style(cell: &BoardCell, mark: CellMark) -> Style {
    let color = match cell.level() {
        0 => Color::White,
        1 => Color::Cyan,
        _ => Color::Magenta,
    };
    let mut style = Style::default().fg(if cell.is_empty() { Color::DarkGray } else { color });

    if mark.in_word() {
        style = style.bg(Color::Rgb(20, 60, 20)).bold();
    }
    let edge = [mark.horizontal, mark.vertical]
        .iter()
        .flatten()
        .any(|m| m.first || m.last);
    if edge {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

/// Format feedback with appropriate color
fn format_feedback(feedback: &str, tone: Tone) -> (String, Color) {
    let color = match tone {
        Tone::Neutral => Color::White,
        Tone::Success => Color::Green,
        Tone::Notice => Color::Yellow,
        Tone::Error => Color::Red,
    };
    (feedback.to_string(), color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Board;
    use crate::game::catalog::Letter;
    use crate::game::{EconomyRules, GameSession, WordList};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_board_and_bank() {
        let session = GameSession::new(
            EconomyRules::default(),
            WordList::from_text("cat"),
            StdRng::seed_from_u64(5),
        );
        let app = App::new(session, "9/18/2026".to_string());
        let text = screen_text(&app);

        assert!(text.contains("WORDSHOP"));
        assert!(text.contains("Board"));
        assert!(text.contains("Bank: 50"));
        assert!(text.contains("seed 9/18/2026"));
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&BoardCell::default()), " ·  ");
    }

    #[test]
    fn test_placed_cells_show_base_score() {
        let mut board = Board::new();
        board.set_letter(0, 0, Letter::from_char('C').unwrap());
        board.set_letter(0, 1, Letter::from_char('Q').unwrap());
        board.raise_level(0, 1);
        board.raise_level(0, 1);

        assert_eq!(format_cell(&board.rows()[0][0]), "C3  ");
        assert_eq!(format_cell(&board.rows()[0][1]), "Q10\"");
    }

    #[test]
    fn test_feedback_colors() {
        assert_eq!(format_feedback("PLACED +5", Tone::Success).1, Color::Green);
        assert_eq!(format_feedback("UNDONE", Tone::Notice).1, Color::Yellow);
        assert_eq!(format_feedback("NO LETTER", Tone::Error).1, Color::Red);
        assert_eq!(format_feedback("NOTHING TO UNDO", Tone::Error).1, Color::Red);
        assert_eq!(format_feedback("", Tone::Neutral), (String::new(), Color::White));
    }
}
