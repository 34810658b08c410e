use curator_core::AppViewModel;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::app::InputMode;

pub fn render(frame: &mut Frame<'_>, view: &AppViewModel, cursor: usize, mode: &InputMode) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    render_header(frame, layout[0], view);
    render_table(frame, layout[1], view, cursor);
    render_status(frame, layout[2], view);

    if let InputMode::CustomCount { buffer } = mode {
        render_overlay(frame, buffer);
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, view: &AppViewModel) {
    let select_all = if view.select_all { " | select-all on" } else { "" };
    let header = Paragraph::new(format!(
        "Art Institute of Chicago artworks{select_all}"
    ))
    .style(Style::default().fg(Color::White))
    .block(Block::default().title("curator").borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_table(frame: &mut Frame<'_>, area: Rect, view: &AppViewModel, cursor: usize) {
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Title"),
        Cell::from("Place of Origin"),
        Cell::from("Artist"),
        Cell::from("Inscriptions"),
        Cell::from("Start"),
        Cell::from("End"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = view.rows.iter().map(|row| {
        let mark = if row.selected { "[x]" } else { "[ ]" };
        Row::new(vec![
            Cell::from(mark),
            Cell::from(row.title.clone()),
            Cell::from(row.place_of_origin.clone()),
            Cell::from(row.artist.clone()),
            Cell::from(row.inscriptions.clone()),
            Cell::from(row.date_start.to_string()),
            Cell::from(row.date_end.to_string()),
        ])
    });

    let widths = [
        Constraint::Length(3),
        Constraint::Percentage(26),
        Constraint::Percentage(15),
        Constraint::Percentage(25),
        Constraint::Percentage(20),
        Constraint::Length(6),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL))
        .row_highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    if !view.rows.is_empty() {
        table_state.select(Some(cursor.min(view.rows.len() - 1)));
    }
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_status(frame: &mut Frame<'_>, area: Rect, view: &AppViewModel) {
    let range = if view.rows.is_empty() {
        "no records".to_string()
    } else {
        format!(
            "rows {}-{} of {}",
            view.first + 1,
            view.first + view.rows.len(),
            view.total_records
        )
    };
    let status = format!(
        "Page {}/{} | {} | {} selected",
        view.page, view.page_count, range, view.selected_count
    );
    let hints = "up/down move | space select | a all | left/right page | r rows | s select-n | q quit";

    let widget = Paragraph::new(format!("{status}\n{hints}"))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_overlay(frame: &mut Frame<'_>, buffer: &str) {
    let area = centered_rect(40, 20, frame.area());
    frame.render_widget(Clear, area);
    let body = format!("Rows to select: {buffer}_\nEnter apply, Esc cancel");
    let overlay = Paragraph::new(body)
        .block(Block::default().title("Select rows").borders(Borders::ALL));
    frame.render_widget(overlay, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
