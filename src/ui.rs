//! The UI renders the application state into something visible and scrollable.
//!
//! Three bands: the navigation bar (full or compact), the visible slice of the page, and a status
//! line. The compact menu, when open, is drawn over the top of the page.

use crate::app_state::{AppState, SIDE_PADDING};
use crate::page::{Row, RowKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const ACCENT: Color = Color::Yellow;

/// Renders the whole screen from the current application state.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(crate::app_state::NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(crate::app_state::STATUS_HEIGHT),
        ])
        .split(f.area());

    draw_nav(f, app, chunks[0]);
    draw_page(f, app, chunks[1]);
    draw_status(f, app, chunks[2]);

    if app.menu_open {
        draw_menu(f, app, chunks[1]);
    }
}

fn draw_nav(f: &mut Frame, app: &AppState, area: Rect) {
    let title = app
        .page
        .document()
        .title
        .clone()
        .unwrap_or_else(|| "Portfolio".to_string());

    let (border, title_style) = if app.is_condensed() {
        (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(format!(" {title} "), title_style));

    let active = app.tracker.active_index();

    let line = if app.is_compact() {
        let current = active
            .and_then(|i| app.page.sections().get(i))
            .map_or("", |s| s.title.as_str());
        let toggle = if app.menu_open { "✕ Menu" } else { "≡ Menu" };
        Line::from(vec![
            Span::styled(toggle, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(current.to_string(), Style::default().fg(ACCENT)),
        ])
    } else {
        let mut spans = Vec::new();
        for (i, section) in app.page.sections().iter().enumerate() {
            if Some(i) == active {
                spans.push(Span::styled(
                    format!(" • {} ", section.title),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    format!("   {} ", section.title),
                    Style::default().fg(Color::Gray),
                ));
            }
        }
        Line::from(spans)
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_page(f: &mut Frame, app: &AppState, area: Rect) {
    let inner = area.inner(Margin {
        horizontal: SIDE_PADDING,
        vertical: 0,
    });
    let offset = usize::try_from(app.viewport.offset()).unwrap_or(0);
    let active = app.tracker.active_index();

    let lines: Vec<Line> = app
        .page
        .rows()
        .iter()
        .skip(offset)
        .take(usize::from(inner.height))
        .map(|row| {
            let revealed = row.section.is_none_or(|i| {
                app.page
                    .sections()
                    .get(i)
                    .is_some_and(|s| app.reveal.is_revealed(&s.id))
            });
            let is_active = row.section.is_some() && row.section == active;
            Line::from(Span::styled(
                row.text.clone(),
                row_style(row, is_active, revealed),
            ))
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

fn row_style(row: &Row, active: bool, revealed: bool) -> Style {
    if !revealed {
        return Style::default().fg(Color::DarkGray);
    }
    match row.kind {
        RowKind::Title => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        RowKind::Heading if active => Style::default()
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        RowKind::Heading => Style::default().add_modifier(Modifier::BOLD),
        RowKind::Subheading => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        RowKind::Code => Style::default().fg(Color::Green),
        RowKind::Bullet | RowKind::Body | RowKind::Blank => Style::default(),
    }
}

fn draw_menu(f: &mut Frame, app: &AppState, area: Rect) {
    let sections = app.page.sections();
    let longest = sections
        .iter()
        .map(|s| s.title.width())
        .max()
        .unwrap_or(0);
    let width = u16::try_from(longest + 8)
        .unwrap_or(u16::MAX)
        .min(area.width.saturating_sub(2));
    let height = u16::try_from(sections.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height);
    let popup = Rect {
        x: area.x + 1,
        y: area.y,
        width,
        height,
    };

    let active = app.tracker.active_index();
    let items: Vec<ListItem> = sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let label = format!("{} {}", i + 1, section.title);
            let style = if Some(i) == active {
                Style::default().fg(ACCENT).add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(label).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Sections"));
    f.render_widget(Clear, popup);
    f.render_widget(list, popup);
}

fn draw_status(f: &mut Frame, app: &AppState, area: Rect) {
    let text = if let Some(ref msg) = app.message {
        msg.clone()
    } else if app.is_compact() {
        "↑/↓ Scroll | Tab Next | 1-9 Jump | m Menu | q Quit".to_string()
    } else {
        "↑/↓ PgUp/PgDn Scroll | Tab/Shift+Tab Next/Prev | 1-9 Jump | q Quit".to_string()
    };
    let line = Line::from(vec![
        Span::styled(text, Style::default().fg(Color::Gray)),
        Span::raw(format!("  {}%", app.scroll_percent())),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
