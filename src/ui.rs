use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, LoadState, NewsView, Screen, SubjectsView};
use crate::model::{subject_names, NewsItem};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
        .split(f.size());

    // Top bar
    let top = match app.screen {
        Screen::News(_) => "newsreel — j/k:move  Enter:read  Esc:close  s:subjects  q:quit",
        Screen::Subjects(_) => "newsreel — j/k:move  Enter:pick  Esc:back to news  q:quit",
    };
    f.render_widget(Paragraph::new(top), chunks[0]);

    match &app.screen {
        Screen::News(view) => draw_news(f, chunks[1], view, app.tick),
        Screen::Subjects(view) => draw_subjects(f, chunks[1], view),
    }

    // Bottom status
    f.render_widget(Paragraph::new(app.status.clone()), chunks[2]);
}

fn draw_news(f: &mut Frame, area: Rect, view: &NewsView, tick: usize) {
    let block = Block::default().borders(Borders::ALL).title("News");

    match &view.state {
        LoadState::Loading => {
            let text = format!("{} Loading news…", SPINNER[tick % SPINNER.len()]);
            let body = Paragraph::new(text).alignment(Alignment::Center).block(block);
            f.render_widget(body, area);
        }
        LoadState::Failed(message) => {
            let mut text = Text::default();
            text.lines.push(
                Line::from("Could not load news")
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            );
            text.lines.push(Line::from(""));
            text.lines.extend(Text::from(message.clone()).lines);
            let body = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
            f.render_widget(body, area);
        }
        LoadState::Loaded(items) if items.is_empty() => {
            let body = Paragraph::new("No news right now.")
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(body, area);
        }
        LoadState::Loaded(items) => {
            let width = area.width.saturating_sub(4) as usize;
            let rows: Vec<ListItem> = items.iter().map(|item| news_row(item, width)).collect();
            let list = List::new(rows)
                .block(block)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol("▶ ");
            let mut state = ListState::default().with_selected(Some(view.selected));
            f.render_stateful_widget(list, area, &mut state);

            if view.detail_open {
                if let Some(item) = view.selected_item() {
                    draw_detail(f, area, item, view.detail_scroll);
                }
            }
        }
    }
}

fn news_row(item: &NewsItem, width: usize) -> ListItem<'static> {
    let title = Line::from(truncate(&item.title, width))
        .style(Style::default().add_modifier(Modifier::BOLD));
    let summary = Line::from(truncate(&item.summary, width))
        .style(Style::default().fg(Color::DarkGray));
    ListItem::new(Text::from(vec![title, summary]))
}

fn draw_detail(f: &mut Frame, area: Rect, item: &NewsItem, scroll: usize) {
    let popup = centered_rect(80, 70, area);

    let mut lines = vec![
        Line::from(item.title.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
    ];
    lines.extend(Text::from(item.details.clone()).lines);

    // Scroll by source line so the last one stays reachable however lines wrap
    let text = Text::from(lines.into_iter().skip(scroll).collect::<Vec<_>>());

    let title = if scroll > 0 {
        "Details (j/k to scroll, Esc to close) ↑"
    } else {
        "Details (j/k to scroll, Esc to close)"
    };
    let body = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, popup);
    f.render_widget(body, popup);
}

fn draw_subjects(f: &mut Frame, area: Rect, view: &SubjectsView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let rows: Vec<ListItem> = subject_names()
        .iter()
        .map(|name| ListItem::new(Line::from(*name)))
        .collect();
    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title("Subjects"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(view.selected));
    f.render_stateful_widget(list, chunks[0], &mut state);

    if let Some(notice) = &view.notice {
        let line = Paragraph::new(notice.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::ITALIC));
        f.render_widget(line, chunks[1]);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let rows = Layout::default()
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
        .split(rows[1])[1]
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
