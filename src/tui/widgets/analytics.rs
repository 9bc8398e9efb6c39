// src/tui/widgets/analytics.rs — Analytics overlay.
//
// Replaces its content wholesale from a fresh view each time it opens.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::analytics::{AnalyticsView, NO_GAPS, NO_PROGRESSION, NO_TOPICS};

use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, view: &AnalyticsView) {
    f.render_widget(Clear, area);

    let outer = Block::default()
        .title(Span::styled(" Analytics ", Theme::header()))
        .borders(Borders::ALL)
        .border_style(Theme::border_busy());
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),     // Overall stats
            Constraint::Percentage(30), // Topics covered
            Constraint::Percentage(30), // Knowledge gaps
            Constraint::Min(4),        // Problem history
        ])
        .split(inner);

    render_stats(f, chunks[0], view);
    render_list(f, chunks[1], " Topics covered ", &view.topics, NO_TOPICS);
    render_list(f, chunks[2], " Knowledge gaps ", &view.gaps, NO_GAPS);
    render_list(
        f,
        chunks[3],
        " Problem history ",
        &view.progression,
        NO_PROGRESSION,
    );
}

fn render_stats(f: &mut Frame, area: Rect, view: &AnalyticsView) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Total interactions:  ", Theme::text_dim()),
            Span::styled(view.total_interactions.clone(), Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Problems solved:     ", Theme::text_dim()),
            Span::styled(view.problems_solved.clone(), Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Average score:       ", Theme::text_dim()),
            Span::styled(format!("{}%", view.average_score), Theme::text()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_list(f: &mut Frame, area: Rect, title: &str, rows: &[String], placeholder: &str) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            // A placeholder row standing in for an empty list renders dim.
            let style = if row == placeholder {
                Theme::text_dim()
            } else {
                Theme::text()
            };
            Line::from(Span::styled(row.clone(), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
