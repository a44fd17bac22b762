use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;

use super::card;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_intro(frame, chunks[0], app);
    render_cards(frame, chunks[1], app);
    render_controls(frame, chunks[2]);
}

fn render_intro(frame: &mut Frame, area: Rect, app: &App) {
    let content = vec![
        Line::from("インプット学習".fg(Color::Cyan).bold()),
        Line::from(
            format!(
                "以下の{}個の事例を読み、それぞれの特徴に合った病院分類を覚えましょう。",
                app.dataset().len()
            )
            .fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(content).wrap(Wrap { trim: true }), area);
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    let scenarios = &app.dataset().scenarios()[app.study_offset()..];

    let rule = "─".repeat(area.width.saturating_sub(2) as usize);
    let mut lines: Vec<Line> = Vec::new();
    for scenario in scenarios {
        lines.extend(card::lines(scenario, true));
        lines.push(Line::from(""));
        lines.push(Line::from(rule.as_str().fg(Color::DarkGray)));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  2 quiz  ·  esc home  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
