use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(16),
        Constraint::Fill(1),
    ])
    .split(area);

    let total = app.dataset().len();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "病院分類 一問一答道場",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("具体的な希望条件から、最適な職場を見極める力を養いましょう。".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled("1  ", Style::default().fg(Color::Green).bold()),
            Span::styled("インプット学習", Style::default().fg(Color::White).bold()),
        ]),
        Line::from(format!("全{total}問の事例と解説を一覧で確認する").fg(Color::DarkGray)),
        Line::from(""),
        Line::from(vec![
            Span::styled("2  ", Style::default().fg(Color::Green).bold()),
            Span::styled("実践クイズ道場", Style::default().fg(Color::White).bold()),
        ]),
        Line::from("テスト形式で確認して全問正解を目指す".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(""),
        Line::from("q quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );

    frame.render_widget(widget, chunks[1]);
}
