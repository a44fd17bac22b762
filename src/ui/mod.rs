mod card;
mod home;
mod quiz;
mod result;
mod study;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::AppMode;

const TITLE: &str = "一問一答道場";

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let [header, body] = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
    render_header(frame, header, app.mode);

    match app.mode {
        AppMode::Home => home::render(frame, body, app),
        AppMode::Study => study::render(frame, body, app),
        AppMode::Quiz if app.is_showing_results() => result::render(frame, body, app),
        AppMode::Quiz => quiz::render(frame, body, app),
    }
}

fn render_header(frame: &mut Frame, area: Rect, mode: AppMode) {
    let tab = |key: &'static str, label: &'static str, active: bool| {
        let style = if active {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(format!(" {key} {label} "), style)
    };

    let line = Line::from(vec![
        Span::styled(format!(" {TITLE} "), Style::default().fg(Color::Cyan).bold()),
        Span::raw("  "),
        tab("1", "学習", mode == AppMode::Study),
        Span::raw(" "),
        tab("2", "クイズ", mode == AppMode::Quiz),
    ]);

    let widget = Paragraph::new(line).bg(Color::Reset);
    frame.render_widget(widget, area);
}
