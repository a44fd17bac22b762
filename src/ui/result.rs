use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::quiz::{SessionKind, Summary};

const QUESTION_PREVIEW_LENGTH: usize = 40;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(summary) = app.quiz().summary() else {
        return;
    };
    let percentage = calculate_percentage(summary.score, summary.total);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], &summary, percentage);
    render_actions(frame, chunks[2], &summary);
    render_missed_questions(frame, chunks[3], app, &summary);
    render_controls(frame, chunks[4], &summary);
}

fn calculate_percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, summary: &Summary, percentage: f64) {
    let title = match summary.kind {
        SessionKind::Full => "道場修了！",
        SessionKind::Review => "復習完了！",
    };
    let trophy = if summary.is_perfect() {
        Span::styled("★ 全問正解 ★", Style::default().fg(Color::Yellow).bold())
    } else {
        Span::raw("")
    };

    let content = vec![
        Line::from(Span::styled(title, Style::default().fg(Color::Cyan).bold())),
        Line::from(trophy),
        Line::from("今回の成績".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.0}%)",
                summary.score, summary.total, percentage
            ),
            Style::default().fg(get_grade_color(percentage)).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_actions(frame: &mut Frame, area: Rect, summary: &Summary) {
    let mut lines = Vec::with_capacity(2);

    if !summary.wrong_ids.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("w  ", Style::default().fg(Color::Yellow).bold()),
            Span::styled(
                format!("間違えた{}問を復習する", summary.wrong_ids.len()),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }

    let restart_label = match summary.kind {
        SessionKind::Full => "もう一度挑戦する",
        SessionKind::Review => "全問を解き直す",
    };
    lines.push(Line::from(vec![
        Span::styled("r  ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(restart_label, Style::default().fg(Color::Gray)),
    ]));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_missed_questions(frame: &mut Frame, area: Rect, app: &App, summary: &Summary) {
    let lines: Vec<Line> = summary
        .wrong_ids
        .iter()
        .filter_map(|id| app.dataset().get(*id))
        .map(|scenario| {
            Line::from(vec![
                Span::styled(" - ", Style::default().fg(Color::Red)),
                Span::styled(
                    format!("問{:2}. ", scenario.id),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    truncate_question(&scenario.question_text),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect, summary: &Summary) {
    let hint = if summary.wrong_ids.is_empty() {
        "r restart  ·  esc home  ·  q quit"
    } else {
        "w review  ·  r restart  ·  esc home  ·  q quit"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::ui::test_support::{screen, squash};

    fn finished_app() -> App {
        let mut app = App::new(Dataset::builtin().unwrap(), Some(21)).unwrap();
        app.open_quiz().unwrap();
        while !app.is_showing_results() {
            app.confirm().unwrap();
        }
        app
    }

    #[test]
    fn percentage_handles_empty_totals() {
        assert_eq!(calculate_percentage(0, 0), 0.0);
        assert_eq!(calculate_percentage(3, 4), 75.0);
    }

    #[test]
    fn grade_color_follows_percentage() {
        assert_eq!(get_grade_color(100.0), Color::Green);
        assert_eq!(get_grade_color(75.0), Color::Cyan);
        assert_eq!(get_grade_color(50.0), Color::Yellow);
        assert_eq!(get_grade_color(10.0), Color::Red);
    }

    #[test]
    fn long_questions_are_truncated() {
        let text = "あ".repeat(QUESTION_PREVIEW_LENGTH + 5);
        let preview = truncate_question(&text);
        assert_eq!(preview.chars().count(), QUESTION_PREVIEW_LENGTH + 3);
        assert!(preview.ends_with("..."));
        assert_eq!(truncate_question("短い"), "短い");
    }

    #[test]
    fn shows_score_and_remediation() {
        let app = finished_app();
        let summary = app.quiz().summary().unwrap();
        let screen = screen(&app);

        assert!(screen.contains(&squash("道場修了！")));
        assert!(screen.contains(&format!("{}/{}", summary.score, summary.total)));

        let retry = format!("間違えた{}問を復習する", summary.wrong_ids.len());
        assert_eq!(screen.contains(&squash(&retry)), !summary.wrong_ids.is_empty());
    }
}
