use ratatui::prelude::*;

use crate::models::Scenario;

const ANSWER_LABELS: [&str; 3] = ["病院区分", "病院機能", "病棟　　"];

/// Lines of a study card: header, optionally the question, the correct
/// classification and the explanation.
pub fn lines(scenario: &Scenario, with_question: bool) -> Vec<Line<'_>> {
    let mut lines = Vec::new();

    let mut header = vec![Span::styled(
        format!(" 問 {} ", scenario.id),
        Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
    )];
    for tag in &scenario.tags {
        header.push(Span::styled(format!("  #{tag}"), Style::default().fg(Color::DarkGray)));
    }
    lines.push(Line::from(header));

    if with_question {
        lines.push(Line::from(""));
        lines.push(Line::from(
            scenario.question_text.as_str().fg(Color::White).bold(),
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("正解".fg(Color::Green).bold()));

    let answer = &scenario.correct_answer;
    let values = [&answer.category, &answer.function_type, &answer.ward];
    for (label, value) in ANSWER_LABELS.iter().zip(values) {
        lines.push(Line::from(vec![
            Span::styled(format!("  {label}  "), Style::default().fg(Color::DarkGray)),
            Span::styled(value.as_str(), Style::default().fg(Color::Cyan).bold()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("解説ポイント".fg(Color::Yellow).bold()));
    for paragraph in scenario.explanation.lines() {
        lines.push(Line::from(paragraph.fg(Color::Gray)));
    }

    if !scenario.key_point.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::styled(scenario.key_point.as_str(), Style::default().fg(Color::Yellow)),
        ]));
    }

    lines
}
