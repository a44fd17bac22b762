use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{is_correct, Answer};

use super::card;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let answered = app.quiz().selection().is_some();
    let chunks = create_layout(area, answered);

    render_progress(frame, chunks[0], app);
    render_question(frame, chunks[1], app);
    render_options(frame, chunks[2], app);

    if answered {
        render_feedback(frame, chunks[3], app);
        render_controls(frame, chunks[4], app);
    } else {
        render_controls(frame, chunks[3], app);
    }
}

fn create_layout(area: Rect, answered: bool) -> std::rc::Rc<[Rect]> {
    if answered {
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(8),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(area)
    } else {
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .margin(2)
        .split(area)
    }
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let quiz = app.quiz();
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let position = format!("QUESTION {} / {}", quiz.position() + 1, quiz.total());
    frame.render_widget(Paragraph::new(position).fg(Color::DarkGray), left);

    let score = format!("SCORE: {}", quiz.score());
    frame.render_widget(
        Paragraph::new(score)
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        right,
    );
}

fn render_question(frame: &mut Frame, area: Rect, app: &App) {
    let scenario = app.quiz().current_scenario();

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" 問題 {} ", scenario.id),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        )),
        Line::from(scenario.question_text.as_str().fg(Color::White).bold()),
    ];
    if app.quiz().selection().is_none() {
        lines.push(Line::from(""));
        lines.push(Line::from(
            "正しい組み合わせを選択してください".fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App) {
    let quiz = app.quiz();
    let correct = &quiz.current_scenario().correct_answer;
    let selection = quiz.selection();
    let mut lines: Vec<Line> = Vec::with_capacity(quiz.options().len() * 2);

    for (index, option) in quiz.options().iter().enumerate() {
        let (marker, style) = match selection {
            None if index == app.cursor() => (">", Style::default().fg(Color::Cyan).bold()),
            None => (" ", Style::default().fg(Color::Gray)),
            Some(_) if is_correct(option, correct) => {
                ("✓", Style::default().fg(Color::Green).bold())
            }
            Some(chosen) if chosen == index => ("✗", Style::default().fg(Color::Red)),
            Some(_) => (" ", Style::default().fg(Color::DarkGray)),
        };

        lines.push(option_line(marker, OPTION_LABELS[index], option, style));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn option_line(marker: &str, label: char, option: &Answer, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {marker} "), style),
        Span::styled(format!("{label}. "), style),
        Span::styled(option.category.clone(), style.bold()),
        Span::styled(
            format!("  {} / {}", option.function_type, option.ward),
            style,
        ),
    ])
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let quiz = app.quiz();
    let (banner, color) = if quiz.answered_correctly() == Some(true) {
        ("正解！ 素晴らしい！この調子でいきましょう。", Color::Green)
    } else {
        ("不正解... 解説を読んで復習しましょう。", Color::Red)
    };

    let mut lines = vec![Line::from(banner.fg(color).bold()), Line::from("")];
    lines.extend(card::lines(quiz.current_scenario(), false));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(color)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let quiz = app.quiz();
    let hint = match quiz.selection() {
        None => "j/k navigate  ·  enter select  ·  esc home  ·  q quit",
        Some(_) if quiz.is_last_question() => "enter 結果を見る  ·  esc home  ·  q quit",
        Some(_) => "enter 次の問題へ  ·  esc home  ·  q quit",
    };

    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
