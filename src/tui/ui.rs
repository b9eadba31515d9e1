use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Paragraph, Tabs};

use crate::grading::FieldRange;
use crate::output::format_score;
use crate::tui::app::{App, CgpaField, Field, FlashKind, InputMode, ResultCard, Tab};
use crate::tui::theme::ThemeColors;

/// Width of the input box for number fields
const FIELD_WIDTH: usize = 10;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.theme.colors();

    frame.render_widget(
        Block::default().style(Style::default().bg(colors.background).fg(colors.text)),
        area,
    );

    // Handle very small terminal sizes gracefully
    if area.height < 14 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Tabs(1) + Form(fill) + Result(6) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(1), // Tab bar
        Constraint::Fill(1),   // Form
        Constraint::Length(6), // Result card
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app, &colors);
    render_tabs(frame, chunks[1], app, &colors);
    match app.tab {
        Tab::Gpa => render_gpa_form(frame, chunks[2], app, &colors),
        Tab::Cgpa => render_cgpa_form(frame, chunks[2], app, &colors),
    }
    render_result(frame, chunks[3], app.result.as_ref(), &colors);
    render_status_bar(frame, chunks[4], app, &colors);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, &colors);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App, colors: &ThemeColors) {
    let title = "Grade Calculator";
    let mode_text = format!("{} Ctrl+D", app.theme.icon());

    let left_len = title.len();
    let right_len = mode_text.chars().count() + 1;
    let padding_len = (area.width as usize).saturating_sub(left_len + right_len);

    let line = Line::from(vec![
        Span::styled(title, Style::default().fg(colors.title_color).bold()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(mode_text, Style::default().fg(colors.muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App, colors: &ThemeColors) {
    let titles = vec!["GPA Calculator", "CGPA Calculator"];
    let selected = match app.tab {
        Tab::Gpa => 0,
        Tab::Cgpa => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(colors.tab_inactive_style)
        .highlight_style(colors.tab_active_style)
        .divider(" | ");

    frame.render_widget(tabs, area);
}

fn range_hint(range: &FieldRange) -> String {
    format!("({}-{})", range.min, range.max)
}

/// Render a number field as a fixed-width box, showing the placeholder when empty
fn field_span<'a>(
    value: &str,
    placeholder: &str,
    focused: bool,
    colors: &ThemeColors,
) -> Span<'a> {
    let (text, style) = if value.is_empty() && !focused {
        (placeholder.to_string(), colors.field_style.fg(colors.placeholder))
    } else if focused {
        (format!("{}|", value), colors.field_focus_style)
    } else {
        (value.to_string(), colors.field_style)
    };
    Span::styled(format!(" {:<width$} ", text, width = FIELD_WIDTH), style)
}

fn render_gpa_form(frame: &mut Frame, area: Rect, app: &App, colors: &ThemeColors) {
    let focused = app.focused_field();
    let label_style = Style::default().fg(colors.label_color);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("Number of subjects (1-{}): ", app.max_subjects), label_style),
            field_span(
                app.text_value(Field::SubjectCount).unwrap_or_default(),
                "",
                focused == Field::SubjectCount,
                colors,
            ),
            Span::styled("  Enter: generate", Style::default().fg(colors.muted)),
        ]),
        Line::from(""),
    ];

    let credit_hint = range_hint(&app.bounds.subject_credits);
    for (i, subject) in app.subjects.iter().enumerate() {
        let grade_focused = focused == Field::Grade(i);
        let grade_style = if grade_focused {
            colors.field_focus_style
        } else {
            colors.field_style
        };

        lines.push(Line::from(vec![
            Span::styled(format!("Subject {:>2}  Credits ", i + 1), label_style),
            field_span(
                &subject.credits,
                &credit_hint,
                focused == Field::Credit(i),
                colors,
            ),
            Span::styled("  Grade ", label_style),
            Span::styled(format!(" < {} > ", subject.grade), grade_style),
            Span::styled(
                format!("  {} pts", subject.grade.points()),
                Style::default().fg(colors.muted),
            ),
        ]));
    }

    if app.subjects.is_empty() {
        lines.push(Line::from(Span::styled(
            "Enter the number of subjects and press Enter",
            Style::default().fg(colors.muted),
        )));
    }

    // Keep the focused row on screen: line 0 is the count, subject i sits on line i + 2
    let focused_line = match focused {
        Field::Credit(i) | Field::Grade(i) => i + 2,
        _ => 0,
    };
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = focused_line.saturating_sub(visible.saturating_sub(1));

    let block = Block::bordered()
        .title(" Subjects ")
        .border_style(Style::default().fg(colors.border));
    let form = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(form, area);
}

fn render_cgpa_form(frame: &mut Frame, area: Rect, app: &App, colors: &ThemeColors) {
    let focused = app.focused_field();
    let label_style = Style::default().fg(colors.label_color);

    let lines: Vec<Line> = CgpaField::ALL
        .iter()
        .flat_map(|field| {
            let range = match field {
                CgpaField::PreviousCgpa | CgpaField::CurrentGpa => &app.bounds.average,
                CgpaField::TotalCredits => &app.bounds.total_credits,
                CgpaField::CurrentCredits => &app.bounds.current_credits,
            };
            let hint = range_hint(range);
            let value = app.text_value(Field::Cgpa(*field)).unwrap_or_default();
            [
                Line::from(vec![
                    Span::styled(format!("{:<16}", field.label()), label_style),
                    field_span(value, &hint, focused == Field::Cgpa(*field), colors),
                ]),
                Line::from(""),
            ]
        })
        .collect();

    let block = Block::bordered()
        .title(" Cumulative ")
        .border_style(Style::default().fg(colors.border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_result(frame: &mut Frame, area: Rect, card: Option<&ResultCard>, colors: &ThemeColors) {
    let block = Block::bordered()
        .title(" Result ")
        .border_style(Style::default().fg(colors.border));

    let Some(card) = card else {
        let hint = Paragraph::new("Fill in the form and press Enter to calculate")
            .style(Style::default().fg(colors.muted))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let shown = card.count_up.current();
    let remark_color = colors.remark_color(card.result.remark);

    let mut score_spans = vec![
        Span::raw(format!("Your {}: ", card.kind.label())),
        Span::styled(format_score(shown), Style::default().fg(remark_color).bold()),
        Span::raw("  "),
    ];
    score_spans.extend(score_bar(shown, 10.0, 20, remark_color, colors).spans);

    let lines = vec![
        Line::from(score_spans),
        Line::from(vec![
            Span::raw("Performance: "),
            Span::styled(
                format!("{} {}", card.result.remark.message(), card.result.remark.badge()),
                Style::default().fg(remark_color),
            ),
        ]),
        Line::from(vec![
            Span::raw("Total Credits: "),
            Span::styled(
                format_score(card.result.total_weight),
                Style::default().fg(colors.title_color),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn score_bar(
    score: f64,
    max_score: f64,
    width: usize,
    fill_color: Color,
    colors: &ThemeColors,
) -> Line<'static> {
    let ratio = if max_score > 0.0 {
        (score / max_score).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled("█".repeat(filled), Style::default().fg(fill_color)));
    }
    if empty > 0 {
        spans.push(Span::styled("░".repeat(empty), Style::default().fg(colors.bar_empty)));
    }

    Line::from(spans)
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, colors: &ThemeColors) {
    let text = if let Some((ref msg, kind, _)) = app.flash_message {
        let msg_color = match kind {
            FlashKind::Success => colors.flash_success,
            FlashKind::Error => colors.flash_error,
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints = [
            ("↑/↓", ":field "),
            ("←/→", ":grade "),
            ("Enter", ":calculate "),
            ("Tab", ":switch "),
            ("?", ":help "),
            ("Esc", ":quit"),
        ];

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(colors.status_key_color)));
            spans.push(Span::styled(*label, Style::default().fg(colors.muted)));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(colors.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn render_help_popup(frame: &mut Frame, colors: &ThemeColors) {
    let popup_area = centered_rect_fixed(50, 13, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .title_style(colors.popup_title)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.background).fg(colors.text));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(colors.status_key_color).bold();
    let entries = [
        ("Up / Down     ", "Move between fields"),
        ("Left / Right  ", "Change grade"),
        ("S A B C D E   ", "Pick grade directly"),
        ("Enter         ", "Generate rows / calculate"),
        ("Tab           ", "Switch GPA / CGPA"),
        ("Ctrl+D        ", "Toggle dark mode"),
        ("?             ", "Show this help"),
        ("Esc / Ctrl+C  ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*desc)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(colors.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}
