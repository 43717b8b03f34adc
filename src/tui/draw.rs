//! Layout and rendering: header, transcript, suggestions, input bar.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, ChatMessage};
use crate::tui::constants::{ACCENT, ACCENT_SECONDARY, SPINNER};
use crate::tui::text::{is_rtl, parse_emphasis, wrap_chunk};

pub(crate) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(f, app, rows[0]);
    draw_transcript(f, app, rows[1]);
    draw_suggestions(f, app, rows[2]);
    draw_input(f, app, rows[3]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let title = app.title.as_deref().unwrap_or("Chriki");
    let header = Line::from(vec![
        Span::styled(
            format!(" ◆ {} ", title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {} ", app.model_name),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);
    f.render_widget(Paragraph::new(header), area);
}

fn draw_transcript(f: &mut Frame, app: &mut App, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();

    for message in &app.messages {
        match message {
            ChatMessage::User(text) => {
                for wrapped in wrap_chunk(text, width.saturating_sub(2)) {
                    lines.push(Line::from(vec![
                        Span::styled("› ", Style::default().fg(ACCENT_SECONDARY)),
                        Span::styled(wrapped, Style::default().fg(ACCENT_SECONDARY)),
                    ]));
                }
                lines.push(Line::default());
            }
            ChatMessage::Assistant { reply, reveal } => {
                let visible = reveal.visible().min(reply.formatted.chunks.len());
                for chunk in &reply.formatted.chunks[..visible] {
                    let rtl = is_rtl(chunk);
                    for wrapped in wrap_chunk(chunk, width) {
                        let mut line = Line::from(parse_emphasis(&wrapped));
                        if rtl {
                            line = line.alignment(Alignment::Right);
                        }
                        lines.push(line);
                    }
                    lines.push(Line::default());
                }
                if !reveal.done() {
                    lines.push(Line::from(Span::styled(
                        "…",
                        Style::default().add_modifier(Modifier::DIM),
                    )));
                    lines.push(Line::default());
                }
            }
            ChatMessage::Notice(text) => {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC),
                )));
                lines.push(Line::default());
            }
            ChatMessage::Thinking => {
                let frame = SPINNER[app.spinner_frame % SPINNER.len()];
                lines.push(Line::from(Span::styled(
                    format!("{} rani nfakker...", frame),
                    Style::default().fg(ACCENT),
                )));
            }
        }
    }

    // clamp scroll to the available overflow, then show the tail
    let height = area.height as usize;
    let max_scroll = lines.len().saturating_sub(height);
    if app.scroll > max_scroll {
        app.scroll = max_scroll;
    }
    let end = lines.len() - app.scroll;
    let start = end.saturating_sub(height);
    let visible: Vec<Line> = lines[start..end].to_vec();

    f.render_widget(Paragraph::new(visible), area);
}

fn draw_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let suggestions = app.current_suggestions();
    if suggestions.is_empty() || app.is_thinking() {
        return;
    }
    let mut spans = vec![Span::styled(
        " Alt+n: ",
        Style::default().add_modifier(Modifier::DIM),
    )];
    for (i, suggestion) in suggestions.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{}) {}", i + 1, suggestion),
            Style::default().fg(ACCENT).add_modifier(Modifier::DIM),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let hint = if app.is_thinking() {
        " Esc: annuler "
    } else {
        " Enter: envoyer · Esc: sortir "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(hint);
    let text = Line::from(vec![
        Span::raw(app.input.clone()),
        Span::styled("▌", Style::default().fg(ACCENT)),
    ]);
    f.render_widget(Paragraph::new(text).block(block), area);
}
