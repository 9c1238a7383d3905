// Form rendering for the config, scraper and translator tabs.

use ratatui::{prelude::*, widgets::*};

use crate::state::{ConfigForm, ScraperForm, TextInput, TranslatorFocus, TranslatorForm};

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// One bordered, single-line field.
fn render_field(frame: &mut Frame, input: &TextInput, focused: bool, area: Rect) {
    let mut spans = vec![Span::raw(input.display())];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(field_style(focused))
        .title(format!(" {} ", input.label));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn hint(frame: &mut Frame, text: &str, area: Rect) {
    let widget = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(widget, area);
}

pub fn draw_config_form(frame: &mut Frame, form: &ConfigForm, area: Rect) {
    let mut constraints = vec![Constraint::Length(3); form.fields.len()];
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, input) in form.fields.iter().enumerate() {
        render_field(frame, input, i == form.focus, chunks[i]);
    }

    hint(
        frame,
        " ↑↓ Field  ↵ Save  ^U Clear field",
        chunks[form.fields.len()],
    );
}

pub fn draw_scraper_form(frame: &mut Frame, form: &ScraperForm, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(field_style(true))
        .title(format!(
            " {} ({} chars) ",
            form.html.label,
            form.html.value.chars().count()
        ));

    let body = if form.html.value.is_empty() {
        Paragraph::new("Paste the chapter list HTML here")
            .style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(form.html.value.as_str())
    };
    frame.render_widget(body.wrap(Wrap { trim: false }).block(block), chunks[0]);

    hint(frame, " ↵ Run scraper  ^U Clear", chunks[1]);
}

pub fn draw_translator_form(frame: &mut Frame, form: &TranslatorForm, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    render_field(
        frame,
        &form.batch_size,
        form.focus == TranslatorFocus::BatchSize,
        chunks[0],
    );

    let force_focused = form.focus == TranslatorFocus::Force;
    let checkbox = if form.force { "[x]" } else { "[ ]" };
    let force = Paragraph::new(format!("{} Re-translate existing chapters", checkbox)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(field_style(force_focused))
            .title(" Force "),
    );
    frame.render_widget(force, chunks[1]);

    hint(frame, " ↑↓ Field  Space Toggle force  ↵ Run translator", chunks[2]);
}
