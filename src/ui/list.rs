// List rendering for workflow status and the file browser.
// Provides styled list views with loading and empty states.

use ratatui::{prelude::*, widgets::*};

use crate::render::{StatusLine, Tone, format_relative_time};
use crate::state::{FileBrowserState, StatusPanel};
use crate::tasks::files::FOLDERS;

/// Get color for a status tone.
fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::Green,
        Tone::Failure => Color::Red,
        Tone::Neutral => Color::Gray,
        Tone::Pending => Color::Yellow,
    }
}

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

fn status_item(line: &StatusLine) -> ListItem<'_> {
    let mut spans = vec![
        Span::styled(line.title.as_str(), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(line.state.as_str(), Style::default().fg(tone_color(line.tone))),
    ];
    if let Some(created_at) = &line.created_at {
        spans.push(Span::styled(
            format!("  {}", format_relative_time(created_at)),
            Style::default().fg(Color::DarkGray),
        ));
    }
    ListItem::new(Line::from(spans))
}

/// Render the recent workflow runs.
pub fn render_status_list(frame: &mut Frame, panel: &StatusPanel, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Recent workflow runs ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &panel.lines {
        Some(lines) if lines.is_empty() => render_empty(frame, inner, "No workflow runs yet"),
        Some(lines) => {
            let items: Vec<ListItem> = lines.iter().map(status_item).collect();
            frame.render_widget(List::new(items), inner);
        }
        _ if panel.is_refreshing() => render_loading(frame, inner, "Loading runs"),
        _ => render_empty(frame, inner, "Press r to refresh"),
    }
}

/// Folder selector, file list and content viewer.
pub fn render_file_browser(frame: &mut Frame, browser: &mut FileBrowserState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let mut folder_spans = vec![Span::styled(" Folder: ", Style::default().fg(Color::DarkGray))];
    for (i, folder) in FOLDERS.iter().enumerate() {
        let style = if i == browser.folder_index {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        folder_spans.push(Span::styled(*folder, style));
        folder_spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(folder_spans)), rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[1]);

    render_file_list(frame, browser, columns[0]);
    render_file_content(frame, browser, columns[1]);
}

fn render_file_list(frame: &mut Frame, browser: &mut FileBrowserState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Files ");

    match &browser.files.items {
        Some(items) if !items.is_empty() => {
            let list_items: Vec<ListItem> = items
                .iter()
                .map(|item| ListItem::new(item.name.as_str()))
                .collect();

            let list_widget = List::new(list_items)
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");

            frame.render_stateful_widget(list_widget, area, &mut browser.files.list_state);
        }
        items => {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            if browser.is_listing() {
                render_loading(frame, inner, "Loading files");
            } else if items.is_some() {
                render_empty(frame, inner, "No files in this folder");
            } else {
                render_empty(frame, inner, "Press f to list files");
            }
        }
    }
}

fn render_file_content(frame: &mut Frame, browser: &FileBrowserState, area: Rect) {
    let Some(file) = &browser.content else {
        let block = Block::default().borders(Borders::ALL).title(" Content ");
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if browser.is_loading_file() {
            render_loading(frame, inner, "Loading file");
        } else {
            render_empty(frame, inner, "Select a file and press Enter");
        }
        return;
    };

    let sha = file
        .sha
        .as_deref()
        .map(|sha| format!(" @{}", sha.chars().take(7).collect::<String>()))
        .unwrap_or_default();
    let loading = if browser.is_loading_file() { " ⏳" } else { "" };
    let title = format!(" {}{}{} ", file.path, sha, loading);

    let text = Paragraph::new(file.text.as_str())
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((browser.content_scroll, 0));
    frame.render_widget(text, area);
}
