// UI module for rendering the TUI.
// Contains widgets for tabs, forms, lists, and the notification banner.

mod form;
mod list;
mod tabs;
mod toast;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    if let Some(notice) = &app.toast {
        toast::draw_toast(frame, notice);
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the main content area based on active tab.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.active_tab() {
        Tab::Config => form::draw_config_form(frame, &app.config_form, area),
        Tab::Scraper => form::draw_scraper_form(frame, &app.scraper_form, area),
        Tab::Translator => form::draw_translator_form(frame, &app.translator_form, area),
        Tab::Files => list::render_file_browser(frame, &mut app.files, area),
        Tab::Status => list::render_status_list(frame, &app.status, area),
    }
}

fn key_hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::raw(key),
        Span::styled(label, Style::default().fg(Color::DarkGray)),
    ]
}

/// Draw the status bar with keybinding hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints: Vec<Span> = Vec::new();
    hints.extend(key_hint(" Tab ", "Switch"));

    match app.active_tab() {
        Tab::Files => {
            hints.extend(key_hint("  ←→ ", "Folder"));
            hints.extend(key_hint("  f ", "List"));
            hints.extend(key_hint("  ↵ ", "Open"));
            hints.extend(key_hint("  PgUp/Dn ", "Scroll"));
        }
        Tab::Status => hints.extend(key_hint("  r ", "Refresh")),
        _ => {}
    }

    hints.extend(key_hint("  ^R ", "Refresh status"));
    hints.extend(key_hint("  F1 ", "Help"));
    if app.active_tab().takes_text() {
        hints.extend(key_hint("  ^Q ", "Quit"));
    } else {
        hints.extend(key_hint("  q ", "Quit"));
    }

    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 56;
    let popup_height = 18;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height).intersection(area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let entry = |key: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", key), Style::default().fg(Color::Cyan)),
            Span::raw(text),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        entry("Tab/Shift-Tab", "Switch tabs"),
        entry("↑/↓", "Move between fields / files"),
        entry("Enter", "Save / run workflow / open file"),
        entry("Space", "Toggle force (translator)"),
        entry("Ctrl-U", "Clear the focused field"),
        entry("←/→", "Change folder (files)"),
        entry("f", "List files in folder"),
        entry("PgUp/PgDn", "Scroll file content"),
        entry("Ctrl-R", "Refresh workflow status"),
        entry("F1", "Show/hide this help"),
        entry("Ctrl-Q", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("F1", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_every_tab() {
        let mut app = App::new(Box::new(MemoryStore::new()));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        for tab in Tab::ALL {
            app.open_tab(tab.id());
            terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        }

        let text = buffer_text(&terminal);
        assert!(text.contains("Recent workflow runs"));
        assert!(text.contains("not configured"));
    }

    #[test]
    fn test_draw_toast_and_help_on_small_terminal() {
        let mut app = App::new(Box::new(MemoryStore::new()));
        let _ = app.dispatch_scraper();
        app.show_help = true;
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();

        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
    }
}
