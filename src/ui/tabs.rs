// Tab bar rendering.
// Highlights the single active tab and flags an outstanding status refresh.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};

/// Draw the tab bar at the top of the screen.
pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let tab_titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            let title = if *tab == Tab::Status && app.status.is_refreshing() {
                format!("{} ⟳", tab.title())
            } else {
                tab.title().to_string()
            };

            let style = if app.is_active(*tab) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(Span::styled(title, style))
        })
        .collect();

    let selected_index = Tab::ALL
        .iter()
        .position(|t| app.is_active(*t))
        .unwrap_or(0);

    let repo_title = if app.config().is_configured() {
        format!(" quire · {}/{} ", app.config().owner, app.config().repo)
    } else {
        " quire · not configured ".to_string()
    };

    let tabs_widget = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(repo_title)
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
