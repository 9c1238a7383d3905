// Notification banner overlay.

use ratatui::{prelude::*, widgets::*};

use crate::state::Toast;

/// Draw the notice in the bottom-right corner, above the status bar.
pub fn draw_toast(frame: &mut Frame, toast: &Toast) {
    let area = frame.area();

    let max_width = area.width.saturating_sub(4).max(1);
    let text_width = u16::try_from(toast.message.chars().count()).unwrap_or(u16::MAX);
    let toast_width = text_width.saturating_add(4).min(max_width);
    let toast_height = 3;
    let toast_x = area.width.saturating_sub(toast_width + 2);
    let toast_y = area.height.saturating_sub(toast_height + 2);

    let toast_area = Rect::new(toast_x, toast_y, toast_width, toast_height).intersection(area);

    // Clear the area behind the banner
    frame.render_widget(Clear, toast_area);

    let banner = Paragraph::new(toast.message.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(banner, toast_area);
}
