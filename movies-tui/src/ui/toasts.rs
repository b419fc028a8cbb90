use super::*;
use crate::app::NotificationKind;

const MAX_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 3;

/// Stack live toasts in the top-right corner, newest at the bottom.
pub fn render_toasts(frame: &mut Frame, app: &App) {
    let screen = frame.area();
    let mut y = screen.y + 1;

    for toast in app.toasts.iter() {
        if y + TOAST_HEIGHT > screen.bottom() {
            break;
        }
        let message = &toast.notification.message;
        let width = (message.chars().count() as u16 + 4)
            .min(MAX_WIDTH)
            .min(screen.width);
        let area = Rect {
            x: screen.right().saturating_sub(width + 1),
            y,
            width,
            height: TOAST_HEIGHT,
        };

        let color = match toast.notification.kind {
            NotificationKind::Info => Color::White,
            NotificationKind::Error => Color::Red,
        };
        let text = utils::truncate(message, width.saturating_sub(4) as usize);

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(color))).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .padding(Padding::horizontal(1)),
            ),
            area,
        );
        y += TOAST_HEIGHT;
    }
}
