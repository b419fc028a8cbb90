use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Helper function to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(popup_layout[1])[1]
}

/// Cut `s` to at most `max` chars, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Amélie", 10), "Amélie");
        assert_eq!(truncate("Amélie", 4), "Amé…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn centered_rect_fits_inside_small_areas() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = centered_rect(60, 20, area);
        assert_eq!(popup, area);

        let popup = centered_rect(10, 4, area);
        assert_eq!(popup, Rect::new(5, 3, 10, 4));
    }
}
