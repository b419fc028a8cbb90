use super::*;

pub fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::SearchBox && app.search.selected.is_none();

    let search_text = if app.search_input.value.is_empty() {
        if focused {
            "█".to_string()
        } else {
            "Search movies...".to_string()
        }
    } else if focused {
        let (before, after) = app.search_input.split_at_cursor();
        format!("{}█{}", before, after)
    } else {
        app.search_input.value.clone()
    };

    let (text_style, border_style) = if focused {
        (Style::default().fg(Color::White), Style::default().fg(Color::Yellow))
    } else {
        (
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let search_box = Paragraph::new(search_text)
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Search ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, area);
}
