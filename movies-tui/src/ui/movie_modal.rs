use super::utils::centered_rect;
use super::*;

const POSTER_SIZE: &str = "w500";

pub fn render_movie_modal(frame: &mut Frame, app: &App) {
    let Some(movie) = &app.search.selected else {
        return;
    };

    let area = centered_rect(72, 20, frame.area());
    frame.render_widget(Clear, area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let mut lines = vec![Line::from("")];
    if let Some(original) = movie
        .original_title
        .as_deref()
        .filter(|o| *o != movie.title)
    {
        lines.push(Line::from(vec![
            Span::styled("Original title: ", label),
            Span::styled(original, value),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("Release date: ", label),
        Span::styled(
            movie
                .release_date
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or("Unknown"),
            value,
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Rating: ", label),
        Span::styled(
            format!("{:.1}/10", movie.vote_average),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(format!(" ({} votes)", movie.vote_count), label),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(movie.overview_text(), value)));
    lines.push(Line::from(""));
    if let Some(url) = movie.poster_url(POSTER_SIZE) {
        lines.push(Line::from(vec![
            Span::styled("Poster: ", label),
            Span::styled(url, Style::default().fg(Color::Cyan)),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(
                format!(" {} ", movie.title),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(Span::styled(" Esc: Close ", label)).right_aligned())
            .padding(Padding::horizontal(2)),
    );

    frame.render_widget(paragraph, area);
}
