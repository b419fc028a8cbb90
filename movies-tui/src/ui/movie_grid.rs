use super::*;
use tmdb::Movie;

const CARD_WIDTH: u16 = 28;
const CARD_HEIGHT: u16 = 6;

/// Render `movies` as a grid of cards and return the column count used.
///
/// `loading_page` is set while the cards are stale data shown during a fetch;
/// they are drawn dimmed.
pub fn render_movie_grid(
    frame: &mut Frame,
    movies: &[Movie],
    area: Rect,
    focused: Option<usize>,
    loading_page: Option<u32>,
) -> usize {
    let title = match loading_page {
        Some(page) => format!(" Results ({}) · loading page {}... ", movies.len(), page),
        None => format!(" Results ({}) ", movies.len()),
    };
    let dimmed = loading_page.is_some();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return 1;
    }

    let columns = (inner.width / CARD_WIDTH).max(1) as usize;
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;

    // Scroll so the focused row is always on screen.
    let focused_row = focused.unwrap_or(0) / columns;
    let first_row = focused_row.saturating_sub(visible_rows - 1);
    let card_width = inner.width / columns as u16;

    for (i, movie) in movies
        .iter()
        .enumerate()
        .skip(first_row * columns)
        .take(visible_rows * columns)
    {
        let row = (i / columns - first_row) as u16;
        let col = (i % columns) as u16;
        let y = inner.y + row * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(inner.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let card = Rect {
            x: inner.x + col * card_width,
            y,
            width: card_width,
            height,
        };
        render_card(frame, movie, card, focused == Some(i), dimmed);
    }

    columns
}

fn render_card(frame: &mut Frame, movie: &Movie, area: Rect, focused: bool, dimmed: bool) {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = match (dimmed, focused) {
        (true, _) => Style::default().fg(Color::DarkGray),
        (false, true) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(Color::Cyan),
    };
    let text_style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let year = movie
        .release_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "----".to_string());

    let lines = vec![
        Line::from(Span::styled(
            utils::truncate(&movie.title, inner_width),
            title_style,
        )),
        Line::from(vec![
            Span::styled(year, Style::default().fg(Color::Magenta)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1}", movie.vote_average),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(Span::styled(
            utils::truncate(movie.overview_text(), inner_width * 2),
            text_style,
        )),
    ];

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(card, area);
}
