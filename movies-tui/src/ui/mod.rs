use crate::app::{App, Focus, SearchStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

mod movie_grid;
mod movie_modal;
mod search_bar;
mod toasts;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(1), // Title + paging
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Results
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, app, root[0]);
    search_bar::render_search_bar(frame, app, root[1]);
    render_body(frame, app, root[2]);
    render_controls(frame, app, root[3]);

    if app.search.selected.is_some() {
        movie_modal::render_movie_modal(frame, app);
    }

    if !app.toasts.is_empty() {
        toasts::render_toasts(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    const LABEL: &str = " Movie Search";

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(LABEL.len() as u16),
            Constraint::Min(0),
        ])
        .split(area);

    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_fetching() {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, cols[0], &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(LABEL, Style::default().fg(Color::Yellow))),
        cols[1],
    );

    let paging = if app.search.total_pages > 0 {
        format!(
            "Page {}/{}  ·  {} results ",
            app.search.page, app.search.total_pages, app.search.total_results
        )
    } else {
        String::new()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(paging, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Right),
        cols[2],
    );
}

fn render_body(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = (app.focus == Focus::Grid).then_some(app.grid_index);
    let page = app.search.page;

    let columns = match app.search.status {
        SearchStatus::Idle => {
            render_message(
                frame,
                area,
                "Type a movie title and press Enter to search.",
                Style::default().fg(Color::DarkGray),
            );
            None
        }
        // Stale or previous-page data stays on screen, dimmed, while loading.
        SearchStatus::Loading => match app.snapshot().and_then(|s| s.data) {
            Some(stale) => Some(movie_grid::render_movie_grid(
                frame,
                &stale.results,
                area,
                focused,
                Some(page),
            )),
            None => {
                render_loader(frame, app, area);
                None
            }
        },
        SearchStatus::Error => {
            render_error(frame, app, area);
            None
        }
        SearchStatus::Success if app.search.movies.is_empty() => {
            render_message(
                frame,
                area,
                "No results.",
                Style::default().fg(Color::DarkGray),
            );
            None
        }
        SearchStatus::Success => Some(movie_grid::render_movie_grid(
            frame,
            &app.search.movies,
            area,
            focused,
            None,
        )),
    };

    if let Some(columns) = columns {
        app.grid_columns = columns;
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, style: Style) {
    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(Span::styled(message, style))])
        .alignment(Alignment::Center)
        .block(results_block(" Results "));
    frame.render_widget(paragraph, area);
}

fn render_loader(frame: &mut Frame, app: &App, area: Rect) {
    let text = format!("Searching for \"{}\"...", app.search.query);
    render_message(frame, area, &text, Style::default().fg(Color::Yellow));
}

fn render_error(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("")];
    if let Some(error) = &app.search.error {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(detail) = app.snapshot().and_then(|s| s.error) {
        lines.push(Line::from(Span::styled(
            detail,
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to search again.",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(results_block(" Results "));
    frame.render_widget(paragraph, area);
}

fn results_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .padding(Padding::horizontal(1))
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let spans = if app.search.selected.is_some() {
        vec![key("Esc/Enter"), Span::raw(": Close")]
    } else {
        match app.focus {
            Focus::SearchBox => vec![
                key("Enter"),
                Span::raw(": Search  "),
                key("Tab/↓"),
                Span::raw(": Results  "),
                key("Ctrl+X"),
                Span::raw(": Clear  "),
                key("Esc"),
                Span::raw(": Quit"),
            ],
            Focus::Grid => {
                let mut spans = vec![
                    key("←↓↑→/hjkl"),
                    Span::raw(": Navigate  "),
                    key("Enter"),
                    Span::raw(": Details  "),
                ];
                if app.search.has_prev_page() || app.search.has_next_page() {
                    spans.push(key("[ ]"));
                    spans.push(Span::raw(": Page  "));
                }
                spans.extend([key("/"), Span::raw(": Search  "), key("q"), Span::raw(": Quit")]);
                spans
            }
        }
    };

    let controls = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(controls, area);
}
