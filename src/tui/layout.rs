use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::config::Config;
use crate::domain::ContentItem;
use crate::overlay::BodyState;
use crate::paging::DisclosureMode;
use crate::tui::app::{ActiveSection, TuiApp, SECTION_OFFSETS};
use crate::tui::nav::nav_view_model;

pub fn render(frame: &mut Frame, app: &TuiApp, config: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navbar
            Constraint::Min(10),   // Section content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_navbar(frame, app, config, chunks[0]);
    render_section(frame, app, config, chunks[1]);
    render_status_bar(frame, app, config, chunks[2]);

    if app.overlay.is_open() {
        render_overlay(frame, app, config, frame.area());
    }
}

fn render_navbar(frame: &mut Frame, app: &TuiApp, config: &Config, area: Rect) {
    let vm = nav_view_model(&SECTION_OFFSETS, app.scroll_y());

    let mut spans = Vec::new();
    for (i, (id, _)) in SECTION_OFFSETS.iter().enumerate() {
        let active = *id == vm.active_section;
        // Wide dot for the active section, narrow for the rest
        let dot = if vm.dot_widths[i] > 10 { "━" } else { "·" };

        let style = if active {
            Style::default()
                .fg(config.colors.active_border)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(config.colors.inactive_border)
        };

        spans.push(Span::styled(format!(" {} {} ", dot, id), style));
    }

    let border_style = if vm.navbar_scrolled {
        Style::default().fg(config.colors.active_border)
    } else {
        Style::default().fg(config.colors.inactive_border)
    };

    let block = Block::default()
        .title(" engawa ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_section(frame: &mut Frame, app: &TuiApp, config: &Config, area: Rect) {
    match app.active_section {
        ActiveSection::Home => {
            let items = app.home_items();
            let title = format!(" Home ({} recommended) ", items.len());
            render_item_list(frame, app, config, area, &items, app.home_index, title, None);
        }
        ActiveSection::Blog => {
            let window = app.blog_window();
            let items: Vec<&ContentItem> = window.items.iter().collect();
            let title = format!(" Blog ({}) ", app.posts.len());
            let footer = if window.page_count > 1 {
                Some(format!(
                    " page {}/{}  n/p ",
                    window.page_index + 1,
                    window.page_count
                ))
            } else {
                None
            };
            render_item_list(frame, app, config, area, &items, app.blog_index, title, footer);
        }
        ActiveSection::Product => {
            let visible = app.visible_products();
            let items: Vec<&ContentItem> = visible.iter().collect();
            let title = format!(" Product ({}) ", app.products.len());
            let footer = match app.product_state.mode {
                DisclosureMode::Incremental => {
                    if app
                        .product_state
                        .can_reveal_more(&app.disclosure_policy, app.products.len())
                    {
                        Some(format!(
                            " {}/{}  m:More ",
                            app.product_state.shown,
                            app.products.len()
                        ))
                    } else {
                        None
                    }
                }
                DisclosureMode::Paged => Some(format!(
                    " page {}/{}  n/p ",
                    app.product_state.page_index + 1,
                    app.product_state
                        .page_count(&app.disclosure_policy, app.products.len())
                )),
            };
            render_item_list(
                frame,
                app,
                config,
                area,
                &items,
                app.product_index,
                title,
                footer,
            );
        }
        ActiveSection::About => render_about(frame, config, area),
    }
}

#[allow(clippy::too_many_arguments)]
fn render_item_list(
    frame: &mut Frame,
    app: &TuiApp,
    config: &Config,
    area: Rect,
    items: &[&ContentItem],
    selected: usize,
    title: String,
    footer: Option<String>,
) {
    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let marker = if item.pinned { "★" } else { " " };
            let date = item.display_date();
            let date = if date.is_empty() {
                "          ".to_string()
            } else {
                date
            };

            let mut spans = vec![Span::raw(format!("{} {} {}", marker, date, item.display_title()))];
            for tag in &item.tags {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    format!("[{}]", tag),
                    Style::default().fg(config.tags.color(tag)),
                ));
            }

            let style = if i == selected && !app.overlay.is_open() {
                Style::default()
                    .bg(config.colors.selection_bg)
                    .fg(config.colors.selection_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.colors.active_border));
    if let Some(footer) = footer {
        block = block.title_bottom(footer);
    }

    let list = List::new(list_items).block(block);
    frame.render_widget(list, area);
}

fn render_about(frame: &mut Frame, config: &Config, area: Rect) {
    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.colors.active_border));

    let text = Text::from(vec![
        Line::from(""),
        Line::from("  A terminal reader for a personal publishing site."),
        Line::from(""),
        Line::from(format!("  Site: {}", config.site.base_url)),
    ]);

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

/// The overlay is drawn over the section content, the way the site lays
/// a reader panel over the page.
fn render_overlay(frame: &mut Frame, app: &TuiApp, config: &Config, area: Rect) {
    let area = centered_rect(area, 80, 85);
    frame.render_widget(Clear, area);

    let meta = app.overlay.meta();

    let mut lines = Vec::new();
    lines.push(Line::from(""));

    let mut meta_spans = vec![Span::styled(
        meta.date.clone(),
        Style::default().fg(config.colors.metadata_date),
    )];
    for tag in &meta.tags {
        meta_spans.push(Span::raw("  "));
        meta_spans.push(Span::styled(
            format!("[{}]", tag),
            Style::default().fg(config.tags.color(tag)),
        ));
    }
    lines.push(Line::from(meta_spans));

    if let Some(author) = &meta.author {
        lines.push(Line::from(Span::styled(
            format!("By: {}", author),
            Style::default().fg(config.colors.metadata_author),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("─".repeat(area.width.saturating_sub(2) as usize)));
    lines.push(Line::from(""));

    match app.overlay.body() {
        BodyState::Loading => lines.push(Line::from("読み込み中...")),
        BodyState::Failed(message) => lines.push(Line::from(message.clone())),
        // Bodies arrive from the resolver already as plain text
        BodyState::Ready(body) => {
            for line in body.lines() {
                lines.push(Line::from(line.to_string()));
            }
        }
        BodyState::Empty => {}
    }

    let title = app
        .overlay
        .open_key()
        .map(|key| format!(" {} ", key))
        .unwrap_or_else(|| " Reader ".to_string());

    let block = Block::default()
        .title(title)
        .title_bottom(" Esc:Close  Backspace:Back  o:Open ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.colors.active_border));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.overlay_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, config: &Config, area: Rect) {
    let status = if app.is_loading {
        "Loading...".to_string()
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else if app.overlay.is_open() {
        "j/k:Scroll  Esc:Close  Backspace:Back  f:Forward  o:Open  q:Quit".to_string()
    } else {
        "j/k:Navigate  Tab:Section  Enter:Read  n/p:Page  m:More  R:Refresh  q:Quit".to_string()
    };

    let paragraph = Paragraph::new(status).style(
        Style::default()
            .fg(config.colors.status_fg)
            .bg(config.colors.status_bg),
    );

    frame.render_widget(paragraph, area);
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
