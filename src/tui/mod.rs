pub mod app;
pub mod event;
pub mod layout;
pub mod nav;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::app::{AppContext, Result};
use crate::domain::{ContentItem, ContentKind};
use crate::overlay::NavigationPort;
use crate::recommend::ThreadRandom;

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut tui_app = TuiApp::new(&ctx.config.paging);
    let event_handler = EventHandler::new(Duration::from_millis(100));

    // Body fetches resolve on spawned tasks and report back here; the
    // overlay decides whether each result is still wanted.
    let (body_tx, mut body_rx) = mpsc::unbounded_channel::<(String, Result<String>)>();

    // Load initial data
    tui_app.is_loading = true;
    terminal.draw(|frame| layout::render(frame, &tui_app, &ctx.config))?;
    load_collections(&mut tui_app, &ctx).await;
    tui_app.is_loading = false;

    loop {
        terminal.draw(|frame| layout::render(frame, &tui_app, &ctx.config))?;

        while let Ok((key, result)) = body_rx.try_recv() {
            tui_app.overlay.apply_body(&key, result);
        }

        match event_handler.next()? {
            AppEvent::Key(key) => {
                let action = Action::from(key);
                match action {
                    Action::Quit => {
                        tui_app.should_quit = true;
                    }
                    Action::MoveUp => {
                        if tui_app.overlay.is_open() {
                            tui_app.overlay_scroll = tui_app.overlay_scroll.saturating_sub(1);
                        } else {
                            tui_app.move_up();
                        }
                    }
                    Action::MoveDown => {
                        if tui_app.overlay.is_open() {
                            tui_app.overlay_scroll = tui_app.overlay_scroll.saturating_add(1);
                        } else {
                            tui_app.move_down();
                        }
                    }
                    Action::NextPage => {
                        tui_app.next_page();
                    }
                    Action::PrevPage => {
                        tui_app.prev_page();
                    }
                    Action::NextSection => {
                        tui_app.active_section = tui_app.active_section.next();
                    }
                    Action::PrevSection => {
                        tui_app.active_section = tui_app.active_section.prev();
                    }
                    Action::RevealMore => {
                        tui_app.reveal_more();
                    }
                    Action::Select => {
                        if !tui_app.overlay.is_open() {
                            if let Some(item) = tui_app.selected_item().cloned() {
                                open_overlay(&mut tui_app, &ctx, &body_tx, item);
                            }
                        }
                    }
                    Action::Escape => {
                        tui_app.overlay.handle_escape(&mut tui_app.history);
                    }
                    Action::Back => {
                        if let Some(path) = tui_app.history.back().map(str::to_string) {
                            tui_app.overlay.handle_pop(&path);
                        }
                    }
                    Action::Forward => {
                        if let Some(path) = tui_app.history.forward().map(str::to_string) {
                            tui_app.overlay.handle_pop(&path);
                        }
                    }
                    Action::OpenInBrowser => {
                        open_in_browser(&mut tui_app, &ctx);
                    }
                    Action::Refresh => {
                        tui_app.is_loading = true;
                        terminal.draw(|frame| layout::render(frame, &tui_app, &ctx.config))?;

                        load_collections(&mut tui_app, &ctx).await;

                        tui_app.is_loading = false;
                        tui_app.set_status(format!(
                            "Refreshed: {} posts, {} products",
                            tui_app.posts.len(),
                            tui_app.products.len()
                        ));
                    }
                    Action::None => {}
                }
            }
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

fn open_overlay(
    tui_app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    body_tx: &mpsc::UnboundedSender<(String, Result<String>)>,
    item: ContentItem,
) {
    tui_app.clear_status();
    tui_app.overlay_scroll = 0;
    let request = tui_app.overlay.open_item(&item, &mut tui_app.history);

    let resolver = ctx.resolver.clone();
    let tx = body_tx.clone();
    tokio::spawn(async move {
        let result = resolver.resolve_body(&request.item).await;
        let _ = tx.send((request.key, result));
    });
}

fn open_in_browser(tui_app: &mut TuiApp, ctx: &Arc<AppContext>) {
    // With the overlay open, the deep link for the open item; otherwise
    // the selected item's deep link.
    let path = if tui_app.overlay.is_open() {
        tui_app.history.current_path().to_string()
    } else if let Some(item) = tui_app.selected_item() {
        format!("/{}/{}", item.kind.path_segment(), item.key())
    } else {
        return;
    };

    let base = ctx.config.site.base_url.trim_end_matches('/');
    let url = format!("{}{}", base, path);

    if let Err(e) = open::that(&url) {
        tui_app.set_status(format!("Failed to open browser: {}", e));
    } else {
        tui_app.set_status(format!("Opened {}", url));
    }
}

async fn load_collections(tui_app: &mut TuiApp, ctx: &Arc<AppContext>) {
    let (posts, products) = tokio::join!(
        ctx.resolver.resolve(ContentKind::Post),
        ctx.resolver.resolve(ContentKind::Product),
    );

    let mut rng = ThreadRandom;
    tui_app.set_collections(posts, products, &ctx.config.recommend, &mut rng);
}
