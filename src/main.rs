use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

use userfeed::app::{App, AppMessage};
use userfeed::cli::{parse_args, run_cli_command};
use userfeed::config::AppConfig;
use userfeed::terminal::{setup_panic_hook, TerminalManager};
use userfeed::{logging, ui};

/// Frame interval for animations and redraw checks
const TICK_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Handle CLI flags before touching the terminal
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("userfeed: {}", err);
            eprintln!("Try 'userfeed --help' for more information.");
            std::process::exit(2);
        }
    };
    let options = run_cli_command(command);

    color_eyre::install()?;

    let config = AppConfig::from_env()?.apply_options(&options)?;
    let log_path = logging::init(config.log_filter.as_deref());
    info!(?log_path, api_url = %config.api_url, "starting userfeed");

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::new(&config)?;

    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(manager.terminal(), &mut app));
    manager.restore()?;

    info!(users = app.users.len(), page = %app.page, "exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    app.mount();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;

            // The render just moved the sentinel; let the observer look at it.
            if app.observe_sentinel() {
                debug!(users = app.users.len(), "sentinel reached");
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK_INTERVAL) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Resize(_, _))) => app.handle_resize(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
