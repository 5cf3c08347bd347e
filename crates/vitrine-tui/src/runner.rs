//! Main TUI runner - entry point and event loop

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use vitrine_app::config::Settings;
use vitrine_app::signals;
use vitrine_app::{AppState, Engine, MediaSource, Message, OrderContext};
use vitrine_core::{Catalogue, Result};

use crate::{event, render, terminal};

/// Run the gallery until the user quits or a termination signal arrives
pub async fn run<S>(
    catalogue: Catalogue,
    settings: Settings,
    media: S,
    orders: Arc<dyn OrderContext>,
) -> Result<()>
where
    S: MediaSource + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    let mouse = settings.ui.mouse;
    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms.max(1));
    info!(
        "Starting gallery: {} products, {} categories, mouse={}",
        catalogue.products.len(),
        catalogue.categories.len(),
        mouse
    );

    let mut term = ratatui::init();
    if mouse {
        if let Err(e) = terminal::enable_mouse_capture() {
            warn!("{}", e);
        }
    }

    let mut engine = Engine::new(AppState::new(catalogue, settings), media, orders);
    signals::spawn_signal_handler(engine.msg_sender());

    let result = match term.size() {
        Ok(size) => {
            engine.process_message(Message::Resize {
                width: size.width,
                height: size.height,
            });
            run_loop(&mut term, &mut engine, tick_rate)
        }
        Err(e) => Err(e.into()),
    };

    engine.shutdown();

    if mouse {
        if let Err(e) = terminal::disable_mouse_capture() {
            warn!("{}", e);
        }
    }
    ratatui::restore();

    result
}

fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<S>,
    tick_rate: Duration,
) -> Result<()>
where
    S: MediaSource + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Timer fires, media results, signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        // Timer and media tasks keep running on the other workers while this one waits
        let messages = tokio::task::block_in_place(|| event::poll(&engine.state, tick_rate))?;
        engine.process_input(messages);
    }

    debug!("Gallery loop finished");
    Ok(())
}
