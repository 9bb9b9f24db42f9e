mod app;
mod components;
mod config;
mod event;
mod logging;
mod picker;
mod reminder;
mod theme;
mod toast;
mod tui;

use std::time::Duration;

use app::App;
use color_eyre::Result;
use config::Config;
use event::AppEvent;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::info;

const INPUT_TICK: Duration = Duration::from_millis(100);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    theme::init(config.theme.to_theme());

    match logging::init(&config.log_level) {
        Ok(Some(path)) => eprintln!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(err) => eprintln!("Logging disabled: {err:#}"),
    }
    info!(theme = %theme::current().name, "starting");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(&config, tx.clone());

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    event::spawn_input_reader(tx, INPUT_TICK);

    let result = run(&mut terminal, &mut app, &mut rx).await;
    tui::restore()?;
    result
}

async fn run(
    terminal: &mut tui::Tui,
    app: &mut App,
    events: &mut UnboundedReceiver<AppEvent>,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| components::draw(frame, app))?;

        match events.recv().await {
            Some(event) => app.handle_event(event),
            None => break,
        }
    }

    Ok(())
}
