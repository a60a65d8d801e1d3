//! startpage: a personal start page in the terminal.
//!
//! Live clock, multi-engine search redirector, and a persistent quick-link
//! grid. The frame loop polls input with a 100ms timeout, so one frame tick
//! is roughly a tenth of a second.

mod config;
mod input;
mod navigator;
mod render;
mod state;

use std::time::Duration;

use anyhow::Context;
use log::info;

use startpage_backend_term::TermBackend;
use startpage_core::display::DisplayRegistry;
use startpage_core::platform::{SystemClock, TimeService};
use startpage_core::theme::TICKS_PER_SEC;
use startpage_store::FileStore;

use state::App;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cfg = config::load_config();
    let store_path = config::store_path(&cfg);
    let store = FileStore::open(&store_path)
        .with_context(|| format!("opening store at {}", store_path.display()))?;
    let mut app = App::new(&cfg, Box::new(store));

    let time = SystemClock::new();
    let mut nav = navigator::SystemNavigator;
    let mut reg = DisplayRegistry::new();
    let mut backend = TermBackend::init(&cfg.window_title).context("taking over the terminal")?;
    info!("startpage running, store at {}", store_path.display());

    let mut frame: u32 = 0;
    while app.running {
        // Refresh the clock once a second; every frame would be wasted work.
        if frame % TICKS_PER_SEC == 0 {
            if let Ok(t) = time.now() {
                app.clock.update(&t);
            }
        }
        if let Some(event) = backend.poll_event(Duration::from_millis(100))? {
            input::handle_event(&mut app, &mut nav, event);
        }
        app.tick();
        render::sync_display(&app, &mut reg);
        backend.draw(&reg)?;
        frame = frame.wrapping_add(1);
    }

    backend.shutdown()?;
    Ok(())
}
