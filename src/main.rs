//! movie-grid - A terminal movie catalog viewer/editor
//!
//! Pages through OMDb search results in a grid, with local-only
//! create/edit/delete and CSV export. Built on ratatui's Component
//! Architecture pattern.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::services::OmdbClient;
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::Event;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    let config = Config::load();
    logging::init_logging(&config);
    tracing::info!(base_url = %config.base_url, search = %config.search_term, "starting");

    let client = OmdbClient::new(&config).context("failed to build HTTP client")?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    let mut app = App::new(&config, Arc::new(client));
    app.init()?;

    let result = run_app(&mut tui, &mut app);

    app.shutdown();
    tui.exit()?;

    if let Err(err) = result {
        tracing::error!(error = ?err, "exited with error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::warn!(error = %e, "draw failed");
            }
        })?;

        if let Some(text) = app.pending_clipboard.take() {
            if let Err(e) = tui.copy_to_clipboard(&text) {
                tracing::warn!(error = %e, "clipboard copy failed");
                app.status_message = Some("Clipboard copy failed".to_string());
            }
        }

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
