//! Terminal runner (default binary).
//!
//! Reads configuration from the environment, takes over the terminal and
//! runs one session until the player quits.

use std::thread;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{error, info};

use tui_blocks::core::Engine;
use tui_blocks::input::{forward_blocking, InputEvent};
use tui_blocks::runtime::{logging, run, GameConfig, LoopEvent, Session};
use tui_blocks::term::TerminalFrontend;

fn main() -> Result<()> {
    let config = GameConfig::from_env()?;
    logging::init(&config)?;
    info!(
        width = config.width,
        height = config.height,
        seed = config.seed,
        "starting"
    );

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("building runtime")?;

    let mut frontend = TerminalFrontend::new();
    frontend.enter()?;

    let result = rt.block_on(play(&config, &mut frontend));

    // Always try to restore terminal state.
    let _ = frontend.exit();
    if let Err(err) = &result {
        error!("{err:#}");
    }
    result
}

async fn play(config: &GameConfig, frontend: &mut TerminalFrontend) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let input_tx = tx.clone();
    thread::Builder::new()
        .name("input".into())
        .spawn(move || {
            let forwarded = forward_blocking(|input| {
                let event = match input {
                    InputEvent::Action(action) => LoopEvent::Input(action),
                    InputEvent::Quit => LoopEvent::Quit,
                    InputEvent::Resize => LoopEvent::Redraw,
                };
                input_tx.send(event).is_ok()
            });
            if let Err(err) = forwarded {
                error!("input reader stopped: {err:#}");
                let _ = input_tx.send(LoopEvent::Quit);
            }
        })
        .context("spawning input thread")?;

    let engine = Engine::new(config.width, config.height, config.seed);
    let mut session = Session::new(engine, frontend, tx);
    run(&mut session, &mut rx).await?;
    info!(score = session.engine().score(), "quit");
    Ok(())
}
