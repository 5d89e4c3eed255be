//! Terminal wireframe renderer (default binary).
//!
//! Flies a camera down a corridor of colored squares. It uses crossterm for
//! raw mode and input, and writes each frame as one escape-coded buffer.

use std::fs::File;
use std::thread;

use anyhow::{Context, Result};
use log::info;

use tui_craft::core::TunnelScene;
use tui_craft::engine::{FrameDriver, RenderConfig};
use tui_craft::input::ActionQueue;
use tui_craft::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = RenderConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let restored = term.exit();
    result?;
    restored.context("failed to restore terminal")?;
    Ok(())
}

fn init_logging(config: &RenderConfig) -> Result<()> {
    let mut builder = match &config.log_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to open log file {}", path))?;
            let mut b = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or("info"),
            );
            b.target(env_logger::Target::Pipe(Box::new(file)));
            b
        }
        // stdout is the render surface; stay quiet unless RUST_LOG asks otherwise.
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")),
    };
    builder.format_timestamp_micros().init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RenderConfig) -> Result<()> {
    let size = term.enter().context("failed to set up terminal")?;
    let (width, height) = size.buffer_dims();

    let mut driver = FrameDriver::new(config.clone(), width, height)
        .context("failed to allocate frame buffers")?;
    let mut scene = TunnelScene::new(config.max_render, config.seed);
    let mut input = ActionQueue::new();
    info!("seed {}, frame delay {:?}", config.seed, config.frame_delay);

    loop {
        input
            .poll_pending()
            .context("failed to read keyboard input")?;
        if input.quit_requested() {
            break;
        }
        for action in input.drain() {
            driver.apply(action);
        }

        driver
            .frame(&mut scene, term)
            .context("failed to write frame")?;

        thread::sleep(config.frame_delay);
    }

    driver.shutdown();
    Ok(())
}
