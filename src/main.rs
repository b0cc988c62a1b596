use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    terminal,
};
use log::{info, warn};

use vimquest::compute::{apply_input, tick};
use vimquest::display;
use vimquest::config::Args;
use vimquest::entities::GameState;
use vimquest::error::GameError;
use vimquest::input::translate;
use vimquest::levels::LevelCatalog;
use vimquest::screen;

// ── Logging ───────────────────────────────────────────────────────────────────

/// stdout is the game screen, so logs only show up when sent to a file or
/// explicitly enabled through `RUST_LOG`.
fn init_logging(args: &Args) -> Result<(), GameError> {
    let mut builder = match &args.log_file {
        Some(path) => {
            let file = File::create(path)?;
            let mut b =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
            b.target(env_logger::Target::Pipe(Box::new(file)));
            b
        }
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")),
    };
    builder.try_init()?;
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit input arrives or the event reader goes away.
///
/// Each frame: drain pending input (non-blocking), tick the simulation
/// (projectiles, then collisions), render, then sleep out the rest of the frame.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    frame_len: Duration,
) -> std::io::Result<()> {
    loop {
        let frame_start = Instant::now();

        loop {
            match rx.try_recv() {
                Ok(ev) => {
                    let Some(input) = translate(&ev, state.player.mode) else {
                        continue;
                    };
                    if !apply_input(state, input) {
                        info!("quit requested after {} frames", state.frame);
                        return Ok(());
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    warn!("input reader stopped; leaving the game");
                    return Ok(());
                }
            }
        }

        tick(state);

        let (width, height) = terminal::size()?;
        display::render(out, state, width, height)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            thread::sleep(frame_len - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.validate()?;
    init_logging(&args).context("could not set up logging")?;

    let levels = LevelCatalog::with_start(args.level)?;
    let mut state = GameState::new(levels);
    info!("tick rate {} fps, {} levels loaded", args.fps, state.levels.len());

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("could not enable raw mode")?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let frame = args.frame();
    let result = screen::with_screen(&mut out, |out| game_loop(out, &mut state, &rx, frame));

    // Raw mode goes last, after the screen has been restored
    if let Err(e) = terminal::disable_raw_mode() {
        warn!("could not disable raw mode: {e}");
    }

    result.context("game loop failed")
}
