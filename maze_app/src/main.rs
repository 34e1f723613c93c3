//! Headless maze runner
//!
//! Drives the game core without a camera: replays a recorded fingertip
//! trace, or a built-in demo script when no trace is given, and prints each
//! frame as an ASCII grid. Useful for eyeballing layouts and replaying
//! tracker recordings without any video plumbing.

mod render;
mod trace;

use std::error::Error;

use maze_core::prelude::*;

use crate::render::{render_frame, GridSize};

#[derive(Debug)]
struct Options {
    config_path: Option<String>,
    trace_path: Option<String>,
    quiet: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        config_path: None,
        trace_path: None,
        quiet: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter.next().ok_or("--config needs a file path")?;
                options.config_path = Some(value.clone());
            }
            "--trace" => {
                let value = iter.next().ok_or("--trace needs a file path")?;
                options.trace_path = Some(value.clone());
            }
            "--quiet" => options.quiet = true,
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }

    Ok(options)
}

/// A scripted run against the default layout: grab the disc, thread the gap
/// at x = 700, cross the top corridor to the goal, then reset and crash
/// into the wall at (800, 400) to show the defeat banner too.
fn demo_script() -> Vec<FrameInput> {
    fn hold(x: f32, y: f32) -> FrameInput {
        FrameInput::pinch(PinchSample::new(
            Point2::new(x, y),
            Point2::new(x + 8.0, y + 6.0),
        ))
    }

    vec![
        FrameInput::idle(),
        hold(640.0, 360.0),
        hold(700.0, 360.0),
        hold(700.0, 240.0),
        hold(700.0, 100.0),
        hold(900.0, 100.0),
        hold(1090.0, 100.0),
        FrameInput::idle(),
        FrameInput::reset(),
        hold(640.0, 360.0),
        hold(700.0, 360.0),
        hold(800.0, 400.0),
        FrameInput::idle(),
    ]
}

fn run(options: &Options) -> Result<(), Box<dyn Error>> {
    let config = match &options.config_path {
        Some(path) => {
            log::info!("loading maze config from {}", path);
            MazeConfig::load_from_file(path)?
        }
        None => MazeConfig::default(),
    };

    let inputs: Vec<FrameInput> = match &options.trace_path {
        Some(path) => {
            log::info!("replaying trace {}", path);
            trace::load(path)?.iter().map(|frame| frame.to_input()).collect()
        }
        None => demo_script(),
    };

    let mut game = MazeGame::new(config)?;
    let frame = game.config().frame;
    let frame_width = frame.width as f32;
    let frame_height = frame.height as f32;
    let mut last_status = game.status();

    for input in &inputs {
        let commands = game.step(input);
        if !options.quiet {
            println!("{}", render_frame(&commands, frame_width, frame_height, GridSize::default()));
        }
        let status = game.status();
        if status != last_status {
            log::info!("frame {}: status changed to {:?}", game.frame(), status);
            last_status = status;
        }
    }

    let snapshot = game.snapshot();
    log::info!(
        "run finished after {} frames: {:?} at ({:.0}, {:.0})",
        snapshot.frame,
        snapshot.status,
        snapshot.position.x,
        snapshot.position.y
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: maze_app [--config <file>] [--trace <file>] [--quiet]");
            std::process::exit(2);
        }
    };

    log::info!("starting maze runner");
    match run(&options) {
        Ok(()) => {
            log::info!("maze runner finished");
            Ok(())
        }
        Err(e) => {
            log::error!("maze runner failed: {}", e);
            Err(e)
        }
    }
}
