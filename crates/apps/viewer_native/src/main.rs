use std::io::BufRead;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use foundation::math::MapRegion;
use formats::load_dataset_from_dir;
use gpu::RenderFrame;
use layers::map_planes::TextureSize;
use viewer::Viewer;
use viewer::info::render_text;
use viewer::selection::ProvinceFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "3D map viewer of Spanish parliamentary election results")]
struct Args {
    /// Dataset directory containing dataset.json
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Initial election (index or display label)
    #[arg(long)]
    election: Option<String>,

    /// Initial province name (or "Todas")
    #[arg(long)]
    province: Option<String>,

    /// Frames to advance per redraw
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Render once and exit instead of reading commands
    #[arg(long)]
    once: bool,
}

/// One control-panel interaction, parsed from a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Election(String),
    Province(String),
    Map(MapRegion),
    Background(bool),
    Info,
    Frame(u64),
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let head = parts.next().ok_or_else(String::new)?;
    let rest = parts.collect::<Vec<_>>().join(" ");

    match head {
        "election" if !rest.is_empty() => Ok(Command::Election(rest)),
        "province" if !rest.is_empty() => Ok(Command::Province(rest)),
        "map" => match rest.to_lowercase().as_str() {
            "espana" | "españa" | "mainland" => Ok(Command::Map(MapRegion::Mainland)),
            "canarias" | "canary" => Ok(Command::Map(MapRegion::Canary)),
            other => Err(format!("unknown map region: {other}")),
        },
        "background" => match rest.as_str() {
            "on" => Ok(Command::Background(true)),
            "off" => Ok(Command::Background(false)),
            other => Err(format!("background takes on|off, got {other:?}")),
        },
        "info" => Ok(Command::Info),
        "frame" => {
            if rest.is_empty() {
                Ok(Command::Frame(1))
            } else {
                rest.parse::<u64>()
                    .map(Command::Frame)
                    .map_err(|_| format!("frame takes a count, got {rest:?}"))
            }
        }
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: {other}")),
    }
}

const USAGE: &str = "\
commands:
  election <label|index>   switch election
  province <name|Todas>    switch province filter
  map <espana|canarias>    orbit focus (only while Todas)
  background <on|off>      toggle the animated background
  info                     reprint the active results card
  frame [n]                advance n frames and redraw
  quit";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = real_main(args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn real_main(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = load_dataset_from_dir(&args.data_dir)?;
    for file in &dataset.report.failed {
        warn!("skipped {}: {}", file.path, file.error);
    }
    info!(
        "loaded {} files, {} skipped",
        dataset.report.loaded.len(),
        dataset.report.failed.len()
    );

    let mainland = TextureSize {
        width: dataset.maps.mainland.width,
        height: dataset.maps.mainland.height,
    };
    let canary = TextureSize {
        width: dataset.maps.canary.width,
        height: dataset.maps.canary.height,
    };
    let mut viewer = Viewer::new(dataset.catalog, mainland, canary)?;

    if let Some(election) = &args.election {
        apply(&mut viewer, Command::Election(election.clone()));
    }
    if let Some(province) = &args.province {
        apply(&mut viewer, Command::Province(province.clone()));
    }

    redraw(&mut viewer, args.frames);
    if args.once {
        return Ok(());
    }

    println!("{USAGE}");
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                let frames = match command {
                    Command::Frame(n) => n,
                    _ => {
                        apply(&mut viewer, command);
                        args.frames
                    }
                };
                redraw(&mut viewer, frames);
            }
            Err(message) => {
                println!("{message}");
                println!("{USAGE}");
            }
        }
    }

    Ok(())
}

fn apply(viewer: &mut Viewer, command: Command) {
    let result = match command {
        Command::Election(which) => match which.parse::<usize>() {
            Ok(index) => viewer.select_election(index),
            Err(_) => viewer.select_election_by_label(&which),
        },
        Command::Province(label) => viewer.select_province(ProvinceFilter::from_label(&label)),
        Command::Map(region) => {
            viewer.select_map_region(region);
            Ok(())
        }
        Command::Background(enabled) => {
            viewer.set_background_enabled(enabled);
            Ok(())
        }
        Command::Info | Command::Frame(_) | Command::Quit => Ok(()),
    };

    if let Err(e) = result {
        warn!("{e}");
    }
    for event in viewer.drain_events() {
        info!("{}: {}", event.kind, event.message);
    }
}

fn redraw(viewer: &mut Viewer, frames: u64) {
    let mut frame = viewer.tick();
    for _ in 1..frames {
        frame = viewer.tick();
    }
    print_frame(viewer, &frame);
}

fn print_frame(viewer: &Viewer, frame: &RenderFrame) {
    match frame.background {
        Some([r, g, b, _]) => println!(
            "-- {} draws, background ({r:.2}, {g:.2}, {b:.2}), focus {:?}",
            frame.commands.len(),
            viewer.camera_focus()
        ),
        None => println!(
            "-- {} draws, background off, focus {:?}",
            frame.commands.len(),
            viewer.camera_focus()
        ),
    }
    match viewer.current_card() {
        Some(card) => println!("{}", render_text(card)),
        None => println!("(sin resultados)"),
    }
}
