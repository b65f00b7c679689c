//! flowdump - Lay out a scene and print each line's divides
//!
//! A command line tool for inspecting how lines split around floating
//! objects. Reads a JSON scene from a file or stdin.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use flowline_core::layout::Line;
use flowline_core::scene::{Scene, SceneLayout};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output format for the laid out lines.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// One line per text line, divides as [left, right)
    #[default]
    Text,
    /// Full line records as JSON
    Json,
}

/// Lay out a scene and print each line's divides.
#[derive(Parser, Debug)]
#[command(name = "flowdump")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON scene; reads stdin when omitted or "-"
    scene: Option<PathBuf>,

    /// Output format
    #[arg(short = 't', long = "output-type", value_enum, default_value_t = OutputType::Text)]
    output_type: OutputType,

    /// Output file (default: stdout)
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Compute lines on the thread pool
    #[arg(long)]
    parallel: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_scene(path: Option<&PathBuf>) -> Result<Scene> {
    let scene = match path {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Scene::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        _ => Scene::from_reader(io::stdin().lock()).context("failed to parse stdin")?,
    };
    scene.validate()?;
    Ok(scene)
}

fn write_line_text<W: Write>(out: &mut W, line: &Line) -> io::Result<()> {
    write!(
        out,
        "{:>4} {:<12} top={:<8.2} height={:<8.2}",
        line.line_index, line.block_id, line.top, line.line_height
    )?;
    if line.divides.is_empty() {
        write!(out, " (obstructed)")?;
    }
    for divide in &line.divides {
        write!(out, " [{:.2}, {:.2})", divide.left, divide.right())?;
    }
    writeln!(out)
}

fn write_layout<W: Write>(out: &mut W, layout: &SceneLayout, output_type: OutputType) -> Result<()> {
    match output_type {
        OutputType::Text => {
            for line in &layout.lines {
                write_line_text(out, line)?;
            }
        }
        OutputType::Json => {
            serde_json::to_writer_pretty(&mut *out, layout)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let scene = read_scene(args.scene.as_ref())?;
    info!(
        lines = scene.lines.len(),
        column_width = scene.column_width,
        "laying out scene"
    );
    let layout = if args.parallel {
        scene.layout_parallel()
    } else {
        scene.layout()
    };

    match &args.outfile {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_layout(&mut out, &layout, args.output_type)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_layout(&mut out, &layout, args.output_type)?;
            out.flush()?;
        }
    }
    Ok(())
}
