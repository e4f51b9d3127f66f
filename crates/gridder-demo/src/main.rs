// File: crates/gridder-demo/src/main.rs
// Summary: Demo renders a grid PNG from a JSON job, a CSV of `row,column,color` paints, or a built-in board.

use anyhow::{Context, Result};
use clap::Parser;
use gridder_core::{
    theme, CircleConfig, FontFace, GridSpec, Gridder, ImageSpec, LineConfig, PathConfig,
    RectangleConfig, Rgba, StringConfig,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gridder-demo", about = "Render shapes anchored to grid cells into a PNG")]
struct Args {
    /// JSON job describing image, grid and draw commands. Overrides the grid flags.
    #[arg(long)]
    job: Option<PathBuf>,

    /// CSV with `row,column,color` records to paint.
    #[arg(long)]
    cells: Option<PathBuf>,

    #[arg(long, default_value_t = 8)]
    rows: usize,

    #[arg(long, default_value_t = 8)]
    columns: usize,

    #[arg(long, default_value_t = 480)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    #[arg(long, default_value_t = 0)]
    margin: u32,

    /// Theme preset name (light, dark, solarized-dark, solarized-light, blueprint, high-contrast-dark).
    #[arg(long, default_value = "light")]
    theme: String,

    /// Output PNG; defaults to the job's image name or target/out/gridder_demo.png.
    #[arg(long, short)]
    out: Option<PathBuf>,
}

#[derive(Deserialize, Debug)]
struct Job {
    #[serde(default)]
    image: ImageSpec,
    grid: GridSpec,
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    commands: Vec<Command>,
}

#[derive(Deserialize, Debug)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Command {
    Cell { row: usize, column: usize, color: Rgba },
    Rectangle { row: usize, column: usize, #[serde(default)] config: RectangleConfig },
    Circle { row: usize, column: usize, #[serde(default)] config: CircleConfig },
    Line { row: usize, column: usize, #[serde(default)] config: LineConfig },
    Path { from: (usize, usize), to: (usize, usize), #[serde(default)] config: PathConfig },
    Text {
        row: usize,
        column: usize,
        text: String,
        #[serde(default)]
        font: FontFace,
        #[serde(default)]
        config: StringConfig,
    },
}

#[derive(Deserialize, Debug)]
struct CellRecord {
    row: usize,
    column: usize,
    color: Rgba,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let (mut gridder, default_out) = match &args.job {
        Some(path) => {
            let job = load_job(path)?;
            tracing::info!(path = %path.display(), commands = job.commands.len(), "loaded job");
            let out = PathBuf::from(&job.image.name);
            (run_job(job)?, out)
        }
        None => {
            let grid = GridSpec::new(args.rows, args.columns)
                .with_margin(args.margin)
                .with_theme(&theme::find(&args.theme));
            let mut gridder = Gridder::new(ImageSpec::new(args.width, args.height), grid)?;
            match &args.cells {
                Some(path) => {
                    let records = load_cells_csv(path)
                        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
                    tracing::info!(count = records.len(), "loaded cell records");
                    paint_records(&mut gridder, &records);
                }
                None => paint_checkerboard(&mut gridder)?,
            }
            (gridder, PathBuf::from("target/out/gridder_demo.png"))
        }
    };

    let out = args.out.unwrap_or(default_out);
    gridder.save_to(&out).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(path = %out.display(), "wrote image");
    Ok(())
}

fn load_job(path: &Path) -> Result<Job> {
    let text = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing job {}", path.display()))
}

fn run_job(job: Job) -> Result<Gridder> {
    let grid = match &job.theme {
        Some(name) => job.grid.with_theme(&theme::find(name)),
        None => job.grid,
    };
    let mut gridder = Gridder::new(job.image, grid)?;
    for (i, command) in job.commands.iter().enumerate() {
        apply(&mut gridder, command).with_context(|| format!("command #{i} ({command:?})"))?;
    }
    Ok(gridder)
}

fn apply(g: &mut Gridder, command: &Command) -> gridder_core::Result<()> {
    match command {
        Command::Cell { row, column, color } => g.paint_cell(*row, *column, *color),
        Command::Rectangle { row, column, config } => g.draw_rectangle(*row, *column, config),
        Command::Circle { row, column, config } => g.draw_circle(*row, *column, config),
        Command::Line { row, column, config } => g.draw_line(*row, *column, config),
        Command::Path { from, to, config } => g.draw_path(from.0, from.1, to.0, to.1, config),
        Command::Text { row, column, text, font, config } => g.draw_string(*row, *column, text, font, config),
    }
}

/// Load `row,column,color` records; the header row is required.
fn load_cells_csv(path: &Path) -> Result<Vec<CellRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for (line, rec) in rdr.deserialize::<CellRecord>().enumerate() {
        match rec {
            Ok(rec) => out.push(rec),
            Err(e) => tracing::warn!(line = line + 2, error = %e, "skipping malformed record"),
        }
    }
    Ok(out)
}

/// Records outside the grid are reported and skipped; the rest still paint.
fn paint_records(g: &mut Gridder, records: &[CellRecord]) {
    for rec in records {
        if let Err(e) = g.paint_cell(rec.row, rec.column, rec.color) {
            tracing::warn!(row = rec.row, column = rec.column, error = %e, "skipping cell");
        }
    }
}

fn paint_checkerboard(g: &mut Gridder) -> Result<()> {
    let (rows, columns) = (g.grid_spec().rows, g.grid_spec().columns);
    let dark = theme::find("dark").line;
    for r in 0..rows {
        for c in 0..columns {
            if (r + c) % 2 == 1 {
                g.paint_cell(r, c, dark)?;
            }
        }
    }
    g.draw_path(0, 0, rows - 1, columns - 1, &PathConfig { color: Rgba::rgb(220, 80, 80), stroke_width: 3.0, dashes: 0.0 })?;
    Ok(())
}
