use clap::{Args, Parser, Subcommand};
use clipum::io::{read_polygon, read_segments};
use clipum::{clip_segment, ClipWindow, Point2, Polygon, Segment2};
use error_stack::{Report, ResultExt};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Parser)]
#[command(about = "Clip segments or polygons read from coordinate record files")]
struct ClipCommand {
    /// Log clip decisions at debug level. RUST_LOG takes precedence.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    subcommand: ClipSubcommand,
}

#[derive(Args)]
struct InputArgs {
    /// Path to the record file: a count, that many records, then "xmin ymin xmax ymax"
    path: PathBuf,
}

#[derive(Subcommand)]
enum ClipSubcommand {
    #[command(about = "Clip \"x1 y1 x2 y2\" segments against the rectangle (Cohen-Sutherland)")]
    Segments(InputArgs),
    #[command(about = "Clip an \"x y\" vertex polygon against the rectangle (Sutherland-Hodgman)")]
    Polygon(InputArgs),
}

#[derive(Debug, Error)]
enum CliError {
    #[error("could not load input records")]
    Input,
    #[error("clipping failed")]
    Clip,
}

fn main() -> Result<(), Report<CliError>> {
    let cmd = ClipCommand::parse();

    let default_filter = if cmd.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cmd.subcommand {
        ClipSubcommand::Segments(args) => run_segments(&args.path),
        ClipSubcommand::Polygon(args) => run_polygon(&args.path),
    }
}

fn run_segments(path: &Path) -> Result<(), Report<CliError>> {
    let records = read_segments::<f64>(path)
        .change_context(CliError::Input)
        .attach_printable_lazy(|| format!("input: {}", path.display()))?;

    log::info!(
        "clipping {} segments against {}x{} rectangle {}",
        records.segments.len(),
        records.rect.width(),
        records.rect.height(),
        format_points(&records.rect.corners())
    );

    for segment in &records.segments {
        let clipped = clip_segment(segment, &records.rect)
            .change_context(CliError::Clip)
            .attach_printable_lazy(|| format!("segment: {}", format_segment(segment)))?;

        match clipped {
            Some(c) => println!("{} -> {}", format_segment(segment), format_segment(&c)),
            None => println!("{} -> rejected", format_segment(segment)),
        }
    }

    Ok(())
}

fn run_polygon(path: &Path) -> Result<(), Report<CliError>> {
    let records = read_polygon::<f64>(path)
        .change_context(CliError::Input)
        .attach_printable_lazy(|| format!("input: {}", path.display()))?;

    log::info!(
        "clipping {}-vertex polygon against {}x{} rectangle",
        records.subject.len(),
        records.rect.width(),
        records.rect.height()
    );

    let window = ClipWindow::from(records.rect);
    let clipped = window
        .clip(&records.subject)
        .change_context(CliError::Clip)?;

    println!("subject: {}", format_polygon(&records.subject));
    println!("window:  {}", format_polygon(window.polygon()));
    if clipped.is_empty() {
        println!("clipped: empty");
    } else {
        println!("clipped: {}", format_polygon(&clipped));
        println!("area:    {}", clipped.area());
    }

    Ok(())
}

fn format_point(p: &Point2<f64>) -> String {
    format!("({}, {})", p.x, p.y)
}

fn format_points(points: &[Point2<f64>]) -> String {
    let parts: Vec<String> = points.iter().map(format_point).collect();
    format!("[{}]", parts.join(", "))
}

fn format_segment(s: &Segment2<f64>) -> String {
    format!("{}-{}", format_point(&s.start), format_point(&s.end))
}

fn format_polygon(p: &Polygon<f64>) -> String {
    format_points(&p.vertices)
}
