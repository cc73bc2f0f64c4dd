use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use gridpaint::geometry::{sort_by_distance, Shape};
use gridpaint::{load_config, Scene};

/// Draw lines, polygons, rectangles and n-gons on an ASCII canvas
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Scene file (TOML, or JSON with a .json extension); draws the built-in demo when omitted
    scene: Option<PathBuf>,

    /// Canvas width, overrides the scene and config
    #[arg(long)]
    width: Option<usize>,

    /// Canvas height, overrides the scene and config
    #[arg(long)]
    height: Option<usize>,

    /// Paint character for shapes without their own
    #[arg(long)]
    paint: Option<char>,

    /// Config file (defaults to config.toml in the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the resolved scene as TOML instead of drawing it
    #[arg(long, default_value_t = false)]
    print_scene: bool,

    /// Print centroids of the scene's point shapes, sorted by distance from the origin
    #[arg(long, default_value_t = false)]
    shapes: bool,

    /// Log at info level
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Log at debug level
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // stdout carries only the canvas
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    tracing::debug!("gridpaint version {}", env!("CARGO_PKG_VERSION"));

    let config = load_config(cli.config.as_deref()).context("loading configuration")?;

    let mut scene = match &cli.scene {
        Some(path) => {
            Scene::load(path).with_context(|| format!("loading scene {}", path.display()))?
        }
        None => Scene::demo(),
    };
    if cli.width.is_some() {
        scene.width = cli.width;
    }
    if cli.height.is_some() {
        scene.height = cli.height;
    }
    if cli.paint.is_some() {
        scene.paint = cli.paint;
    }

    let mut out = io::stdout().lock();

    if cli.print_scene {
        out.write_all(scene.to_toml()?.as_bytes())?;
        return Ok(());
    }

    if cli.shapes {
        let mut shapes = scene.geometry_shapes();
        if shapes.is_empty() {
            shapes = Scene::demo_shapes();
        }
        write_shape_report(&mut out, shapes)?;
        return Ok(());
    }

    let canvas = scene.paint(&config).context("drawing scene")?;
    out.write_all(canvas.render().as_bytes())?;
    out.flush()?;
    Ok(())
}

fn write_shape_report(out: &mut impl Write, mut shapes: Vec<Shape>) -> anyhow::Result<()> {
    for shape in &shapes {
        let centroid = shape.centroid()?;
        writeln!(
            out,
            "{shape} centroid {centroid} distance {:?}",
            centroid.distance_from_origin()
        )?;
    }

    sort_by_distance(&mut shapes)?;
    writeln!(out, "sorted:")?;
    for shape in &shapes {
        writeln!(out, "{shape}")?;
    }
    Ok(())
}
