use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use rand::Rng;
use rtx_lambert::{random, RayTracer, SceneBuilder, SceneConfig};

/// Render Lambertian-shaded spheres to an image file.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// TOML scene description, the default scene is used when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Append this many randomly placed spheres and move the light randomly
    #[arg(short, long, default_value_t = 0)]
    random: usize,

    /// Seed for --random, drawn at startup when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Output image (.png or .jpg), scene.png by default
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log everything down to per-pixel traces
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter_level = if args.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(filter_level)
        .parse_default_env()
        .init();

    let mut builder = match &args.scene {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("Loading scene {}", path.display()))?
            .into_builder(),
        None => SceneBuilder::default(),
    };

    if args.random > 0 {
        let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
        log::info!("Adding {} random sphere(s), seed {}", args.random, seed);
        random::populate(&mut builder, &mut random::seeded(seed), args.random);
    }

    let mut tracer = RayTracer::new(builder);
    tracer.render_scene().context("Rendering scene")?;
    tracer
        .save_scene(args.output.as_deref())
        .context("Exporting scene")?;

    Ok(())
}
