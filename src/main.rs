use std::process::ExitCode;

use clap::Parser;
use rand::rng;

use path_tracer::renderer::{Renderer, RendererConfig};
use path_tracer::scene::Scene;
use path_tracer::scene::scene_io;

/// A CPU path-tracing renderer: reads a JSON scene description, traces it,
/// and writes a PPM image.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Scene description file (JSON).
    scene_file: String,

    /// Output PPM path.
    #[arg(short, long, default_value = "output.ppm")]
    output: String,

    /// Worker thread count (defaults to hardware concurrency, clamped to it).
    #[arg(short, long)]
    threads: Option<usize>,

    /// Samples per pixel.
    #[arg(short, long, default_value_t = 100)]
    samples: u32,

    /// Maximum recursive bounce depth.
    #[arg(short = 'd', long, default_value_t = 50)]
    max_depth: u32,

    /// Fraction of total pixels between progress-bar updates.
    #[arg(long, default_value_t = 0.02)]
    progress_fraction: f64,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let (camera, list) = match scene_io::load_scene(&args.scene_file) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("could not load scene: {e}");
            return ExitCode::FAILURE;
        }
    };

    let threads = args
        .threads
        .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1));

    let scene = Scene::new(camera, list, &mut rng());
    let config = RendererConfig::new(args.samples, args.max_depth, threads, args.progress_fraction);
    let renderer = Renderer::new(config);

    let image = renderer.render(&scene);

    match image.dump(&args.output) {
        Ok(()) => {
            eprintln!("wrote {}", args.output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("could not write image: {e}");
            ExitCode::FAILURE
        }
    }
}
