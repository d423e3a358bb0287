use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::thread;

use dashmap::DashMap;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

use crate::{
    camera::Ray,
    image::Image,
    scene::Scene,
    utils::{Color, Interval},
};

/// Render-loop configuration: how many samples and bounces per pixel, how
/// many worker threads to dispatch pixels to, and how often to move the
/// progress bar. Grounded in the teacher's `Camera` fields (`samples`,
/// `max_depth`, `thread_count`), split out of the camera since this crate's
/// `Camera` is pose-only (see `camera::Camera`).
#[derive(Debug, Clone, Copy)]
pub struct RendererConfig {
    samples_per_pixel: u32,
    max_depth: u32,
    num_threads: usize,
    progress_fraction: f64,
}

impl RendererConfig {
    /// Clamps each field to its legal range: `samples_per_pixel` and
    /// `max_depth` to `>= 1`, `num_threads` to `[1, hardware concurrency]`,
    /// `progress_fraction` to `[0.01, 1.0]`.
    pub fn new(samples_per_pixel: u32, max_depth: u32, num_threads: usize, progress_fraction: f64) -> RendererConfig {
        let hw = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);

        RendererConfig {
            samples_per_pixel: samples_per_pixel.max(1),
            max_depth: max_depth.max(1),
            num_threads: num_threads.clamp(1, hw),
            progress_fraction: progress_fraction.clamp(0.01, 1.0),
        }
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }
}

/// Drives the Monte-Carlo path tracer over every pixel of the scene's
/// camera. Pixels are independent units of work dispatched over a channel
/// to a fixed pool of worker threads (`std::thread::scope`, so no `Arc`
/// wrapping of the scene is needed); each worker owns its own RNG stream,
/// per spec.md §5's "must NOT share a single mutable RNG across threads".
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Renderer {
        Renderer { config }
    }

    /// Renders `scene` into a freshly allocated `Image`. Pixel (row, col)
    /// completion order is unspecified; the only shared mutable state
    /// besides the per-pixel result map is the atomic progress counter.
    pub fn render(&self, scene: &Scene) -> Image {
        let width = scene.camera().width();
        let height = scene.camera().height();
        let total_pixels = width as u64 * height as u64;

        log::info!(
            "rendering {width}x{height}, {} spp, max depth {}, {} threads",
            self.config.samples_per_pixel,
            self.config.max_depth,
            self.config.num_threads
        );

        let mut image = Image::new(width, height);
        if total_pixels == 0 {
            return image;
        }

        let results: DashMap<(u32, u32), Color> = DashMap::with_capacity(total_pixels as usize);
        let progress = AtomicU64::new(0);
        // Guards against division/modulo by zero for very small images, where
        // total_pixels * progress_fraction would otherwise truncate to 0.
        let report_every = ((total_pixels as f64) * self.config.progress_fraction).max(1.0) as u64;

        let (sender, receiver) = mpsc::channel::<(u32, u32)>();
        let receiver = Mutex::new(receiver);

        let pb = ProgressBar::new(total_pixels);
        pb.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
                .unwrap()
                .progress_chars("##-"),
        );

        thread::scope(|s| {
            for _ in 0..self.config.num_threads {
                let receiver = &receiver;
                let results = &results;
                let progress = &progress;
                let pb = &pb;

                s.spawn(move || {
                    let mut rng = rand::rng();

                    loop {
                        let next = receiver.lock().unwrap().recv();
                        let Ok((row, col)) = next else {
                            break;
                        };

                        let color = self.sample_pixel(scene, row, col, &mut rng);
                        results.insert((row, col), color);

                        let done = progress.fetch_add(1, Ordering::Relaxed) + 1;
                        if done % report_every == 0 || done == total_pixels {
                            pb.set_position(done);
                        }
                    }
                });
            }

            for row in 0..height {
                for col in 0..width {
                    sender.send((row, col)).expect("render worker threads dropped their receiver early");
                }
            }
            drop(sender);
        });

        pb.finish_and_clear();

        for row in 0..height {
            for col in 0..width {
                let color = results
                    .get(&(row, col))
                    .map(|entry| *entry.value())
                    .unwrap_or(Color::black());
                image.set(row, col, color);
            }
        }

        image
    }

    /// Averages `samples_per_pixel` jittered samples through `trace` and
    /// gamma-encodes the result. Each sample shares the pixel's center but
    /// draws independent jitter, per spec.md §4.9.
    fn sample_pixel(&self, scene: &Scene, row: u32, col: u32, rng: &mut impl Rng) -> Color {
        let camera = scene.camera();
        let pixel_center = camera.pixel_center(row, col);

        let mut sum = Color::black();
        for _ in 0..self.config.samples_per_pixel {
            let jx = rng.random_range(-0.5..0.5);
            let jy = rng.random_range(-0.5..0.5);

            let sample_target = pixel_center + camera.du() * jx + camera.dv() * jy;
            let ray = Ray::new(camera.eye(), sample_target - camera.eye());

            sum += self.trace(&ray, scene, self.config.max_depth, rng);
        }

        let averaged = sum / self.config.samples_per_pixel as f64;
        finite_or_black(averaged).gamma_encode()
    }

    /// Recursive Monte-Carlo radiance estimate. The lower bound `0.001` on
    /// the hit interval avoids self-intersection ("shadow acne"); a missed
    /// ray contributes pure black — the procedural sky gradient the
    /// teacher's `ray_color` computes as a fallback is deliberately not
    /// ported, per spec.md §4.9's "background is pure black ... must NOT
    /// be enabled".
    fn trace(&self, ray: &Ray, scene: &Scene, depth: u32, rng: &mut impl Rng) -> Color {
        if depth == 0 {
            return Color::black();
        }

        let Some(hit) = scene.hit(ray, &Interval::new(0.001, f64::INFINITY)) else {
            return Color::black();
        };

        let mut color = Color::black();

        if let Some((scattered, attenuation)) = hit.material().scatter(ray, &hit, rng) {
            color += attenuation * self.trace(&scattered, scene, depth - 1, rng);
        }
        if let Some(emitted) = hit.material().emitted(hit.u_texture, hit.v_texture) {
            color += emitted;
        }

        color
    }
}

/// A NaN-producing sample is a bug in a scatter/emit implementation, not a
/// recoverable user input: assert in debug builds, clamp to black and warn
/// in release, per spec.md §7.
fn finite_or_black(c: Color) -> Color {
    if c.r().is_finite() && c.g().is_finite() && c.b().is_finite() {
        return c;
    }

    debug_assert!(false, "non-finite color produced by trace: {c:?}");
    log::warn!("clamping non-finite pixel color {c:?} to black");
    Color::black()
}
