use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::rng;

use path_tracer::camera::Camera;
use path_tracer::materials::{Materials, lambertian::Lambertian, metal::Metal};
use path_tracer::objects::{Hittables, hitlist::HitList, sphere::Sphere};
use path_tracer::renderer::{Renderer, RendererConfig};
use path_tracer::scene::Scene;
use path_tracer::utils::{Color, Point3, Vec3};

fn three_sphere_world() -> HitList {
    let material_ground = Arc::new(Materials::Lambertian(Lambertian::new_from_color(Color::new(0.8, 0.8, 0.0))));
    let material_center = Arc::new(Materials::Lambertian(Lambertian::new_from_color(Color::new(0.1, 0.2, 0.5))));
    let material_left = Arc::new(Materials::Metal(Metal::new(Color::new(0.8, 0.8, 0.8), 0.0)));
    let material_right = Arc::new(Materials::Metal(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0)));

    let mut world = HitList::default();
    world.add(Hittables::Sphere(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, material_ground)));
    world.add(Hittables::Sphere(Sphere::new(Point3::new(0.0, 0.0, -1.2), 0.5, material_center)));
    world.add(Hittables::Sphere(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.5, material_left)));
    world.add(Hittables::Sphere(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, material_right)));
    world
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let camera = Camera::new(
        192,
        108,
        std::f64::consts::FRAC_PI_4,
        Point3::new(-2.0, 2.0, 1.0),
        Point3::new(0.0, 0.0, -1.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    let scene = Scene::new(camera, three_sphere_world(), &mut rng());
    let config = RendererConfig::new(20, 10, 4, 1.0);
    let renderer = Renderer::new(config);

    c.bench_function("render 3 spheres", |b| {
        b.iter(|| std::hint::black_box(renderer.render(&scene)));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
