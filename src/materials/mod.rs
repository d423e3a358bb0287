use rand::Rng;

use crate::{
    camera::Ray,
    materials::{
        dielectric::Dielectric, diffuse_emissive::DiffuseEmissive, lambertian::Lambertian,
        metal::Metal,
    },
    objects::HitRecord,
    utils::Color,
};

pub mod dielectric;
pub mod diffuse_emissive;
pub mod lambertian;
pub mod metal;

/// A wrapper around the closed set of material kinds, dispatching calls
/// to the concrete implementation. Materials are immutable once built
/// and shared (via `Arc`) between every hittable that references them.
#[derive(Debug, Clone)]
pub enum Materials {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
    DiffuseEmissive(DiffuseEmissive),
}

impl Materials {
    pub fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut impl Rng) -> Option<(Ray, Color)> {
        match self {
            Materials::Lambertian(l) => l.scatter(r_in, rec, rng),
            Materials::Metal(m) => m.scatter(r_in, rec, rng),
            Materials::Dielectric(d) => d.scatter(r_in, rec, rng),
            Materials::DiffuseEmissive(e) => e.scatter(r_in, rec, rng),
        }
    }

    pub fn emitted(&self, u: f64, v: f64) -> Option<Color> {
        match self {
            Materials::Lambertian(l) => l.emitted(u, v),
            Materials::Metal(m) => m.emitted(u, v),
            Materials::Dielectric(d) => d.emitted(u, v),
            Materials::DiffuseEmissive(e) => e.emitted(u, v),
        }
    }
}

/// Scattering and emission behavior of a material. `scatter` returning
/// `None` absorbs the ray and terminates the path; `emitted` returning
/// `Some` adds directly to the pixel's accumulated radiance at the hit.
pub trait Material {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut impl Rng) -> Option<(Ray, Color)>;

    /// Most materials don't emit light.
    fn emitted(&self, _u: f64, _v: f64) -> Option<Color> {
        None
    }
}
