use std::sync::Arc;

use rand::Rng;

use crate::{
    camera::Ray,
    materials::Material,
    objects::HitRecord,
    textures::Texture,
    utils::{Color, Vec3},
};

/// Where a Lambertian's albedo comes from: a constant color, or an image
/// sampled at the hit's uv.
#[derive(Debug, Clone)]
pub enum Albedo {
    Constant(Color),
    Image(Arc<Texture>),
}

impl Albedo {
    /// # Panics
    /// Panics if the underlying texture's filtering mode isn't `Nearest`
    /// (the only mode this crate implements; no scene format here can
    /// even request another).
    fn sample(&self, u: f64, v: f64) -> Color {
        match self {
            Albedo::Constant(c) => *c,
            Albedo::Image(tex) => tex.sample(u, v).expect("non-Nearest texture filtering is not implemented"),
        }
    }
}

/// A perfectly matte material. Albedo comes from either a constant color
/// or a texture sampled at the hit's uv.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Albedo,
}

impl Lambertian {
    pub fn new_from_color(c: Color) -> Lambertian {
        Lambertian {
            albedo: Albedo::Constant(c),
        }
    }

    pub fn new_from_texture(tex: Arc<Texture>) -> Lambertian {
        Lambertian {
            albedo: Albedo::Image(tex),
        }
    }
}

impl Material for Lambertian {
    fn scatter(&self, _r_in: &Ray, rec: &HitRecord, rng: &mut impl Rng) -> Option<(Ray, Color)> {
        let mut scatter_dir = rec.normal() + Vec3::random_unit_vector(rng);

        if scatter_dir.near_zero() {
            scatter_dir = rec.normal();
        }

        let scattered = Ray::new(rec.position(), scatter_dir);
        let attenuation = self.albedo.sample(rec.u_texture, rec.v_texture);

        Some((scattered, attenuation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Ray;
    use crate::objects::HitRecord;
    use crate::utils::Point3;
    use rand::rng;
    use std::sync::Arc as StdArc;

    #[test]
    fn always_scatters_and_never_emits() {
        let l = Lambertian::new_from_color(Color::new(0.5, 0.5, 0.5));
        let r_in = Ray::new(Point3::new(0.0, 0.0, -2.0), Vec3::new(0.0, 0.0, 1.0));
        let mat = StdArc::new(crate::materials::Materials::Lambertian(l.clone()));
        let rec = HitRecord::safe_new(
            &r_in,
            Point3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, -1.0),
            1.0,
            0.0,
            0.0,
            mat,
        );

        let mut rng = rng();
        assert!(l.scatter(&r_in, &rec, &mut rng).is_some());
        assert!(l.emitted(0.0, 0.0).is_none());
    }
}
