use rand::Rng;

use crate::{camera::Ray, materials::Material, objects::HitRecord, utils::Color};

/// A light-emitting surface with no scattering. Stores `color * intensity`
/// up front since `emitted` never varies by uv.
#[derive(Debug, Clone)]
pub struct DiffuseEmissive {
    emission: Color,
}

impl DiffuseEmissive {
    pub fn new(color: Color, intensity: f64) -> DiffuseEmissive {
        DiffuseEmissive {
            emission: color * intensity,
        }
    }
}

impl Material for DiffuseEmissive {
    fn scatter(&self, _r_in: &Ray, _rec: &HitRecord, _rng: &mut impl Rng) -> Option<(Ray, Color)> {
        None
    }

    fn emitted(&self, _u: f64, _v: f64) -> Option<Color> {
        Some(self.emission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{Point3, Vec3};
    use rand::rng;
    use std::sync::Arc;

    #[test]
    fn never_scatters_always_emits_color_times_intensity() {
        let e = DiffuseEmissive::new(Color::new(1.0, 0.5, 0.2), 4.0);
        let r_in = Ray::new(Point3::new(0.0, 0.0, -2.0), Vec3::new(0.0, 0.0, 1.0));
        let mat = Arc::new(crate::materials::Materials::DiffuseEmissive(e.clone()));
        let rec = HitRecord::safe_new(
            &r_in,
            Point3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, -1.0),
            1.0,
            0.3,
            0.7,
            mat,
        );

        let mut rng = rng();
        assert!(e.scatter(&r_in, &rec, &mut rng).is_none());
        assert_eq!(e.emitted(0.3, 0.7), Some(Color::new(4.0, 2.0, 0.8)));
        // emitted is independent of uv.
        assert_eq!(e.emitted(0.0, 0.0), Some(Color::new(4.0, 2.0, 0.8)));
    }
}
