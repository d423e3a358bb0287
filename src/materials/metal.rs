use rand::Rng;

use crate::{
    camera::Ray,
    materials::Material,
    objects::HitRecord,
    utils::{Color, Vec3},
};

/// A reflective material. Fuzz perturbs the otherwise-perfect reflection.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    pub fn new(c: Color, fuzz: f64) -> Metal {
        Metal {
            albedo: c,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut impl Rng) -> Option<(Ray, Color)> {
        let reflected = Vec3::reflect(&r_in.direction(), &rec.normal());
        let reflected = reflected.unit_vector() + Vec3::random_unit_vector(rng) * self.fuzz;

        let scattered = Ray::new(rec.position(), reflected);

        if scattered.direction().dot(&rec.normal()) > 0.0 {
            Some((scattered, self.albedo))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Point3;
    use rand::rng;
    use std::sync::Arc;

    #[test]
    fn fuzz_is_clamped_not_asserted() {
        let m = Metal::new(Color::white(), 5.0);
        let r_in = Ray::new(Point3::new(0.0, 0.0, -2.0), Vec3::new(0.0, 0.0, 1.0));
        let mat = Arc::new(crate::materials::Materials::Metal(m.clone()));
        let rec = HitRecord::safe_new(
            &r_in,
            Point3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, -1.0),
            1.0,
            0.0,
            0.0,
            mat,
        );
        // Should not panic even though fuzz was given well out of [0, 1].
        let mut rng = rng();
        m.scatter(&r_in, &rec, &mut rng);
    }

    #[test]
    fn rejects_scatter_into_surface() {
        let m = Metal::new(Color::white(), 0.0);
        // Ray hitting head-on: reflection with zero fuzz bounces straight
        // back along the normal, so dot(scattered, normal) > 0 always.
        let r_in = Ray::new(Point3::new(0.0, 0.0, -2.0), Vec3::new(0.0, 0.0, 1.0));
        let mat = Arc::new(crate::materials::Materials::Metal(m.clone()));
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
        assert!(m.scatter(&r_in, &rec, &mut rng).is_some());
    }
}
