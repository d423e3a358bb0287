use rand::Rng;

use crate::{
    camera::Ray,
    materials::Material,
    objects::HitRecord,
    utils::{Color, Vec3},
};

/// A transparent material (glass, water) that refracts and sometimes
/// reflects, per Snell's law with a Schlick-approximated reflectance.
#[derive(Debug, Clone)]
pub struct Dielectric {
    refraction_index: f64,
}

impl Dielectric {
    pub fn new(refraction_index: f64) -> Dielectric {
        Dielectric { refraction_index }
    }

    fn reflectance(cosine: f64, refraction_index: f64) -> f64 {
        let r0 = ((1.0 - refraction_index) / (1.0 + refraction_index)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut impl Rng) -> Option<(Ray, Color)> {
        let attenuation = Color::new(1.0, 1.0, 1.0);

        let ri = if rec.front_face() {
            1.0 / self.refraction_index
        } else {
            self.refraction_index
        };

        let unit_direction = r_in.direction().unit_vector();
        let cos_theta = (-unit_direction).dot(&rec.normal()).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = ri * sin_theta > 1.0;

        let direction = if cannot_refract || Dielectric::reflectance(cos_theta, ri) > rng.random::<f64>() {
            Vec3::reflect(&unit_direction, &rec.normal())
        } else {
            Vec3::refract(&unit_direction, &rec.normal(), ri)
        };

        Some((Ray::new(rec.position(), direction), attenuation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Point3;
    use rand::rng;
    use std::sync::Arc;

    #[test]
    fn always_scatters_with_unit_attenuation() {
        let d = Dielectric::new(1.5);
        let r_in = Ray::new(Point3::new(0.0, 0.0, -2.0), Vec3::new(0.0, 0.0, 1.0));
        let mat = Arc::new(crate::materials::Materials::Dielectric(d.clone()));
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
        let (_, attenuation) = d.scatter(&r_in, &rec, &mut rng).unwrap();
        assert_eq!(attenuation, Color::new(1.0, 1.0, 1.0));
    }
}
