use std::f64::consts::PI;
use std::sync::Arc;

use crate::{
    camera::Ray,
    materials::Materials,
    objects::{HitRecord, Hittable, bvh::Aabb},
    utils::{Interval, Point3, Vec3},
};

/// A sphere in world space: center, radius, and a shared material handle.
#[derive(Clone)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    mat: Arc<Materials>,
    bbox: Aabb,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64, mat: Arc<Materials>) -> Sphere {
        assert!(radius >= 0.0, "Cannot make a sphere with negative radius");

        let rvec = Vec3::new(radius, radius, radius);
        let bbox = Aabb::new_from_points(center - rvec, center + rvec);

        Sphere {
            center,
            radius,
            mat,
            bbox,
        }
    }

    /// `u = 0.5 + atan2(d.z, d.x) / (2*pi)`, `v = 0.5 + asin(d.y) / pi`,
    /// where `d` is the *inward* unit direction `normalize(center - p)`.
    /// This is the historic convention of this codebase (inverted from
    /// the more common `normalize(p - center)`) and is preserved on
    /// purpose for test stability, not "fixed".
    fn get_sphere_uv(d: &Vec3) -> (f64, f64) {
        let u = 0.5 + d.z().atan2(d.x()) / (2.0 * PI);
        let v = 0.5 + d.y().clamp(-1.0, 1.0).asin() / PI;
        (u, v)
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: &Interval) -> Option<HitRecord> {
        let oc = self.center - r.origin();

        let a = r.direction().length_squared();
        let h = r.direction().dot(&oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let t = root;
        let p = r.at(t);
        let outward_normal = (p - self.center) / self.radius;
        let d = (self.center - p).unit_vector();
        let (u, v) = Sphere::get_sphere_uv(&d);

        // Safety: outward_normal is (p - center) / radius, already unit length.
        let rec = unsafe { HitRecord::new(r, p, outward_normal, t, u, v, self.mat.clone()) };
        Some(rec)
    }

    fn bounding_box(&self) -> &Aabb {
        &self.bbox
    }
}
