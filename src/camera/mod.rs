mod ray;

pub use ray::Ray;

use crate::utils::{Point3, Vec3};

/// A pinhole camera: a pose plus a field of view, reduced at construction
/// time to the quantities the renderer actually samples from — the eye
/// position, the per-pixel delta vectors, and pixel (0,0)'s center. No
/// motion blur, shutter, or defocus: this is a static camera only.
#[derive(Debug, Clone)]
pub struct Camera {
    width: u32,
    height: u32,
    eye: Point3,
    du: Vec3,
    dv: Vec3,
    pixel00: Point3,
}

impl Camera {
    /// `vfov` is the vertical field of view in radians.
    pub fn new(width: u32, height: u32, vfov: f64, look_from: Point3, look_at: Point3, up: Vec3) -> Camera {
        let aspect = width as f64 / height as f64;
        let focal_length = (look_from - look_at).length();
        let viewport_height = 2.0 * focal_length * (vfov / 2.0).tan();
        let viewport_width = viewport_height * aspect;

        let w = (look_from - look_at).unit_vector();
        let u = up.cross(&w).unit_vector();
        let v = w.cross(&u);

        let viewport_u = u * viewport_width;
        let viewport_v = -v * viewport_height;

        let du = viewport_u / width as f64;
        let dv = viewport_v / height as f64;

        let viewport_upper_left = look_from - w * focal_length - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00 = viewport_upper_left + (du + dv) * 0.5;

        Camera {
            width,
            height,
            eye: look_from,
            du,
            dv,
            pixel00,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn eye(&self) -> Point3 {
        self.eye
    }

    pub fn du(&self) -> Vec3 {
        self.du
    }

    pub fn dv(&self) -> Vec3 {
        self.dv
    }

    /// The world-space center of pixel `(row, col)`, before sample jitter.
    pub fn pixel_center(&self, row: u32, col: u32) -> Point3 {
        self.pixel00 + self.du * col as f64 + self.dv * row as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn ray_at_test() {
        let r = Ray::new(Point3::origin(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(r.at(2.0), Point3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn camera_construction_matches_formulas() {
        let width = 200u32;
        let height = 100u32;
        let cam = Camera::new(
            width,
            height,
            PI / 2.0,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(cam.eye(), Point3::origin());

        // focal_length=1, vfov=90deg => viewport_height = 2*tan(45deg) = 2.0
        let aspect = width as f64 / height as f64;
        let viewport_height = 2.0;
        let viewport_width = viewport_height * aspect;

        assert!((cam.du().length() * width as f64 - viewport_width).abs() < 1e-9);
        assert!((cam.dv().length() * height as f64 - viewport_height).abs() < 1e-9);
    }
}
