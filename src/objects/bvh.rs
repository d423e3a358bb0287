use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::{
    camera::Ray,
    utils::{Interval, Point3},
};

#[derive(EnumIter, Debug, Clone, Copy)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Stores 3 intervals to represent a bounding box; used to accelerate
/// ray casting by letting the BVH reject whole subtrees cheaply.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Aabb {
    x: Interval,
    y: Interval,
    z: Interval,
}

impl Default for Aabb {
    fn default() -> Self {
        Aabb::UNIVERSE
    }
}

impl Aabb {
    pub fn new_from_intervals(x: Interval, y: Interval, z: Interval) -> Aabb {
        Aabb { x, y, z }
    }

    /// Makes the bounding box from two points representing the extrema
    /// of the box (coordinate-wise min/max, either corner order).
    pub fn new_from_points(a: Point3, b: Point3) -> Aabb {
        let x = if a.x() <= b.x() {
            Interval::new(a.x(), b.x())
        } else {
            Interval::new(b.x(), a.x())
        };
        let y = if a.y() <= b.y() {
            Interval::new(a.y(), b.y())
        } else {
            Interval::new(b.y(), a.y())
        };
        let z = if a.z() <= b.z() {
            Interval::new(a.z(), b.z())
        } else {
            Interval::new(b.z(), a.z())
        };

        Aabb::new_from_intervals(x, y, z)
    }

    /// Creates a new box enclosing both of the parameter boxes.
    pub fn new_from_boxes(box0: &Aabb, box1: &Aabb) -> Aabb {
        let x = Interval::tight_enclose(&box0.x, &box1.x);
        let y = Interval::tight_enclose(&box0.y, &box1.y);
        let z = Interval::tight_enclose(&box0.z, &box1.z);

        Aabb::new_from_intervals(x, y, z)
    }

    pub fn axis_interval(&self, n: Axis) -> &Interval {
        match n {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    pub fn hit(&self, r: &Ray, ray_t: &mut Interval) -> bool {
        let ray_orig = r.origin();
        let ray_dir = r.direction();

        for axis in Axis::iter() {
            let ax = self.axis_interval(axis);

            let (ray_orig_axis, ray_dir_axis) = match axis {
                Axis::X => (ray_orig.x(), ray_dir.x()),
                Axis::Y => (ray_orig.y(), ray_dir.y()),
                Axis::Z => (ray_orig.z(), ray_dir.z()),
            };
            // Relies on IEEE-754 infinity arithmetic when ray_dir_axis is 0.
            let adinv = 1.0 / ray_dir_axis;

            let t0 = (ax.min() - ray_orig_axis) * adinv;
            let t1 = (ax.max() - ray_orig_axis) * adinv;

            let (new_min, new_max) = if t0 < t1 {
                (t0.max(ray_t.min()), t1.min(ray_t.max()))
            } else {
                (t1.max(ray_t.min()), t0.min(ray_t.max()))
            };

            *ray_t = Interval::new(new_min, new_max);

            if ray_t.max() <= ray_t.min() {
                return false;
            }
        }

        true
    }

    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    pub const UNIVERSE: Aabb = Aabb {
        x: Interval::UNIVERSE,
        y: Interval::UNIVERSE,
        z: Interval::UNIVERSE,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Ray;

    #[test]
    fn hit_slab_basic() {
        let bbox = Aabb::new_from_points(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let r = Ray::new(Point3::new(0.0, 0.0, -5.0), Point3::new(0.0, 0.0, 1.0));
        let mut t = Interval::UNIVERSE;
        assert!(bbox.hit(&r, &mut t));
    }

    #[test]
    fn miss_slab() {
        let bbox = Aabb::new_from_points(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let r = Ray::new(Point3::new(5.0, 5.0, -5.0), Point3::new(0.0, 0.0, 1.0));
        let mut t = Interval::UNIVERSE;
        assert!(!bbox.hit(&r, &mut t));
    }

    #[test]
    fn zero_direction_component_uses_infinity() {
        let bbox = Aabb::new_from_points(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let r = Ray::new(Point3::new(0.0, 0.0, -5.0), Point3::new(0.0, 1.0, 1.0));
        let mut t = Interval::UNIVERSE;
        assert!(bbox.hit(&r, &mut t));
    }
}
