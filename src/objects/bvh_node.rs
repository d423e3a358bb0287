use std::sync::Arc;

use rand::Rng;

use crate::{
    camera::Ray,
    objects::{HitRecord, Hittable, Hittables, bvh::Aabb, bvh::Axis, hitlist::HitList},
    utils::Interval,
};

/// A binary node of the bounding volume hierarchy. Leaves and interior
/// nodes are both `Hittables` behind an `Arc`, so splitting never clones
/// a primitive, only the reference to it.
#[derive(Clone)]
pub struct BvhNode {
    left: Arc<Hittables>,
    right: Arc<Hittables>,
    bbox: Aabb,
}

impl BvhNode {
    pub fn from_list(list: HitList, rng: &mut impl Rng) -> Hittables {
        let mut objs: Vec<Arc<Hittables>> = list.get_objs().iter().cloned().map(Arc::new).collect();
        let len = objs.len();
        Self::build(&mut objs, 0, len, rng)
    }

    /// Builds a BVH over `objs[start..end]`. The split axis is drawn
    /// uniformly at random on every call: this is the historical policy
    /// of the codebase this is grounded on, not a heuristic upgrade, and
    /// callers/tests must not assume a particular resulting tree shape.
    fn build(objs: &mut [Arc<Hittables>], start: usize, end: usize, rng: &mut impl Rng) -> Hittables {
        let axis = match rng.random_range(0..3) {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        };

        let span = end - start;
        let (left, right) = if span == 1 {
            (objs[start].clone(), objs[start].clone())
        } else if span == 2 {
            if axis_min(&objs[start], axis) <= axis_min(&objs[start + 1], axis) {
                (objs[start].clone(), objs[start + 1].clone())
            } else {
                (objs[start + 1].clone(), objs[start].clone())
            }
        } else {
            objs[start..end].sort_by(|a, b| {
                axis_min(a, axis)
                    .partial_cmp(&axis_min(b, axis))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            let mid = start + span / 2;
            let left = Arc::new(Self::build(objs, start, mid, rng));
            let right = Arc::new(Self::build(objs, mid, end, rng));
            (left, right)
        };

        let bbox = Aabb::new_from_boxes(left.bounding_box(), right.bounding_box());
        Hittables::Bvh(BvhNode { left, right, bbox })
    }
}

fn axis_min(obj: &Hittables, axis: Axis) -> f64 {
    obj.bounding_box().axis_interval(axis).min()
}

impl Hittable for BvhNode {
    fn hit(&self, r: &Ray, ray_t: &Interval) -> Option<HitRecord> {
        let mut window = *ray_t;
        if !self.bbox.hit(r, &mut window) {
            return None;
        }

        let hit_left = self.left.hit(r, ray_t);
        let right_max = hit_left.as_ref().map_or(ray_t.max(), |h| h.t());
        let hit_right = self.right.hit(r, &Interval::new(ray_t.min(), right_max));

        hit_right.or(hit_left)
    }

    fn bounding_box(&self) -> &Aabb {
        &self.bbox
    }
}
