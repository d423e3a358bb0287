use crate::{
    camera::Ray,
    objects::{HitRecord, Hittable, Hittables, bvh::Aabb},
    utils::Interval,
};

/// An ordered sequence of hittables with an incrementally maintained
/// union bounding box. An empty list reports the universe (unbounded)
/// box rather than a tight-but-meaningless empty one; callers must not
/// rely on a tight bound for an empty list.
#[derive(Clone)]
pub struct HitList {
    objs: Vec<Hittables>,
    bbox: Aabb,
}

impl HitList {
    pub fn new(objs: Vec<Hittables>) -> HitList {
        let mut list = HitList {
            objs: Vec::new(),
            bbox: Aabb::EMPTY,
        };
        for obj in objs {
            list.add(obj);
        }
        list
    }

    pub fn clear(&mut self) {
        self.objs.clear();
        self.bbox = Aabb::EMPTY;
    }

    pub fn add(&mut self, obj: Hittables) {
        self.bbox = Aabb::new_from_boxes(&self.bbox, obj.bounding_box());
        self.objs.push(obj);
    }

    pub fn get_objs(&self) -> &Vec<Hittables> {
        &self.objs
    }

    pub fn is_empty(&self) -> bool {
        self.objs.is_empty()
    }
}

impl Default for HitList {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl Hittable for HitList {
    fn hit(&self, r: &Ray, ray_t: &Interval) -> Option<HitRecord> {
        let mut rec: Option<HitRecord> = None;
        let mut closest = ray_t.max();

        for obj in &self.objs {
            let new_interval = Interval::new(ray_t.min(), closest);
            if let Some(hit) = obj.hit(r, &new_interval) {
                closest = hit.t();
                rec = Some(hit);
            }
        }

        rec
    }

    fn bounding_box(&self) -> &Aabb {
        if self.objs.is_empty() {
            &Aabb::UNIVERSE
        } else {
            &self.bbox
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{Materials, lambertian::Lambertian};
    use crate::objects::sphere::Sphere;
    use crate::utils::{Color, Point3};
    use std::sync::Arc;

    fn sphere(center: Point3, radius: f64) -> Hittables {
        let mat = Arc::new(Materials::Lambertian(Lambertian::new_from_color(Color::new(
            0.5, 0.5, 0.5,
        ))));
        Hittables::Sphere(Sphere::new(center, radius, mat))
    }

    #[test]
    fn empty_list_is_universe_and_never_hits() {
        let list = HitList::default();
        let r = Ray::new(Point3::origin(), crate::utils::Vec3::new(0.0, 0.0, 1.0));
        assert!(list.hit(&r, &Interval::UNIVERSE).is_none());
        assert_eq!(list.bounding_box().axis_interval(crate::objects::bvh::Axis::X).min(), f64::NEG_INFINITY);
    }

    #[test]
    fn closest_hit_among_children() {
        let mut list = HitList::default();
        list.add(sphere(Point3::new(0.0, 0.0, 0.0), 1.0));
        list.add(sphere(Point3::new(0.0, 0.0, 3.0), 1.0));

        let r = Ray::new(Point3::new(0.0, 0.0, -5.0), crate::utils::Vec3::new(0.0, 0.0, 1.0));
        let rec = list.hit(&r, &Interval::new(0.0, f64::INFINITY)).unwrap();
        assert!((rec.t() - 4.0).abs() < 1e-9);
    }
}
