use std::sync::Arc;

use crate::{
    camera::Ray,
    materials::Materials,
    objects::{HitRecord, Hittable, Vertex, bvh::Aabb},
    utils::Interval,
};

const EPSILON: f64 = 1e-10;

/// A triangle defined by three vertices (position, uv, normal), sharing
/// a single material. Hit uses Möller-Trumbore and interpolates both uv
/// and normal by the barycentric weights of the hit point.
#[derive(Clone)]
pub struct Triangle {
    verts: [Vertex; 3],
    mat: Arc<Materials>,
    bbox: Aabb,
}

impl Triangle {
    pub fn new(a: Vertex, b: Vertex, c: Vertex, mat: Arc<Materials>) -> Triangle {
        let bbox = Aabb::new_from_points(a.position, b.position);
        let bbox = Aabb::new_from_boxes(&bbox, &Aabb::new_from_points(b.position, c.position));
        let bbox = Aabb::new_from_boxes(&bbox, &Aabb::new_from_points(c.position, a.position));

        Triangle {
            verts: [a, b, c],
            mat,
            bbox,
        }
    }
}

impl Hittable for Triangle {
    fn hit(&self, r: &Ray, ray_t: &Interval) -> Option<HitRecord> {
        let [a, b, c] = self.verts;

        let e1 = b.position - a.position;
        let e2 = c.position - a.position;

        let p = r.direction().cross(&e2);
        let det = e1.dot(&p);
        if det.abs() < EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let s = r.origin() - a.position;
        let u = inv_det * s.dot(&p);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(&e1);
        let v = inv_det * r.direction().dot(&q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = inv_det * e2.dot(&q);
        if t <= EPSILON || !ray_t.surrounds(t) {
            return None;
        }

        let w = 1.0 - u - v;
        let uv = (
            w * a.uv.0 + u * b.uv.0 + v * c.uv.0,
            w * a.uv.1 + u * b.uv.1 + v * c.uv.1,
        );
        let outward_normal = a.normal * w + b.normal * u + c.normal * v;

        let point = r.at(t);
        let rec = HitRecord::safe_new(r, point, outward_normal, t, uv.0, uv.1, self.mat.clone());
        Some(rec)
    }

    fn bounding_box(&self) -> &Aabb {
        &self.bbox
    }
}
