use std::sync::Arc;

use rand::Rng;

use crate::{
    camera::Ray,
    materials::Materials,
    objects::{HitRecord, Hittable, Hittables, Vertex, bvh::Aabb, bvh_node::BvhNode, hitlist::HitList, triangle::Triangle},
    utils::Interval,
};

/// A triangle mesh sharing a single material, backed by a `BvhNode` over
/// its own triangles rather than a linear scan — the same split-at-build,
/// traverse-at-hit shape `Scene` uses for the top-level world, just scoped
/// to one mesh's primitives instead of the whole scene.
#[derive(Clone)]
pub struct Mesh {
    world: Hittables,
}

impl Mesh {
    pub fn new(
        positions: &[crate::utils::Point3],
        uvs: &[(f64, f64)],
        normals: &[crate::utils::Vec3],
        indices: &[[usize; 3]],
        mat: Arc<Materials>,
        rng: &mut impl Rng,
    ) -> Mesh {
        let mut list = HitList::default();

        for tri in indices {
            let verts: Vec<Vertex> = tri
                .iter()
                .map(|&i| Vertex::new(positions[i], uvs[i], normals[i]))
                .collect();
            let triangle = Triangle::new(verts[0], verts[1], verts[2], mat.clone());
            list.add(Hittables::Triangle(triangle));
        }

        // `BvhNode::build` isn't defined over an empty span, same reason
        // `Scene::new` special-cases an empty `HitList`.
        let world = if list.is_empty() {
            Hittables::HitList(list)
        } else {
            BvhNode::from_list(list, rng)
        };

        Mesh { world }
    }
}

impl Hittable for Mesh {
    fn hit(&self, r: &Ray, ray_t: &Interval) -> Option<HitRecord> {
        self.world.hit(r, ray_t)
    }

    fn bounding_box(&self) -> &Aabb {
        self.world.bounding_box()
    }
}
