pub mod scene_io;

use rand::Rng;

use crate::{
    camera::{Camera, Ray},
    objects::{Hittable, Hittables, bvh_node::BvhNode, hitlist::HitList},
    utils::Interval,
};

/// A fully built scene ready to render: a camera pose plus the top-level
/// hittable it traces against. An empty scene skips BVH construction
/// entirely and traces against an empty `HitList`, since `BvhNode::build`
/// is only defined over a non-empty span.
pub struct Scene {
    camera: Camera,
    world: Hittables,
}

impl Scene {
    pub fn new(camera: Camera, list: HitList, rng: &mut impl Rng) -> Scene {
        let world = if list.is_empty() {
            log::debug!("empty scene, skipping BVH construction");
            Hittables::HitList(list)
        } else {
            let object_count = list.get_objs().len();
            let world = BvhNode::from_list(list, rng);
            log::debug!("built BVH over {object_count} objects");
            world
        };

        Scene { camera, world }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn hit(&self, r: &Ray, ray_t: &Interval) -> Option<crate::objects::HitRecord> {
        self.world.hit(r, ray_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{Materials, lambertian::Lambertian};
    use crate::objects::sphere::Sphere;
    use crate::utils::{Color, Point3, Vec3};
    use rand::rng;
    use std::sync::Arc;

    fn camera() -> Camera {
        Camera::new(
            10,
            10,
            std::f64::consts::FRAC_PI_2,
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn empty_scene_never_hits() {
        let scene = Scene::new(camera(), HitList::default(), &mut rng());
        let r = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));
        assert!(scene.hit(&r, &Interval::new(0.001, f64::INFINITY)).is_none());
    }

    #[test]
    fn non_empty_scene_builds_a_bvh_and_hits() {
        let mat = Arc::new(Materials::Lambertian(Lambertian::new_from_color(Color::new(
            0.5, 0.5, 0.5,
        ))));
        let mut list = HitList::default();
        list.add(Hittables::Sphere(Sphere::new(Point3::origin(), 1.0, mat)));

        let scene = Scene::new(camera(), list, &mut rng());
        let r = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(scene.hit(&r, &Interval::new(0.001, f64::INFINITY)).is_some());
    }
}
