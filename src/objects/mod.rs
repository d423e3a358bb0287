pub mod bvh;
pub mod bvh_node;
pub mod hitlist;
pub mod mesh;
pub mod sphere;
pub mod triangle;

use std::sync::Arc;

use crate::{
    camera::Ray,
    materials::Materials,
    objects::{
        bvh::Aabb, bvh_node::BvhNode, hitlist::HitList, mesh::Mesh, sphere::Sphere,
        triangle::Triangle,
    },
    utils::{Interval, Point3, Vec3},
};

/// The result of a successful intersection: world-space position, the
/// normal oriented against the incoming ray, the texture coordinate, the
/// ray parameter, and the material that was hit.
#[derive(Clone)]
pub struct HitRecord {
    loc: Point3,
    normal: Vec3,
    mat: Arc<Materials>,
    t: f64,
    pub u_texture: f64,
    pub v_texture: f64,
    front_face: bool,
}

impl HitRecord {
    /// Builds a new HitRecord, orienting `normal` against `hit_ray` and
    /// setting `front_face` accordingly.
    ///
    /// # Safety
    /// `normal` must already be unit length. Not normalized here so
    /// callers that already know they have a unit vector (e.g. the
    /// sphere's `(p - center) / radius`) can skip the extra work.
    pub unsafe fn new(
        hit_ray: &Ray,
        loc: Point3,
        normal: Vec3,
        t: f64,
        u_texture: f64,
        v_texture: f64,
        mat: Arc<Materials>,
    ) -> HitRecord {
        let front_face = hit_ray.direction().dot(&normal) < 0.0;
        let new_normal = if front_face { normal } else { -normal };

        HitRecord {
            loc,
            normal: new_normal,
            mat,
            t,
            u_texture,
            v_texture,
            front_face,
        }
    }

    /// Builds a HitRecord, normalizing `normal` first. Prefer this unless
    /// the caller already knows the normal is unit length.
    pub fn safe_new(
        hit_ray: &Ray,
        loc: Point3,
        normal: Vec3,
        t: f64,
        u_texture: f64,
        v_texture: f64,
        mat: Arc<Materials>,
    ) -> HitRecord {
        let normal = normal.unit_vector();
        // Safety: just normalized above.
        unsafe { HitRecord::new(hit_ray, loc, normal, t, u_texture, v_texture, mat) }
    }

    pub fn position(&self) -> Point3 {
        self.loc
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn front_face(&self) -> bool {
        self.front_face
    }

    pub fn material(&self) -> &Materials {
        &self.mat
    }
}

/// A sum type over the closed set of hittable kinds. Dispatching through
/// a match instead of `dyn Hittable` avoids a vtable indirection per hit
/// test, at the cost of needing a match arm whenever a variant is added.
#[derive(Clone)]
pub enum Hittables {
    Sphere(Sphere),
    Triangle(Triangle),
    Mesh(Mesh),
    HitList(HitList),
    Bvh(BvhNode),
}

impl Hittables {
    pub fn hit(&self, r: &Ray, ray_t: &Interval) -> Option<HitRecord> {
        match self {
            Hittables::Sphere(s) => s.hit(r, ray_t),
            Hittables::Triangle(t) => t.hit(r, ray_t),
            Hittables::Mesh(m) => m.hit(r, ray_t),
            Hittables::HitList(l) => l.hit(r, ray_t),
            Hittables::Bvh(b) => b.hit(r, ray_t),
        }
    }

    pub fn bounding_box(&self) -> &Aabb {
        match self {
            Hittables::Sphere(s) => s.bounding_box(),
            Hittables::Triangle(t) => t.bounding_box(),
            Hittables::Mesh(m) => m.bounding_box(),
            Hittables::HitList(l) => l.bounding_box(),
            Hittables::Bvh(b) => b.bounding_box(),
        }
    }
}

/// A vertex of a triangle: position plus the per-vertex uv and normal
/// used for barycentric interpolation at hit time.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3,
    pub uv: (f64, f64),
    pub normal: Vec3,
}

impl Vertex {
    pub fn new(position: Point3, uv: (f64, f64), normal: Vec3) -> Vertex {
        Vertex { position, uv, normal }
    }
}

/// Anything that can answer an intersection query and report a
/// conservative bounding box. Hittables are created once at scene build
/// time and shared (by `Arc`) between a `HitList`, a `BvhNode`, and any
/// parent `Mesh`; they are immutable after construction.
pub trait Hittable {
    fn hit(&self, r: &Ray, ray_t: &Interval) -> Option<HitRecord>;
    fn bounding_box(&self) -> &Aabb;
}
