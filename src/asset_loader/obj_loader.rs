use std::sync::Arc;

use nalgebra::{Matrix3, Matrix4, Vector3, Vector4};
use rand::Rng;
use tobj::LoadOptions;

use crate::{
    error::RenderError,
    materials::Materials,
    objects::mesh::Mesh,
    utils::{Point3, Vec3},
};

/// Loads a triangle mesh from an OBJ file (or an equivalent format `tobj`
/// understands), applies a TRS transform, then a normalization pass that
/// re-centers the model at the origin and scales it so its largest
/// dimension is 2 world units — mirroring `model.cpp`'s `Model` constructor,
/// which applies a caller-supplied transform first and a second transform
/// computed from the loaded extent second.
///
/// `rotate` is XYZ Euler angles in radians, applied in X, then Y, then Z
/// order, matching the original's `glm::rotate` chain.
///
/// `rng` seeds the split-axis draws for the `BvhNode` built over the
/// mesh's own triangles (see `objects::mesh::Mesh::new`).
pub fn load(
    path: &str,
    translate: Vec3,
    scale: Vec3,
    rotate: Vec3,
    mat: Arc<Materials>,
    rng: &mut impl Rng,
) -> Result<Mesh, RenderError> {
    let resolved = super::build_asset_path(path).unwrap_or_else(|| path.to_string());

    let (models, _materials) = tobj::load_obj(
        &resolved,
        &LoadOptions {
            triangulate: true,
            single_index: true,
            ignore_lines: true,
            ignore_points: true,
            ..Default::default()
        },
    )
    .map_err(|e| RenderError::MeshLoad {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    let Some(model) = models.first() else {
        return Err(RenderError::MeshLoad {
            path: path.to_string(),
            reason: "file contains no meshes".to_string(),
        });
    };
    let mesh = &model.mesh;

    if mesh.positions.is_empty() {
        return Err(RenderError::MeshLoad {
            path: path.to_string(),
            reason: "mesh has no vertices".to_string(),
        });
    }

    let transform = trs_matrix(translate, scale, rotate);
    let normal_matrix = normal_matrix(&transform);

    let vertex_count = mesh.positions.len() / 3;
    let mut positions: Vec<Point3> = (0..vertex_count)
        .map(|i| {
            let p = Point3::new(
                mesh.positions[3 * i] as f64,
                mesh.positions[3 * i + 1] as f64,
                mesh.positions[3 * i + 2] as f64,
            );
            transform_point(&transform, p)
        })
        .collect();

    let (center, extent) = bounds(&positions);
    let largest = extent.x().max(extent.y()).max(extent.z()).max(1e-12);
    let norm_scale = 2.0 / largest;
    for p in &mut positions {
        *p = (*p - center) * norm_scale;
    }

    let indices: Vec<[usize; 3]> = mesh
        .indices
        .chunks_exact(3)
        .map(|c| [c[0] as usize, c[1] as usize, c[2] as usize])
        .collect();

    let normals: Vec<Vec3> = if mesh.normals.is_empty() {
        face_normals(&positions, &indices, vertex_count)
    } else {
        (0..vertex_count)
            .map(|i| {
                let n = Vec3::new(
                    mesh.normals[3 * i] as f64,
                    mesh.normals[3 * i + 1] as f64,
                    mesh.normals[3 * i + 2] as f64,
                );
                transform_normal(&normal_matrix, n).unit_vector()
            })
            .collect()
    };

    let uvs: Vec<(f64, f64)> = if mesh.texcoords.is_empty() {
        vec![(0.0, 0.0); vertex_count]
    } else {
        (0..vertex_count)
            .map(|i| (mesh.texcoords[2 * i] as f64, 1.0 - mesh.texcoords[2 * i + 1] as f64))
            .collect()
    };

    Ok(Mesh::new(&positions, &uvs, &normals, &indices, mat, rng))
}

/// `translate * scale * rotate_x * rotate_y * rotate_z`, matching the
/// original's sequential `glm::translate`/`glm::scale`/`glm::rotate` chain
/// applied to an initial identity matrix (each call post-multiplies).
fn trs_matrix(translate: Vec3, scale: Vec3, rotate: Vec3) -> Matrix4<f64> {
    let t = Matrix4::new_translation(&Vector3::new(translate.x(), translate.y(), translate.z()));
    let s = Matrix4::new_nonuniform_scaling(&Vector3::new(scale.x(), scale.y(), scale.z()));
    let rx = Matrix4::from_scaled_axis(Vector3::x() * rotate.x());
    let ry = Matrix4::from_scaled_axis(Vector3::y() * rotate.y());
    let rz = Matrix4::from_scaled_axis(Vector3::z() * rotate.z());

    t * s * rx * ry * rz
}

/// Transpose-inverse of the transform's linear (upper-left 3x3) part, so
/// normals survive non-uniform scale correctly. Falls back to the linear
/// part itself if it isn't invertible (a degenerate scale).
fn normal_matrix(transform: &Matrix4<f64>) -> Matrix3<f64> {
    let linear = transform.fixed_view::<3, 3>(0, 0).into_owned();
    linear.try_inverse().map(|inv| inv.transpose()).unwrap_or(linear)
}

fn transform_point(m: &Matrix4<f64>, p: Point3) -> Point3 {
    let v = m * Vector4::new(p.x(), p.y(), p.z(), 1.0);
    Point3::new(v.x / v.w, v.y / v.w, v.z / v.w)
}

fn transform_normal(m: &Matrix3<f64>, n: Vec3) -> Vec3 {
    let v = m * Vector3::new(n.x(), n.y(), n.z());
    Vec3::new(v.x, v.y, v.z)
}

/// Flat-shaded fallback for files with no per-vertex normals: each
/// triangle's own geometric normal, `normalize(cross(v1-v0, v2-v0))`,
/// assigned to all three of its vertices. A vertex shared by more than
/// one face ends up with whichever face visits it last, which is the
/// expected flat-shading tradeoff (no averaging across faces).
fn face_normals(positions: &[Point3], indices: &[[usize; 3]], vertex_count: usize) -> Vec<Vec3> {
    let mut normals = vec![Vec3::new(0.0, 0.0, 0.0); vertex_count];

    for &[a, b, c] in indices {
        let face_normal = (positions[b] - positions[a]).cross(&(positions[c] - positions[a])).unit_vector();
        normals[a] = face_normal;
        normals[b] = face_normal;
        normals[c] = face_normal;
    }

    normals
}

fn bounds(points: &[Point3]) -> (Point3, Vec3) {
    let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
    let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);

    for p in points {
        min = min.min(p);
        max = max.max(p);
    }

    let center = (min + max) * 0.5;
    let extent = max - min;
    (center, extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_mesh_load_error() {
        let mat = Arc::new(Materials::Lambertian(crate::materials::lambertian::Lambertian::new_from_color(
            crate::utils::Color::white(),
        )));
        let err = load(
            "definitely-not-a-real-mesh.obj",
            Vec3::origin(),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::origin(),
            mat,
            &mut rand::rng(),
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::MeshLoad { .. }));
    }

    #[test]
    fn face_normals_uses_triangle_geometry_not_a_constant() {
        // A single triangle tilted into the xz-plane: its geometric normal
        // should point along +y, not an arbitrary constant.
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let indices = vec![[0usize, 1, 2]];
        let normals = face_normals(&positions, &indices, positions.len());

        for n in &normals {
            assert!((n.y().abs() - 1.0).abs() < 1e-9);
        }

        // A second triangle facing the opposite way gets a different normal.
        let positions2 = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 0.0),
        ];
        let normals2 = face_normals(&positions2, &indices, positions2.len());
        assert!((normals[0].dot(&normals2[0]) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn trs_matrix_with_identity_args_is_identity() {
        let m = trs_matrix(Vec3::origin(), Vec3::new(1.0, 1.0, 1.0), Vec3::origin());
        let p = Point3::new(1.0, 2.0, 3.0);
        let transformed = transform_point(&m, p);
        assert!((transformed - p).length() < 1e-9);
    }

    #[test]
    fn bounds_computes_center_and_extent() {
        let pts = vec![
            Point3::new(-1.0, 0.0, -2.0),
            Point3::new(1.0, 4.0, 2.0),
        ];
        let (center, extent) = bounds(&pts);
        assert_eq!(center, Point3::new(0.0, 2.0, 0.0));
        assert_eq!(extent, Vec3::new(2.0, 4.0, 4.0));
    }
}
