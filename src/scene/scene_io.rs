use std::fs;
use std::sync::Arc;

use rand::Rng;
use serde_json::Value;

use crate::{
    asset_loader,
    camera::Camera,
    error::RenderError,
    materials::{
        Materials, dielectric::Dielectric, diffuse_emissive::DiffuseEmissive,
        lambertian::Lambertian, metal::Metal,
    },
    objects::{Hittables, hitlist::HitList, sphere::Sphere},
    utils::{Color, Point3, Vec3, degrees_to_radians},
};

/// Parses a scene description file into a camera and the top-level list of
/// hittables, mirroring `scene_parser.cpp`'s two-pass `parse_camera` /
/// `parse_scene`. Unknown material or object `type` values are rejected
/// with a descriptive error rather than silently skipped, unlike the
/// original's `parse_material`, which logs and returns `nullptr`.
pub fn load_scene(path: &str) -> Result<(Camera, HitList), RenderError> {
    let contents = fs::read_to_string(path).map_err(|e| RenderError::SceneFileIo {
        path: path.to_string(),
        source: e,
    })?;

    let root: Value = serde_json::from_str(&contents).map_err(|e| RenderError::SceneParse {
        path: path.to_string(),
        source: e,
    })?;

    let camera = parse_camera(&root["camera"]);
    let mut rng = rand::rng();
    let list = parse_scene(&root["scene"], &mut rng)?;

    Ok((camera, list))
}

fn parse_camera(data: &Value) -> Camera {
    let width = field_u32(data, "width", 400);
    let height = field_u32(data, "height", 225);
    let fov_degrees = field_f64(data, "fov", 90.0);
    let look_from = field_vec3(data, "lookFrom", Point3::origin());
    let look_at = field_vec3(data, "lookAt", Point3::new(0.0, 0.0, -1.0));
    let up = field_vec3(data, "up", Vec3::new(0.0, 1.0, 0.0));

    Camera::new(width, height, degrees_to_radians(fov_degrees), look_from, look_at, up)
}

fn parse_scene(data: &Value, rng: &mut impl Rng) -> Result<HitList, RenderError> {
    let mut list = HitList::default();

    let Some(objects) = data.as_array() else {
        return Ok(list);
    };

    for obj in objects {
        let type_name = obj["type"].as_str().unwrap_or("");

        match type_name {
            "sphere" => {
                let center = field_vec3(obj, "center", Point3::origin());
                let radius = field_f64(obj, "radius", 0.5);
                let mat = Arc::new(parse_material(&obj["material"])?);
                list.add(Hittables::Sphere(Sphere::new(center, radius, mat)));
            }
            "mesh" => {
                let path = obj["path"].as_str().ok_or_else(|| RenderError::UnknownObjectType {
                    type_name: "mesh (missing \"path\")".to_string(),
                })?;
                let mat = Arc::new(parse_material(&obj["material"])?);
                let translate = field_vec3(obj, "translate", Point3::origin());
                let scale = field_vec3(obj, "scale", Vec3::new(1.0, 1.0, 1.0));
                let rotate = field_vec3(obj, "rotate", Vec3::origin());

                let mesh = asset_loader::obj_loader::load(path, translate, scale, rotate, mat, rng)?;
                list.add(Hittables::Mesh(mesh));
            }
            other => {
                return Err(RenderError::UnknownObjectType {
                    type_name: other.to_string(),
                });
            }
        }
    }

    Ok(list)
}

fn parse_material(data: &Value) -> Result<Materials, RenderError> {
    let type_name = data["type"].as_str().unwrap_or("");

    match type_name {
        "lambertian" => {
            let albedo = field_color(data, "albedo", Color::white());
            Ok(Materials::Lambertian(Lambertian::new_from_color(albedo)))
        }
        "metal" => {
            let albedo = field_color(data, "albedo", Color::white());
            let fuzz = field_f64(data, "fuzz", 0.0);
            Ok(Materials::Metal(Metal::new(albedo, fuzz)))
        }
        "dielectric" => {
            let index = field_f64(data, "index", 1.5);
            Ok(Materials::Dielectric(Dielectric::new(index)))
        }
        "emissive" => {
            let color = field_color(data, "color", Color::white());
            let intensity = field_f64(data, "intensity", 1.0);
            Ok(Materials::DiffuseEmissive(DiffuseEmissive::new(color, intensity)))
        }
        other => Err(RenderError::UnknownMaterialType {
            type_name: other.to_string(),
        }),
    }
}

fn field_f64(data: &Value, key: &str, default: f64) -> f64 {
    data.get(key).and_then(Value::as_f64).unwrap_or(default)
}

fn field_u32(data: &Value, key: &str, default: u32) -> u32 {
    data.get(key)
        .and_then(Value::as_u64)
        .map(|v| v as u32)
        .unwrap_or(default)
}

fn field_vec3(data: &Value, key: &str, default: Vec3) -> Vec3 {
    data.get(key)
        .and_then(Value::as_array)
        .filter(|a| a.len() == 3)
        .and_then(|a| {
            Some(Vec3::new(a[0].as_f64()?, a[1].as_f64()?, a[2].as_f64()?))
        })
        .unwrap_or(default)
}

fn field_color(data: &Value, key: &str, default: Color) -> Color {
    let v = field_vec3(data, key, default.as_vec3());
    Color::new(v.x(), v.y(), v.z())
}
