//! glTF/GLB model loading.
//!
//! Only what the showcase needs is extracted: per-primitive bounds in model
//! space, a capped sample of vertex positions for the point renderer, the
//! emissive material factors, and animation clip durations.

use crate::color::Rgb;
use crate::constants::MAX_MODEL_POINTS;
use crate::error::LoadError;
use crate::model::{ClipInfo, Emissive, ModelScene, SceneMesh};
use crate::pick::Aabb;
use glam::{Mat4, Vec3};

/// Parse a self-contained glTF (GLB or embedded JSON) from memory.
pub fn load_model_bytes(bytes: &[u8]) -> Result<ModelScene, LoadError> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    let blob = gltf.blob.as_deref();

    let mut meshes = Vec::new();
    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next());
    if let Some(scene) = scene {
        for node in scene.nodes() {
            visit_node(&node, Mat4::IDENTITY, blob, &mut meshes);
        }
    }
    if meshes.is_empty() {
        return Err(LoadError::NoMeshes);
    }

    let bounds = meshes
        .iter()
        .fold(Aabb::EMPTY, |acc, m: &SceneMesh| acc.union(&m.bounds));
    if bounds.is_empty() || bounds.max_dimension() <= f32::EPSILON {
        return Err(LoadError::DegenerateBounds);
    }
    thin_points(&mut meshes, MAX_MODEL_POINTS);

    let clips = gltf
        .animations()
        .enumerate()
        .map(|(i, anim)| ClipInfo {
            name: anim
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("clip{i}")),
            duration: anim
                .channels()
                .filter_map(|c| accessor_max_scalar(&c.sampler().input()))
                .fold(0.0_f32, f32::max),
        })
        .collect::<Vec<_>>();

    log::info!(
        "[model] {} meshes, {} sample points, {} clips, size=({:.2},{:.2},{:.2})",
        meshes.len(),
        meshes.iter().map(|m| m.points.len()).sum::<usize>(),
        clips.len(),
        bounds.size().x,
        bounds.size().y,
        bounds.size().z
    );

    Ok(ModelScene {
        meshes,
        bounds,
        clips,
        scale_factor: 1.0,
    })
}

/// Read a model from disk (native front-end).
pub fn load_model_file(path: impl AsRef<std::path::Path>) -> Result<ModelScene, LoadError> {
    let bytes = std::fs::read(path)?;
    load_model_bytes(&bytes)
}

fn visit_node(node: &gltf::Node, parent: Mat4, blob: Option<&[u8]>, out: &mut Vec<SceneMesh>) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(mesh) = node.mesh() {
        let name = mesh.name().unwrap_or("mesh");
        for (pi, primitive) in mesh.primitives().enumerate() {
            let bb = primitive.bounding_box();
            let bounds = Aabb::new(Vec3::from(bb.min), Vec3::from(bb.max)).transformed(&world);

            let reader = primitive.reader(|buffer| match buffer.source() {
                gltf::buffer::Source::Bin => blob,
                gltf::buffer::Source::Uri(_) => None,
            });
            let points: Vec<Vec3> = reader
                .read_positions()
                .map(|it| it.map(|p| world.transform_point3(Vec3::from(p))).collect())
                .unwrap_or_default();

            let material = primitive.material();
            let emissive = Emissive {
                color: Rgb(Vec3::from(material.emissive_factor())),
                intensity: 1.0,
            };
            let [r, g, b, _] = material.pbr_metallic_roughness().base_color_factor();

            out.push(SceneMesh {
                name: format!("{name}#{pi}"),
                bounds,
                material: Some(emissive),
                base_color: Rgb::new(r, g, b),
                points,
            });
        }
    }

    for child in node.children() {
        visit_node(&child, world, blob, out);
    }
}

/// Keep every n-th point so the total stays within `cap`.
fn thin_points(meshes: &mut [SceneMesh], cap: usize) {
    let total: usize = meshes.iter().map(|m| m.points.len()).sum();
    if total <= cap || cap == 0 {
        return;
    }
    let stride = total.div_ceil(cap);
    for m in meshes.iter_mut() {
        m.points = m.points.iter().copied().step_by(stride).collect();
    }
}

fn accessor_max_scalar(accessor: &gltf::Accessor) -> Option<f32> {
    accessor
        .max()?
        .as_array()?
        .first()?
        .as_f64()
        .map(|v| v as f32)
}
