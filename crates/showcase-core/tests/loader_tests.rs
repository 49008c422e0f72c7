// Host-side tests for glTF/GLB parsing. A tiny GLB is assembled in memory so
// no binary fixtures are needed.

use showcase_core::*;

fn pad(mut bytes: Vec<u8>, fill: u8) -> Vec<u8> {
    while bytes.len() % 4 != 0 {
        bytes.push(fill);
    }
    bytes
}

fn glb(json: &str, bin: &[u8]) -> Vec<u8> {
    let json = pad(json.as_bytes().to_vec(), b' ');
    let bin = pad(bin.to_vec(), 0);
    let total = 12 + 8 + json.len() + 8 + bin.len();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&json);
    out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    out.extend_from_slice(b"BIN\0");
    out.extend_from_slice(&bin);
    out
}

fn triangle_glb() -> Vec<u8> {
    let positions: [[f32; 3]; 3] = [[-1.0, 0.0, -2.0], [1.0, 0.0, 2.0], [0.0, 4.0, 0.0]];
    let bin: Vec<u8> = positions
        .iter()
        .flatten()
        .flat_map(|f| f.to_le_bytes())
        .collect();
    let json = r#"{
        "asset": {"version": "2.0"},
        "scene": 0,
        "scenes": [{"nodes": [0]}],
        "nodes": [{"mesh": 0, "translation": [10.0, 0.0, 0.0]}],
        "meshes": [{"name": "body", "primitives": [{"attributes": {"POSITION": 0}, "material": 0}]}],
        "materials": [{"emissiveFactor": [0.1, 0.2, 0.3]}],
        "buffers": [{"byteLength": 36}],
        "bufferViews": [{"buffer": 0, "byteLength": 36}],
        "accessors": [{
            "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
            "min": [-1.0, 0.0, -2.0], "max": [1.0, 4.0, 2.0]
        }]
    }"#;
    glb(json, &bin)
}

#[test]
fn loads_meshes_bounds_and_materials_from_glb() {
    let scene = load_model_bytes(&triangle_glb()).expect("valid glb");
    assert_eq!(scene.meshes.len(), 1);
    let mesh = &scene.meshes[0];
    assert!(mesh.name.starts_with("body"));
    assert_eq!(mesh.points.len(), 3);
    // Node translation is baked into bounds and points.
    assert!((scene.bounds.min - glam::Vec3::new(9.0, 0.0, -2.0)).length() < 1e-5);
    assert!((scene.bounds.max - glam::Vec3::new(11.0, 4.0, 2.0)).length() < 1e-5);
    assert!(mesh.points.iter().all(|p| p.x >= 9.0 - 1e-5));
    let emissive = mesh.material.expect("material");
    assert!((emissive.color.0 - glam::Vec3::new(0.1, 0.2, 0.3)).length() < 1e-6);
    assert!(scene.clips.is_empty());
}

#[test]
fn placing_a_loaded_model_fits_target_size() {
    let mut scene = load_model_bytes(&triangle_glb()).expect("valid glb");
    let handle = scene.place(MODEL_TARGET_SIZE);
    assert!(handle.is_loaded());
    // Largest extent is 4 units on y and z.
    assert!((scene.scale_factor - 3.0).abs() < 1e-5);
    assert!(scene.bounds.center().length() < 1e-5);
}

#[test]
fn garbage_is_a_parse_error() {
    let err = load_model_bytes(b"definitely not a model").expect_err("should fail");
    assert!(matches!(err, LoadError::Parse(_)), "{err}");
}

#[test]
fn model_without_meshes_is_rejected() {
    let json = r#"{"asset": {"version": "2.0"}}"#;
    let err = load_model_bytes(json.as_bytes()).expect_err("no meshes");
    assert!(matches!(err, LoadError::NoMeshes));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_model_file("/nonexistent/frostwyrm/dragon.glb").expect_err("missing");
    assert!(matches!(err, LoadError::Io(_)));
}
