//! Scene rendering and PNG output tests.

use geofx_backend_shading::png::{self, PngConfig};
use geofx_backend_shading::{render_scene, MaterialFactory};
use geofx_spec::SceneSpec;

const SCENE: &str = r#"{
    "scene_version": 1,
    "resolution": [48, 32],
    "time": 2.5,
    "background": [0.02, 0.03, 0.08],
    "layers": [
        { "effect": "terrain" },
        { "effect": "ground" },
        { "effect": "gear", "color": [0.0, 0.67, 1.0] }
    ]
}"#;

#[test]
fn test_scene_render_is_deterministic() {
    let scene = SceneSpec::from_json(SCENE).unwrap();
    let factory = MaterialFactory::new();

    let first = render_scene(&factory, &scene).unwrap();
    let second = render_scene(&factory, &scene).unwrap();
    assert_eq!(first, second);

    let (bytes1, hash1) = png::write_rgba_to_vec_with_hash(&first, &PngConfig::default()).unwrap();
    let (bytes2, hash2) =
        png::write_rgba_to_vec_with_hash(&second, &PngConfig::default()).unwrap();
    assert_eq!(bytes1, bytes2);
    assert_eq!(hash1, hash2);
}

#[test]
fn test_time_changes_output() {
    let factory = MaterialFactory::new();
    let scene = SceneSpec::from_json(SCENE).unwrap();
    let later = scene.clone().with_time(3.7);

    let (_, hash_a) = png::write_rgba_to_vec_with_hash(
        &render_scene(&factory, &scene).unwrap(),
        &PngConfig::default(),
    )
    .unwrap();
    let (_, hash_b) = png::write_rgba_to_vec_with_hash(
        &render_scene(&factory, &later).unwrap(),
        &PngConfig::default(),
    )
    .unwrap();
    assert_ne!(hash_a, hash_b);
}

#[test]
fn test_write_png_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preview.png");

    let scene = SceneSpec::from_json(SCENE).unwrap();
    let image = render_scene(&MaterialFactory::new(), &scene).unwrap();
    png::write_rgba(&image, &path, &PngConfig::default()).unwrap();

    let written = std::fs::read(&path).unwrap();
    let (expected, _) = png::write_rgba_to_vec_with_hash(&image, &PngConfig::default()).unwrap();
    assert_eq!(written, expected);
}

#[test]
fn test_opaque_background_stays_opaque() {
    let scene = SceneSpec::from_json(SCENE).unwrap();
    let image = render_scene(&MaterialFactory::new(), &scene).unwrap();
    assert!(image.data.iter().all(|c| (c.a - 1.0).abs() < 1e-12));
}
