// Host-side tests for baking glTF scenes into a mesh.

#![allow(dead_code)]
mod model {
    include!("../src/core/model.rs");
}

use base64::{engine::general_purpose, Engine as _};
use glam::Vec3;
use model::*;

const TRIANGLE: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

/// One triangle: 36 bytes of positions then three u16 indices padded to 44.
fn triangle_buffer() -> Vec<u8> {
    let mut bytes = Vec::new();
    for p in TRIANGLE {
        for c in p {
            bytes.extend_from_slice(&c.to_le_bytes());
        }
    }
    for i in [0u16, 1, 2] {
        bytes.extend_from_slice(&i.to_le_bytes());
    }
    bytes.extend_from_slice(&[0, 0]);
    bytes
}

fn data_uri(bytes: &[u8]) -> String {
    format!(
        "data:application/octet-stream;base64,{}",
        general_purpose::STANDARD.encode(bytes)
    )
}

fn gltf_json(node: &str, uri: &str, position_count: u64, index_view_length: usize) -> String {
    format!(
        r#"{{
  "asset": {{ "version": "2.0" }},
  "scene": 0,
  "scenes": [{{ "nodes": [0] }}],
  "nodes": [{node}],
  "meshes": [{{ "primitives": [{{ "attributes": {{ "POSITION": 0 }}, "indices": 1, "material": 0 }}] }}],
  "materials": [{{ "pbrMetallicRoughness": {{ "baseColorFactor": [0.5, 0.4, 0.3, 1.0] }} }}],
  "accessors": [
    {{ "bufferView": 0, "componentType": 5126, "count": {position_count}, "type": "VEC3",
       "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0] }},
    {{ "bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR" }}
  ],
  "bufferViews": [
    {{ "buffer": 0, "byteOffset": 0, "byteLength": 36 }},
    {{ "buffer": 0, "byteOffset": 36, "byteLength": {index_view_length} }}
  ],
  "buffers": [{{ "byteLength": 44{uri} }}]
}}"#
    )
}

fn triangle_gltf(node: &str, uri: &str, index_view_length: usize) -> String {
    let uri = format!(r#", "uri": "{uri}""#);
    gltf_json(node, &uri, 3, index_view_length)
}

/// Pack a JSON document and one binary chunk into a .glb container.
fn glb(json: &str, bin: &[u8]) -> Vec<u8> {
    let mut json = json.as_bytes().to_vec();
    while json.len() % 4 != 0 {
        json.push(b' ');
    }
    let mut bin = bin.to_vec();
    while bin.len() % 4 != 0 {
        bin.push(0);
    }
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

fn decode(json: &str, buffers: &[Vec<u8>]) -> Result<MeshData, ModelError> {
    GltfDocument::from_slice(json.as_bytes())?.decode_mesh(buffers)
}

#[test]
fn decodes_embedded_triangle_with_material_color() {
    let uri = data_uri(&triangle_buffer());
    let json = triangle_gltf(r#"{ "mesh": 0 }"#, &uri, 6);
    let doc = GltfDocument::from_slice(json.as_bytes()).unwrap();

    let sources: Vec<BufferSource<'_>> = doc.buffer_sources().collect();
    assert_eq!(sources.len(), 1);
    let BufferSource::Uri(uri) = sources[0] else {
        panic!("expected a uri buffer");
    };
    let bytes = decode_data_uri(uri).unwrap();
    let mesh = doc.decode_mesh(&[bytes]).unwrap();

    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.vertices[1].position, [1.0, 0.0, 0.0]);
    assert_eq!(mesh.vertices[0].color, [0.5, 0.4, 0.3, 1.0]);
}

#[test]
fn glb_binary_chunk_backs_uriless_buffer() {
    let json = gltf_json(r#"{ "mesh": 0 }"#, "", 3, 6);
    let doc = GltfDocument::from_slice(&glb(&json, &triangle_buffer())).unwrap();

    assert_eq!(doc.buffer_sources().collect::<Vec<_>>(), vec![BufferSource::Binary]);
    let blob = doc.blob().expect("glb carries a binary chunk").to_vec();
    let mesh = doc.decode_mesh(&[blob]).unwrap();
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    assert_eq!(mesh.vertices[2].position, [0.0, 1.0, 0.0]);
}

#[test]
fn json_document_has_no_blob() {
    let json = triangle_gltf(r#"{ "mesh": 0 }"#, "cleaver.bin", 6);
    let doc = GltfDocument::from_slice(json.as_bytes()).unwrap();
    assert!(doc.blob().is_none());
}

#[test]
fn missing_normals_are_generated() {
    let json = triangle_gltf(r#"{ "mesh": 0 }"#, "cleaver.bin", 6);
    let mesh = decode(&json, &[triangle_buffer()]).unwrap();
    for v in &mesh.vertices {
        assert!((Vec3::from_array(v.normal) - Vec3::Z).length() < 1e-5);
    }
}

#[test]
fn node_translation_is_baked_in() {
    let json = triangle_gltf(
        r#"{ "children": [1] }, { "mesh": 0, "translation": [0.0, 0.0, 2.0] }"#,
        "cleaver.bin",
        6,
    );
    let mesh = decode(&json, &[triangle_buffer()]).unwrap();
    let (lo, hi) = mesh.bounds().unwrap();
    assert!((lo - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-6);
    assert!((hi - Vec3::new(1.0, 1.0, 2.0)).length() < 1e-6);
}

#[test]
fn mirrored_node_flips_winding() {
    let json = triangle_gltf(
        r#"{ "mesh": 0, "scale": [-1.0, 1.0, 1.0] }"#,
        "cleaver.bin",
        6,
    );
    let mesh = decode(&json, &[triangle_buffer()]).unwrap();
    assert_eq!(mesh.indices, vec![0, 2, 1]);
    assert_eq!(mesh.vertices[1].position, [-1.0, 0.0, 0.0]);
}

#[test]
fn short_buffer_is_reported_as_truncated() {
    let json = triangle_gltf(r#"{ "mesh": 0 }"#, "cleaver.bin", 6);
    let short = triangle_buffer()[..20].to_vec();
    assert!(matches!(
        decode(&json, &[short]),
        Err(ModelError::Truncated { accessor: 0 })
    ));
}

#[test]
fn accessor_past_view_end_is_truncated() {
    // index view too small for three u16 indices
    let json = triangle_gltf(r#"{ "mesh": 0 }"#, "cleaver.bin", 4);
    assert!(matches!(
        decode(&json, &[triangle_buffer()]),
        Err(ModelError::Truncated { accessor: 1 })
    ));
}

#[test]
fn huge_accessor_count_is_rejected_without_overflow() {
    // count * 12 wraps a u64
    let count = u64::MAX / 12 + 1;
    let json = gltf_json(r#"{ "mesh": 0 }"#, r#", "uri": "cleaver.bin""#, count, 6);
    match GltfDocument::from_slice(json.as_bytes()) {
        Ok(doc) => assert!(matches!(
            doc.decode_mesh(&[triangle_buffer()]),
            Err(ModelError::Truncated { accessor: 0 })
        )),
        Err(e) => assert!(matches!(e, ModelError::Gltf(_))),
    }
}

#[test]
fn line_primitives_are_skipped() {
    let json = triangle_gltf(r#"{ "mesh": 0 }"#, "cleaver.bin", 6)
        .replace(r#""material": 0"#, r#""material": 0, "mode": 1"#);
    assert!(matches!(
        decode(&json, &[triangle_buffer()]),
        Err(ModelError::Empty)
    ));
}

#[test]
fn missing_buffer_is_out_of_range() {
    let json = triangle_gltf(r#"{ "mesh": 0 }"#, "cleaver.bin", 6);
    assert!(matches!(
        decode(&json, &[]),
        Err(ModelError::OutOfRange { what: "buffers", .. })
    ));
}

#[test]
fn scene_without_meshes_is_empty() {
    let json = r#"{ "asset": { "version": "2.0" }, "scenes": [{ "nodes": [0] }], "nodes": [{}] }"#;
    assert!(matches!(decode(json, &[]), Err(ModelError::Empty)));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(
        GltfDocument::from_slice(b"{ not json"),
        Err(ModelError::Gltf(_))
    ));
}

#[test]
fn data_uri_requires_base64_payload() {
    assert!(is_data_uri("data:application/octet-stream;base64,AAAA"));
    assert!(!is_data_uri("cleaver.bin"));
    assert!(matches!(
        decode_data_uri("data:text/plain,hello"),
        Err(ModelError::DataUri)
    ));
    assert_eq!(
        decode_data_uri("data:application/octet-stream;base64,AQID").unwrap(),
        vec![1, 2, 3]
    );
}

#[test]
fn buffer_uris_resolve_next_to_the_document() {
    assert_eq!(
        resolve_relative("/models/cleaver/scene.gltf", "scene.bin"),
        "/models/cleaver/scene.bin"
    );
    assert_eq!(
        resolve_relative("/models/cleaver/scene.gltf", "/shared/a.bin"),
        "/shared/a.bin"
    );
    assert_eq!(resolve_relative("scene.gltf", "scene.bin"), "scene.bin");
}
