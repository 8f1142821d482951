// glTF 2.0 product model, baked to one indexed triangle mesh.
//
// Parsing and accessor reads go through the `gltf` crate; this file only
// walks the default scene, applies node transforms and packs vertices for
// the GPU. Buffers are supplied by the caller, either fetched next to the
// .gltf file, decoded from `data:` URIs or taken from the .glb binary chunk.

use base64::{engine::general_purpose, Engine as _};
use gltf::accessor::{DataType, Dimensions};
use gltf::mesh::Mode;
use gltf::Semantic;
use glam::{Mat3, Mat4, Vec3};
use smallvec::SmallVec;

const MAX_NODE_DEPTH: usize = 64;
const DEFAULT_BASE_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid glTF: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("invalid base64 buffer: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("unsupported data uri")]
    DataUri,
    #[error("buffer {0} refers to a binary chunk the document does not carry")]
    EmbeddedBuffer(usize),
    #[error("index {index} out of range for {what}")]
    OutOfRange { what: &'static str, index: usize },
    #[error("accessor {accessor} reads past the end of its buffer")]
    Truncated { accessor: usize },
    #[error("accessor {accessor}: unsupported layout for {usage}")]
    Unsupported {
        accessor: usize,
        usage: &'static str,
    },
    #[error("primitive without POSITION attribute")]
    MissingPositions,
    #[error("node hierarchy too deep")]
    TooDeep,
    #[error("model contains no triangles")]
    Empty,
}

/// Interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Axis-aligned bounds of all vertices, or `None` when empty.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut it = self.vertices.iter().map(|v| Vec3::from_array(v.position));
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Where the bytes of one glTF buffer come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferSource<'a> {
    Uri(&'a str),
    Binary,
}

pub struct GltfDocument {
    gltf: gltf::Gltf,
}

impl GltfDocument {
    /// Parse a .gltf JSON document or a .glb container.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        Ok(Self {
            gltf: gltf::Gltf::from_slice(bytes)?,
        })
    }

    /// Buffer sources in declaration order.
    pub fn buffer_sources(&self) -> impl Iterator<Item = BufferSource<'_>> {
        self.gltf.buffers().map(|b| match b.source() {
            gltf::buffer::Source::Uri(uri) => BufferSource::Uri(uri),
            gltf::buffer::Source::Bin => BufferSource::Binary,
        })
    }

    /// Binary chunk of a .glb container.
    #[inline]
    pub fn blob(&self) -> Option<&[u8]> {
        self.gltf.blob.as_deref()
    }

    /// Bake the default scene into a single indexed triangle mesh.
    pub fn decode_mesh(&self, buffers: &[Vec<u8>]) -> Result<MeshData, ModelError> {
        let mut out = MeshData::default();
        let mut stack: SmallVec<[(gltf::Node<'_>, Mat4, usize); 16]> = self
            .root_nodes()
            .into_iter()
            .rev()
            .map(|n| (n, Mat4::IDENTITY, 0))
            .collect();

        while let Some((node, parent, depth)) = stack.pop() {
            if depth > MAX_NODE_DEPTH {
                return Err(ModelError::TooDeep);
            }
            let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
            if let Some(mesh) = node.mesh() {
                for prim in mesh.primitives() {
                    if prim.mode() != Mode::Triangles {
                        log::warn!("[model] skipping primitive with mode {:?}", prim.mode());
                        continue;
                    }
                    append_primitive(&prim, world, buffers, &mut out)?;
                }
            }
            let children: SmallVec<[gltf::Node<'_>; 8]> = node.children().collect();
            for child in children.into_iter().rev() {
                stack.push((child, world, depth + 1));
            }
        }

        if out.indices.is_empty() {
            return Err(ModelError::Empty);
        }
        Ok(out)
    }

    fn root_nodes(&self) -> Vec<gltf::Node<'_>> {
        let doc = &self.gltf.document;
        if let Some(scene) = doc.default_scene().or_else(|| doc.scenes().next()) {
            return scene.nodes().collect();
        }
        // No scene: every node that is nobody's child
        let mut is_child = vec![false; doc.nodes().len()];
        for n in doc.nodes() {
            for c in n.children() {
                is_child[c.index()] = true;
            }
        }
        doc.nodes().filter(|n| !is_child[n.index()]).collect()
    }
}

fn append_primitive(
    prim: &gltf::Primitive<'_>,
    world: Mat4,
    buffers: &[Vec<u8>],
    out: &mut MeshData,
) -> Result<(), ModelError> {
    let pos_acc = prim
        .get(&Semantic::Positions)
        .ok_or(ModelError::MissingPositions)?;
    check_accessor(&pos_acc, buffers, "POSITION")?;
    if let Some(acc) = prim.get(&Semantic::Normals) {
        check_accessor(&acc, buffers, "NORMAL")?;
    }
    if let Some(acc) = prim.indices() {
        check_accessor(&acc, buffers, "indices")?;
    }

    let reader = prim.reader(|b| buffers.get(b.index()).map(Vec::as_slice));
    let positions: Vec<Vec3> = reader
        .read_positions()
        .ok_or(ModelError::MissingPositions)?
        .map(Vec3::from_array)
        .collect();
    let local_indices: Vec<u32> = match reader.read_indices() {
        Some(indices) => indices.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };
    if let Some(&bad) = local_indices.iter().find(|&&i| i as usize >= positions.len()) {
        return Err(ModelError::OutOfRange {
            what: "vertices",
            index: bad as usize,
        });
    }
    let normals: Vec<Vec3> = match reader.read_normals() {
        Some(n) => n.map(Vec3::from_array).collect(),
        None => Vec::new(),
    };
    let normals = if normals.len() == positions.len() {
        normals
    } else {
        smooth_normals(&positions, &local_indices)
    };

    let material = prim.material();
    let color = match material.index() {
        Some(_) => material.pbr_metallic_roughness().base_color_factor(),
        None => DEFAULT_BASE_COLOR,
    };

    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
    let base = out.vertices.len() as u32;
    out.vertices
        .extend(positions.iter().zip(normals.iter()).map(|(p, n)| Vertex {
            position: world.transform_point3(*p).to_array(),
            normal: (normal_matrix * *n).normalize_or_zero().to_array(),
            color,
        }));
    // Mirrored transforms flip winding
    let flip = world.determinant() < 0.0;
    for tri in local_indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] + base, tri[1] + base, tri[2] + base);
        if flip {
            out.indices.extend_from_slice(&[a, c, b]);
        } else {
            out.indices.extend_from_slice(&[a, b, c]);
        }
    }
    Ok(())
}

/// Layout and bounds check ahead of the reader, which trusts document
/// counts and offsets. All arithmetic on document values is checked.
fn check_accessor(
    acc: &gltf::Accessor<'_>,
    buffers: &[Vec<u8>],
    usage: &'static str,
) -> Result<(), ModelError> {
    let layout_ok = match usage {
        "indices" => {
            acc.dimensions() == Dimensions::Scalar
                && matches!(acc.data_type(), DataType::U8 | DataType::U16 | DataType::U32)
        }
        _ => acc.dimensions() == Dimensions::Vec3 && acc.data_type() == DataType::F32,
    };
    if !layout_ok || acc.sparse().is_some() {
        return Err(ModelError::Unsupported {
            accessor: acc.index(),
            usage,
        });
    }
    let Some(view) = acc.view() else {
        return Ok(());
    };
    let buffer_index = view.buffer().index();
    let buf = buffers.get(buffer_index).ok_or(ModelError::OutOfRange {
        what: "buffers",
        index: buffer_index,
    })?;

    let truncated = || ModelError::Truncated {
        accessor: acc.index(),
    };
    let elem = acc.size();
    let stride = view.stride().unwrap_or(elem).max(elem);
    let view_end = view
        .offset()
        .checked_add(view.length())
        .ok_or_else(truncated)?;
    let needed = match acc.count().checked_sub(1) {
        None => Some(0),
        Some(last) => last
            .checked_mul(stride)
            .and_then(|n| n.checked_add(elem))
            .and_then(|n| n.checked_add(acc.offset())),
    }
    .ok_or_else(truncated)?;
    if view_end > buf.len() || needed > view.length() {
        return Err(truncated());
    }
    Ok(())
}

/// Area-weighted vertex normals for primitives that ship without them.
fn smooth_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let n = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter().map(|n| n.normalize_or_zero()).collect()
}

#[inline]
pub fn is_data_uri(uri: &str) -> bool {
    uri.starts_with("data:")
}

/// Decode a base64 `data:` buffer uri.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, ModelError> {
    let (_, payload) = uri.split_once(";base64,").ok_or(ModelError::DataUri)?;
    Ok(general_purpose::STANDARD.decode(payload)?)
}

/// Resolve a buffer uri relative to the directory of the document path.
pub fn resolve_relative(document_path: &str, uri: &str) -> String {
    if uri.starts_with('/') || uri.contains("://") {
        return uri.to_string();
    }
    match document_path.rfind('/') {
        Some(i) => format!("{}/{}", &document_path[..i], uri),
        None => uri.to_string(),
    }
}
