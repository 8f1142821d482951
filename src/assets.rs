use crate::core::model::{
    decode_data_uri, is_data_uri, resolve_relative, BufferSource, GltfDocument, MeshData,
    ModelError,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {} failed: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {}: not a Response: {:?}", url, e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {} failed: HTTP {}", url, resp.status());
    }
    let promise = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let buf = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("read {} failed: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch the .gltf or .glb document at `path` plus its buffers and bake it
/// to one mesh.
pub async fn load_model(path: &str) -> anyhow::Result<MeshData> {
    let bytes = fetch_bytes(path).await?;
    let doc = GltfDocument::from_slice(&bytes)?;
    let sources: Vec<Option<String>> = doc
        .buffer_sources()
        .map(|s| match s {
            BufferSource::Uri(u) => Some(u.to_owned()),
            BufferSource::Binary => None,
        })
        .collect();

    let mut buffers = Vec::with_capacity(sources.len());
    for (i, uri) in sources.iter().enumerate() {
        let bytes = match uri.as_deref() {
            Some(u) if is_data_uri(u) => decode_data_uri(u)?,
            Some(u) => fetch_bytes(&resolve_relative(path, u)).await?,
            None => doc
                .blob()
                .map(<[u8]>::to_vec)
                .ok_or(ModelError::EmbeddedBuffer(i))?,
        };
        buffers.push(bytes);
    }

    let mesh = doc.decode_mesh(&buffers)?;
    log::info!(
        "[model] loaded {} vertices={} triangles={}",
        path,
        mesh.vertices.len(),
        mesh.triangle_count()
    );
    if let Some((lo, hi)) = mesh.bounds() {
        log::debug!("[model] bounds {:?}..{:?}", lo, hi);
    }
    Ok(mesh)
}
