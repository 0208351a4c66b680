use globe_core::{MeshKey, MeshLibrary, Topology};
use wgpu::util::DeviceExt;

pub(crate) struct GpuMesh {
    pub(crate) buffer: wgpu::Buffer,
    pub(crate) vertex_count: u32,
    pub(crate) topology: Topology,
}

/// Vertex buffers for every mesh in the library, indexed by [`MeshKey`].
pub(crate) struct GpuMeshes {
    meshes: Vec<GpuMesh>,
}

impl GpuMeshes {
    /// Upload every mesh once. Geometry never changes after scene construction.
    pub(crate) fn upload(device: &wgpu::Device, library: &MeshLibrary) -> Self {
        let meshes = library
            .iter()
            .map(|(_, mesh)| GpuMesh {
                buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(mesh.label),
                    contents: bytemuck::cast_slice(&mesh.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                vertex_count: mesh.vertex_count(),
                topology: mesh.topology,
            })
            .collect::<Vec<_>>();
        let bytes: u64 = meshes.iter().map(|m| m.buffer.size()).sum();
        log::info!("[gpu] uploaded {} meshes ({} bytes)", meshes.len(), bytes);
        Self { meshes }
    }

    #[inline]
    pub(crate) fn get(&self, key: MeshKey) -> Option<&GpuMesh> {
        self.meshes.get(key.0)
    }
}
