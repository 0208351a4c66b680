use globe_core::{Blend, Side, Topology};

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

/// Round `size` up to a multiple of `alignment` (a power of two, or 0/1 for none).
#[inline]
pub fn align_up(size: u64, alignment: u64) -> u64 {
    if alignment <= 1 {
        return size;
    }
    size.div_ceil(alignment) * alignment
}

/// Pipeline slot for a (topology, blend, side) triple. Culling only applies
/// to triangles, so line pipelines ignore `side`.
#[inline]
pub fn pipeline_index(topology: Topology, blend: Blend, side: Side) -> usize {
    let b = usize::from(blend == Blend::Additive);
    match topology {
        Topology::Triangles => b * 3 + side_slot(side),
        Topology::Lines => 6 + b,
        Topology::LineStrip => 8 + b,
    }
}

#[inline]
fn side_slot(side: Side) -> usize {
    match side {
        Side::Front => 0,
        Side::Back => 1,
        Side::Double => 2,
    }
}

pub const PIPELINE_VARIANTS: [(Topology, Blend, Side); 10] = [
    (Topology::Triangles, Blend::Alpha, Side::Front),
    (Topology::Triangles, Blend::Alpha, Side::Back),
    (Topology::Triangles, Blend::Alpha, Side::Double),
    (Topology::Triangles, Blend::Additive, Side::Front),
    (Topology::Triangles, Blend::Additive, Side::Back),
    (Topology::Triangles, Blend::Additive, Side::Double),
    (Topology::Lines, Blend::Alpha, Side::Double),
    (Topology::Lines, Blend::Additive, Side::Double),
    (Topology::LineStrip, Blend::Alpha, Side::Double),
    (Topology::LineStrip, Blend::Additive, Side::Double),
];

/// Faces to drop for a mesh wound counter-clockwise on the outside.
#[inline]
pub fn cull_mode(side: Side) -> Option<wgpu::Face> {
    match side {
        Side::Front => Some(wgpu::Face::Back),
        Side::Back => Some(wgpu::Face::Front),
        Side::Double => None,
    }
}

#[inline]
pub fn primitive_topology(topology: Topology) -> wgpu::PrimitiveTopology {
    match topology {
        Topology::Triangles => wgpu::PrimitiveTopology::TriangleList,
        Topology::Lines => wgpu::PrimitiveTopology::LineList,
        Topology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
    }
}

/// Blend state for premultiplied fragment output.
pub fn blend_state(blend: Blend) -> wgpu::BlendState {
    match blend {
        Blend::Alpha => wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
        Blend::Additive => wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                operation: wgpu::BlendOperation::Add,
            },
        },
    }
}

pub fn make_mesh_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    topology: Topology,
    blend: Blend,
    side: Side,
) -> wgpu::RenderPipeline {
    let label = format!("globe_pipeline_{:?}_{:?}_{:?}", topology, blend, side);
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<globe_core::Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRIBUTES,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: primitive_topology(topology),
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: cull_mode(side),
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(blend_state(blend)),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

/// Prefer a plain 8-bit format; colours are already authored in sRGB.
pub fn pick_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| {
            matches!(
                f,
                wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
            )
        })
        .or_else(|| formats.iter().copied().find(|f| !f.is_srgb()))
        .or_else(|| formats.first().copied())
}

/// Prefer premultiplied alpha so the page shows through the transparent clear.
pub fn pick_alpha_mode(modes: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    if modes.contains(&wgpu::CompositeAlphaMode::PreMultiplied) {
        wgpu::CompositeAlphaMode::PreMultiplied
    } else {
        modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto)
    }
}
