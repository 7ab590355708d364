//! Canonical vertex buffer layout for [`Vertex`].
//!
//! Every pipeline that draws a [`crate::Mesh`] references [`VERTEX_LAYOUT`]
//! so the shader locations and byte offsets cannot drift from the struct.
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Format    | Field    |
//! |----------|--------|-----------|----------|
//! | 0        | 0      | Float32x3 | position |
//! | 1        | 12     | Float32x3 | normal   |
//! | 2        | 24     | Float32x3 | color    |
//! | 3        | 36     | Float32x2 | uv       |

use std::mem;

use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::vertex::Vertex;

/// Vertex attributes covering all 44 bytes of [`Vertex`].
pub const VERTEX_ATTRIBUTES: [VertexAttribute; 4] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: mem::offset_of!(Vertex, position) as u64,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: mem::offset_of!(Vertex, normal) as u64,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: mem::offset_of!(Vertex, color) as u64,
        shader_location: 2,
    },
    VertexAttribute {
        format: VertexFormat::Float32x2,
        offset: mem::offset_of!(Vertex, uv) as u64,
        shader_location: 3,
    },
];

/// The vertex buffer layout for mesh render pipelines.
pub const VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<Vertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &VERTEX_ATTRIBUTES,
};

/// Return the vertex buffer layout as an owned value.
pub fn vertex_buffer_layout() -> VertexBufferLayout<'static> {
    VERTEX_LAYOUT
}

/// One float attribute as an OpenGL-style consumer declares it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Attribute slot.
    pub location: u32,
    /// Number of `f32` components.
    pub components: u32,
    /// Byte offset within [`Vertex`].
    pub offset: usize,
    /// Value of the `normalized` flag passed alongside the pointer.
    pub normalized: bool,
}

/// Attribute setup for GL consumers, stride `size_of::<Vertex>()`.
///
/// The `normalized` flags on normal, color and uv are carried over from the
/// renderer unchanged. They have no effect on float data in GL and the mesh
/// generators here never depend on them.
pub const GL_ATTRIBUTES: [AttributeDescriptor; 4] = [
    AttributeDescriptor {
        location: 0,
        components: 3,
        offset: mem::offset_of!(Vertex, position),
        normalized: false,
    },
    AttributeDescriptor {
        location: 1,
        components: 3,
        offset: mem::offset_of!(Vertex, normal),
        normalized: true,
    },
    AttributeDescriptor {
        location: 2,
        components: 3,
        offset: mem::offset_of!(Vertex, color),
        normalized: true,
    },
    AttributeDescriptor {
        location: 3,
        components: 2,
        offset: mem::offset_of!(Vertex, uv),
        normalized: true,
    },
];

// ---------------------------------------------------------------------------
// Compile-time validation
// ---------------------------------------------------------------------------

const _: () = assert!(
    mem::size_of::<Vertex>() == 44,
    "Vertex size changed, update VERTEX_LAYOUT"
);

const _: () = assert!(VERTEX_ATTRIBUTES[0].offset == 0);
const _: () = assert!(VERTEX_ATTRIBUTES[1].offset == 12);
const _: () = assert!(VERTEX_ATTRIBUTES[2].offset == 24);
const _: () = assert!(VERTEX_ATTRIBUTES[3].offset == 36);

/// Last attribute must end exactly at the stride.
const _: () = assert!(VERTEX_ATTRIBUTES[3].offset + 8 == mem::size_of::<Vertex>() as u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stride_matches_vertex_struct_size() {
        assert_eq!(VERTEX_LAYOUT.array_stride, mem::size_of::<Vertex>() as u64);
        assert_eq!(VERTEX_LAYOUT.step_mode, VertexStepMode::Vertex);
    }

    #[test]
    fn test_attributes_tile_the_stride() {
        let mut expected_offset = 0;
        for attr in VERTEX_ATTRIBUTES {
            assert_eq!(attr.offset, expected_offset);
            expected_offset += attr.format.size();
        }
        assert_eq!(expected_offset, VERTEX_LAYOUT.array_stride);
    }

    #[test]
    fn test_attribute_formats_match_shader_expectations() {
        assert_eq!(VERTEX_ATTRIBUTES[0].format, VertexFormat::Float32x3);
        assert_eq!(VERTEX_ATTRIBUTES[1].format, VertexFormat::Float32x3);
        assert_eq!(VERTEX_ATTRIBUTES[2].format, VertexFormat::Float32x3);
        assert_eq!(VERTEX_ATTRIBUTES[3].format, VertexFormat::Float32x2);
    }

    #[test]
    fn test_shader_locations_are_sequential() {
        for (i, attr) in VERTEX_ATTRIBUTES.iter().enumerate() {
            assert_eq!(attr.shader_location, i as u32);
        }
    }

    #[test]
    fn test_gl_table_agrees_with_wgpu_layout() {
        for (gl, attr) in GL_ATTRIBUTES.iter().zip(VERTEX_ATTRIBUTES.iter()) {
            assert_eq!(gl.location, attr.shader_location);
            assert_eq!(gl.offset as u64, attr.offset);
            assert_eq!(u64::from(gl.components) * 4, attr.format.size());
        }
    }

    #[test]
    fn test_gl_normalized_flags() {
        let flags: Vec<bool> = GL_ATTRIBUTES.iter().map(|a| a.normalized).collect();
        assert_eq!(flags, vec![false, true, true, true]);
    }

    #[test]
    fn test_helper_returns_same_layout() {
        let layout = vertex_buffer_layout();
        assert_eq!(layout.array_stride, VERTEX_LAYOUT.array_stride);
        assert_eq!(layout.attributes, VERTEX_LAYOUT.attributes);
    }

    #[test]
    fn test_layout_is_valid_for_wgpu_pipeline() {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            force_fallback_adapter: true,
            ..Default::default()
        }));

        let Ok(adapter) = adapter else {
            // Headless CI without an adapter.
            return;
        };

        let (device, _queue) =
            pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default()))
                .expect("failed to create device");

        let shader_source = r#"
            struct VertexOutput {
                @builtin(position) clip: vec4<f32>,
                @location(0) color: vec3<f32>,
                @location(1) uv: vec2<f32>,
            };

            @vertex
            fn vs_main(
                @location(0) position: vec3<f32>,
                @location(1) normal: vec3<f32>,
                @location(2) color: vec3<f32>,
                @location(3) uv: vec2<f32>,
            ) -> VertexOutput {
                var out: VertexOutput;
                out.clip = vec4<f32>(position, 1.0);
                out.color = color * max(dot(normal, vec3<f32>(0.0, 0.0, 1.0)), 0.0);
                out.uv = uv;
                return out;
            }

            @fragment
            fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
                return vec4<f32>(in.color, in.uv.x);
            }
        "#;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("test_mesh_shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let _pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("test_mesh_pipeline"),
            layout: None,
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[VERTEX_LAYOUT],
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState {
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: wgpu::TextureFormat::Bgra8UnormSrgb,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            multiview_mask: None,
            cache: None,
        });
    }
}
