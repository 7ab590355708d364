//! CPU-side geometry for the Blue Marble renderer: the UV sphere generator,
//! the constant test quad, and the vertex layout both are uploaded with.

pub mod error;
pub mod mesh;
pub mod quad;
pub mod sampling;
pub mod sphere;
pub mod vertex;
pub mod vertex_format;

pub use error::MeshError;
pub use mesh::{Mesh, MeshStats};
pub use quad::quad_mesh;
pub use sampling::sample_unit_interval;
pub use sphere::{
    MAX_SPHERE_RESOLUTION, MIN_SPHERE_RESOLUTION, SPHERE_VERTEX_COLOR, generate_sphere_mesh,
    generate_sphere_mesh_into,
};
pub use vertex::{Triangle, Vertex};
pub use vertex_format::{
    AttributeDescriptor, GL_ATTRIBUTES, VERTEX_ATTRIBUTES, VERTEX_LAYOUT, vertex_buffer_layout,
};
