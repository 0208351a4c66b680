pub mod animation;
pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod mesh;
pub mod picking;
pub mod scene;
pub mod targets;

pub use animation::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use interaction::*;
pub use mesh::{Mesh, MeshKey, MeshLibrary, Topology, Vertex};
pub use picking::*;
pub use scene::*;
pub use targets::*;
