pub mod geometry_2d;
pub mod vertex;

pub use geometry_2d::{
    angle_deg, angle_diff, distance, path_length, perp_distance, vector_angle_deg,
};
pub use vertex::{find_vertex, VertexCandidate};

/// 2D point type (screen coordinates, y grows downward).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Segments and vectors shorter than this (in pixels) are treated as degenerate.
pub const DEGENERATE_LENGTH: f64 = 1.0;
