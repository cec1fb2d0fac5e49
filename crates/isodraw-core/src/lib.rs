//! Isodraw Core Types and Definitions
//!
//! This crate provides the foundational types for building isometric
//! scenes. It includes:
//!
//! - **Geometry**: 3D points and ordered paths ([`geometry`] and [`path`] modules)
//! - **Shapes**: The closed set of flat and solid shape kinds ([`shape`] module)
//! - **Transforms**: The translate/scale/rotate capability set ([`transform`] module)
//! - **Kinds**: Kind tags and opaque values ([`kind`] module)
//! - **Dispatch**: Applying a named transform to an opaque value ([`dispatch`] module)
//! - **Colors**: RGBA colors and ARGB channel extraction ([`color::Color`])

pub mod color;
pub mod dispatch;
pub mod error;
pub mod geometry;
pub mod kind;
pub mod path;
pub mod shape;
pub mod transform;

pub use error::GeometryError;
