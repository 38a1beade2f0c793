//! # hotelgen-solid
//!
//! Watertight solid kernel for the model-generation pipeline.
//!
//! ## Architecture
//!
//! ```text
//! primitives -> Solid -> transforms/booleans -> TriangleMesh
//! ```
//!
//! Everything upstream sees only the [`Solid`] value type and the operation
//! surface re-exported here; the BSP clipping internals are private. The
//! contract mirrors the original kernel's behavior: operations return a
//! valid solid or an explicitly empty one, never a corrupt intermediate,
//! and degenerate inputs fail fast with [`GeometryError`].
//!
//! ## Usage
//!
//! ```rust
//! use hotelgen_solid::primitives::{cuboid, cylinder};
//! use hotelgen_solid::{difference_all, translate};
//!
//! let block = cuboid(10.0, 10.0, 5.0)?;
//! let hole = translate(&cylinder(2.0, 7.0, 24)?, 0.0, 0.0, -1.0);
//! let pierced = difference_all(&block, &[hole])?;
//! assert!(pierced.volume() < block.volume());
//! # Ok::<(), hotelgen_solid::GeometryError>(())
//! ```

mod bsp;
pub mod booleans;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod solid;
pub mod transforms;

pub use booleans::{compose_disjoint, difference, difference_all, intersection, union, union_all};
pub use error::GeometryError;
pub use mesh::TriangleMesh;
pub use solid::Solid;
pub use transforms::{mirror_x, mirror_y, rotate_x, rotate_y, rotate_z, scale_xyz, translate};
