//! # hotelgen-components
//!
//! Mid-level reusable building parts: massing shapes, roofs, facade
//! openings, columns, balconies, base slabs, and landscape features, plus
//! the scale context that sizes all of them.
//!
//! Every component is a stateless function from explicit geometric
//! parameters to a [`hotelgen_solid::Solid`] — no reference to styles or
//! global state. Positioning convention throughout: centered on X/Y, base
//! at Z=0, extending upward.

pub mod balcony;
pub mod base;
pub mod column;
pub mod door;
pub mod facade;
pub mod floor_slab;
pub mod landscape;
pub mod massing;
pub mod roof;
pub mod scale;
pub mod wall;
pub mod window;

pub use scale::ScaleContext;
