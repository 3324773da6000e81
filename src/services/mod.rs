//! Service layer for the layout pipeline.
//!
//! Each stage is a pure function over plain data: classification, geometry
//! basis, layout generation, and skin assembly.

pub mod basis;
pub mod classifier;
pub mod layout;
pub mod skin;

// Re-export commonly used types and functions
pub use basis::{resolve_basis, GeometryBasis, WindowSnapshot};
pub use classifier::{classify, is_well_formed, lookup, machines_in, HostEnvironment};
pub use layout::{generate, FamilyMetrics};
pub use skin::{assemble_default_skin, SkinUnavailable};
