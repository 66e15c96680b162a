//! The records this crate reads from its collaborators, and the per call provisioning inputs.

// region:    --- Modules

mod destination_details;
mod entity;
mod formation_assignment;
mod label;
mod tenant;

// -- Flatten
pub use destination_details::*;
pub use entity::*;
pub use formation_assignment::*;
pub use label::*;
pub use tenant::*;

// endregion: --- Modules
