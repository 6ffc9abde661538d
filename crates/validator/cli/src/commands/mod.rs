//! CLI command implementations

pub mod normalize;
pub mod presets;
pub mod validate;
