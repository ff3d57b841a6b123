//! CLI command implementations.

pub(crate) mod expand;
pub(crate) mod render;

pub(crate) use expand::ExpandArgs;
pub(crate) use render::RenderArgs;
