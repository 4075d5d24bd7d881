//! User interface rendering.
//!
//! - **renderer**: in-place animation frames and result lines for the wheel

pub mod renderer;

pub use renderer::Renderer;
