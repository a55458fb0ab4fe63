pub mod frame;
pub mod traits;

// Re-export key types for convenient access
pub use frame::{Anchor, DrawCommand, FrameData, ShapeInstance};
pub use traits::{draw_frame, Renderer};
