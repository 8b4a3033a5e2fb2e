pub mod fallback;

mod whiteboard;
pub use whiteboard::*;
