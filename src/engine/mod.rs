//! Turning recognized hands into strokes.
//!
//! Nothing here touches the browser directly: surfaces, recognizers and clocks are all reached
//! through traits, so the whole pipeline runs in ordinary unit tests.

mod gesture;
pub use gesture::*;

mod smoother;
pub use smoother::*;

mod overlay;
pub use overlay::*;

mod pump;
pub use pump::*;

mod whiteboard;
pub use whiteboard::*;

mod frame_loop;
pub use frame_loop::*;
