pub mod error;
pub mod geometry;
pub mod control;
pub mod button;
pub mod window;

pub use error::*;
pub use geometry::*;
pub use control::*;
pub use button::*;
pub use window::*;

pub use pysg_runtime::{Gui, GuiConfig, HeadlessBackend};
