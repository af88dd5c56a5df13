pub mod value;
pub mod bridge;
pub mod kwargs;
pub mod backend;
pub mod config;
pub mod gui;
pub mod headless;

pub use value::*;
pub use bridge::*;
pub use kwargs::*;
pub use backend::*;
pub use config::*;
pub use gui::*;
pub use headless::HeadlessBackend;
