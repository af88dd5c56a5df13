use crate::kwargs::Kwargs;
use crate::value::{BridgeError, Dynamic, Handle};

/// The boundary to the foreign GUI toolkit.
///
/// Every interaction with the foreign object graph is one of these
/// primitives. Implementations are driven from a single thread and use
/// interior mutability behind `&self`.
pub trait Backend {
    /// Loads the toolkit module. Called once by [`crate::Gui::init`].
    fn import(&self, module: &str) -> Result<(), BridgeError>;

    /// Instantiates a toolkit class (`Text`, `InputText`, `Button`, `Window`, ...).
    fn construct(&self, class: &str, args: Vec<Dynamic>, kwargs: Kwargs) -> Result<Handle, BridgeError>;

    fn get_attr(&self, object: Handle, name: &str) -> Result<Dynamic, BridgeError>;

    fn set_attr(&self, object: Handle, name: &str, value: Dynamic) -> Result<(), BridgeError>;

    /// Invokes a method. May block until the toolkit returns (`Window.read`).
    fn call(&self, object: Handle, method: &str, args: Vec<Dynamic>, kwargs: Kwargs) -> Result<Dynamic, BridgeError>;

    /// Drops the host's reference to a foreign object.
    fn release(&self, object: Handle) -> Result<(), BridgeError>;
}
