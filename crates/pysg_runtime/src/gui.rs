use std::rc::Rc;

use crate::backend::Backend;
use crate::config::GuiConfig;
use crate::kwargs::Kwargs;
use crate::value::{BridgeError, Dynamic, Handle};

/// The initialized toolkit context.
///
/// Created once with [`Gui::init`] and handed to every control and window
/// constructor. Clones share the same backend.
#[derive(Clone)]
pub struct Gui {
    backend: Rc<dyn Backend>,
    config: Rc<GuiConfig>,
}

impl std::fmt::Debug for Gui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gui").field("config", &self.config).finish_non_exhaustive()
    }
}

impl Gui {
    pub fn init(backend: impl Backend + 'static, config: GuiConfig) -> Result<Self, BridgeError> {
        tracing::debug!(module = %config.module, "importing toolkit module");
        backend.import(&config.module)?;
        Ok(Self {
            backend: Rc::new(backend),
            config: Rc::new(config),
        })
    }

    pub fn config(&self) -> &GuiConfig {
        &self.config
    }

    pub fn construct(&self, class: &str, args: Vec<Dynamic>, kwargs: Kwargs) -> Result<Handle, BridgeError> {
        let handle = self.backend.construct(class, args, kwargs)?;
        tracing::debug!(class, %handle, "constructed foreign object");
        Ok(handle)
    }

    pub fn get_attr(&self, object: Handle, name: &str) -> Result<Dynamic, BridgeError> {
        let value = self.backend.get_attr(object, name)?;
        tracing::debug!(%object, attribute = name, %value, "get attribute");
        Ok(value)
    }

    pub fn set_attr(&self, object: Handle, name: &str, value: Dynamic) -> Result<(), BridgeError> {
        tracing::debug!(%object, attribute = name, %value, "set attribute");
        self.backend.set_attr(object, name, value)
    }

    pub fn call(&self, object: Handle, method: &str, args: Vec<Dynamic>, kwargs: Kwargs) -> Result<Dynamic, BridgeError> {
        tracing::debug!(%object, method, "calling foreign method");
        self.backend.call(object, method, args, kwargs)
    }

    pub fn release(&self, object: Handle) -> Result<(), BridgeError> {
        tracing::debug!(%object, "releasing foreign object");
        self.backend.release(object)
    }
}
