use pysg_runtime::{Dynamic, Gui, Kwargs};

use crate::error::FormsError;

/// Anything that can be placed in a window layout.
pub trait Control {
    /// Produces the foreign object standing for this control.
    ///
    /// Controls that own a live handle return that handle every time;
    /// stateless ones may build a fresh foreign object per call.
    fn encode(&self, gui: &Gui) -> Result<Dynamic, FormsError>;

    /// Whether `encode` hands out a handle the control keeps owning.
    ///
    /// Objects encoded from controls that return `false` belong to the
    /// layout and are released if the window cannot be built from it.
    fn retains_handle(&self) -> bool {
        false
    }
}

/// One row of controls, left to right.
pub type Row<'a> = Vec<&'a dyn Control>;

/// Rows of controls, top to bottom.
pub type Layout<'a> = Vec<Row<'a>>;

/// Builds a [`Layout`] from rows of control bindings.
///
/// ```ignore
/// let layout = layout![[label, name_field], [ok_button]];
/// ```
///
/// Each entry is borrowed, so pass bindings rather than temporaries.
#[macro_export]
macro_rules! layout {
    ($([$($control:expr),* $(,)?]),* $(,)?) => {
        vec![$(vec![$(&$control as &dyn $crate::Control),*]),*]
    };
}

/// Static text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Takes effect the next time the label is placed in a layout.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Control for Label {
    fn encode(&self, gui: &Gui) -> Result<Dynamic, FormsError> {
        let handle = gui.construct("Text", vec![Dynamic::Str(self.text.clone())], Kwargs::new())?;
        Ok(Dynamic::Object(handle))
    }
}

/// Single-line text input. Its value is reported under `key` by `Window::read`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    default_text: String,
    key: String,
}

impl TextField {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            default_text: String::new(),
            key: key.into(),
        }
    }

    pub fn with_default_text(mut self, text: impl Into<String>) -> Self {
        self.default_text = text.into();
        self
    }

    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Control for TextField {
    fn encode(&self, gui: &Gui) -> Result<Dynamic, FormsError> {
        let kwargs = Kwargs::new()
            .with("default_text", &self.default_text)
            .with("key", &self.key);
        let handle = gui.construct("InputText", Vec::new(), kwargs)?;
        Ok(Dynamic::Object(handle))
    }
}
