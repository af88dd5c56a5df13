use pysg_runtime::{decode_required, from_foreign, Dynamic, FromDynamic, Gui, Handle, IntoDynamic, Kwargs};
use serde::{Deserialize, Serialize};

use crate::control::Control;
use crate::error::FormsError;
use crate::geometry::{Padding, Size};

// Attribute names on the foreign Button object. Constructor keywords and
// attributes share the same names.
const BUTTON_TEXT: &str = "button_text";
const TOOLTIP: &str = "tooltip";
const DISABLED: &str = "disabled";
const IMAGE_FILENAME: &str = "image_filename";
const IMAGE_SIZE: &str = "image_size";
const BORDER_WIDTH: &str = "border_width";
const SIZE: &str = "size";
const AUTO_SIZE: &str = "auto_size_button";
const FOCUS: &str = "focus";
const PAD: &str = "pad";
const KEY: &str = "key";
const VISIBLE: &str = "visible";

/// Constructor parameters for [`Button`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub button_text: String,
    pub tool_tip: Option<String>,
    pub disabled: bool,
    pub image_filename: Option<String>,
    pub image_size: Size,
    pub border_width: Option<i64>,
    pub size: Size,
    pub auto_size: Option<bool>,
    pub focus: bool,
    pub padding_top: Option<i64>,
    pub padding_right: Option<i64>,
    pub padding_bottom: Option<i64>,
    pub padding_left: Option<i64>,
    pub key: Option<String>,
    pub visible: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            button_text: String::new(),
            tool_tip: None,
            disabled: false,
            image_filename: None,
            image_size: Size::UNSPECIFIED,
            border_width: None,
            size: Size::UNSPECIFIED,
            auto_size: None,
            focus: false,
            padding_top: None,
            padding_right: None,
            padding_bottom: None,
            padding_left: None,
            key: None,
            visible: true,
        }
    }
}

impl ButtonConfig {
    pub fn new(button_text: impl Into<String>) -> Self {
        Self {
            button_text: button_text.into(),
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    fn padding(&self) -> Padding {
        Padding::new(self.padding_top, self.padding_right, self.padding_bottom, self.padding_left)
    }

    fn into_kwargs(self) -> Kwargs {
        let padding = self.padding();
        Kwargs::new()
            .with(BUTTON_TEXT, self.button_text)
            .with(TOOLTIP, self.tool_tip)
            .with(DISABLED, self.disabled)
            .with(IMAGE_FILENAME, self.image_filename)
            .with(IMAGE_SIZE, self.image_size)
            .with(BORDER_WIDTH, self.border_width)
            .with(SIZE, self.size)
            .with(AUTO_SIZE, self.auto_size)
            .with(FOCUS, self.focus)
            .with(PAD, padding)
            .with(KEY, self.key)
            .with(VISIBLE, self.visible)
    }
}

/// A push button backed by one live foreign object.
///
/// Every accessor reads or writes that object directly; nothing is cached
/// on the host side.
#[derive(Debug)]
pub struct Button {
    gui: Gui,
    handle: Handle,
}

impl Button {
    pub fn new(gui: &Gui, config: ButtonConfig) -> Result<Self, FormsError> {
        let handle = gui.construct("Button", Vec::new(), config.into_kwargs())?;
        Ok(Self {
            gui: gui.clone(),
            handle,
        })
    }

    fn get(&self, name: &str) -> Result<Dynamic, FormsError> {
        Ok(self.gui.get_attr(self.handle, name)?)
    }

    fn set(&mut self, name: &str, value: impl IntoDynamic) -> Result<(), FormsError> {
        Ok(self.gui.set_attr(self.handle, name, value.into_dynamic())?)
    }

    /// For attributes that exist as long as the object does.
    fn required<T: FromDynamic>(&self, name: &str) -> Result<T, FormsError> {
        Ok(decode_required(&self.get(name)?, name)?)
    }

    fn optional<T: FromDynamic>(&self, name: &str) -> Result<Option<T>, FormsError> {
        Ok(from_foreign(&self.get(name)?))
    }

    pub fn button_text(&self) -> Result<String, FormsError> {
        self.required(BUTTON_TEXT)
    }

    pub fn set_button_text(&mut self, text: &str) -> Result<(), FormsError> {
        self.set(BUTTON_TEXT, text)
    }

    pub fn tool_tip(&self) -> Result<Option<String>, FormsError> {
        self.optional(TOOLTIP)
    }

    pub fn set_tool_tip(&mut self, tool_tip: Option<&str>) -> Result<(), FormsError> {
        self.set(TOOLTIP, tool_tip)
    }

    pub fn disabled(&self) -> Result<bool, FormsError> {
        self.required(DISABLED)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> Result<(), FormsError> {
        self.set(DISABLED, disabled)
    }

    pub fn image_filename(&self) -> Result<Option<String>, FormsError> {
        self.optional(IMAGE_FILENAME)
    }

    pub fn set_image_filename(&mut self, filename: Option<&str>) -> Result<(), FormsError> {
        self.set(IMAGE_FILENAME, filename)
    }

    pub fn image_size(&self) -> Result<Size, FormsError> {
        Size::decode(&self.get(IMAGE_SIZE)?)
    }

    pub fn set_image_size(&mut self, size: Size) -> Result<(), FormsError> {
        self.set(IMAGE_SIZE, size)
    }

    pub fn border_width(&self) -> Result<Option<i64>, FormsError> {
        self.optional(BORDER_WIDTH)
    }

    pub fn set_border_width(&mut self, width: Option<i64>) -> Result<(), FormsError> {
        self.set(BORDER_WIDTH, width)
    }

    pub fn size(&self) -> Result<Size, FormsError> {
        Size::decode(&self.get(SIZE)?)
    }

    pub fn set_size(&mut self, size: Size) -> Result<(), FormsError> {
        self.set(SIZE, size)
    }

    pub fn auto_size(&self) -> Result<Option<bool>, FormsError> {
        self.optional(AUTO_SIZE)
    }

    pub fn set_auto_size(&mut self, auto_size: Option<bool>) -> Result<(), FormsError> {
        self.set(AUTO_SIZE, auto_size)
    }

    pub fn focus(&self) -> Result<bool, FormsError> {
        self.required(FOCUS)
    }

    pub fn set_focus(&mut self, focus: bool) -> Result<(), FormsError> {
        self.set(FOCUS, focus)
    }

    pub fn visible(&self) -> Result<bool, FormsError> {
        self.required(VISIBLE)
    }

    pub fn set_visible(&mut self, visible: bool) -> Result<(), FormsError> {
        self.set(VISIBLE, visible)
    }

    /// Set at construction. There is no setter.
    ///
    /// ```
    /// # use pysg_forms::{Button, ButtonConfig, Gui, GuiConfig, HeadlessBackend};
    /// # let gui = Gui::init(HeadlessBackend::new(), GuiConfig::default()).unwrap();
    /// let button = Button::new(&gui, ButtonConfig::new("OK").with_key("ok")).unwrap();
    /// assert_eq!(button.key().unwrap().as_deref(), Some("ok"));
    /// ```
    ///
    /// ```compile_fail
    /// # use pysg_forms::{Button, ButtonConfig, Gui, GuiConfig, HeadlessBackend};
    /// # let gui = Gui::init(HeadlessBackend::new(), GuiConfig::default()).unwrap();
    /// let mut button = Button::new(&gui, ButtonConfig::new("OK").with_key("ok")).unwrap();
    /// button.set_key("cancel");
    /// ```
    pub fn key(&self) -> Result<Option<String>, FormsError> {
        self.optional(KEY)
    }

    // The four padding sides are facets of one foreign attribute. Writing a
    // side reads the whole structure, changes that side and writes it back.

    fn padding(&self) -> Result<Padding, FormsError> {
        Padding::decode(&self.get(PAD)?)
    }

    fn update_padding(&mut self, update: impl FnOnce(&mut Padding)) -> Result<(), FormsError> {
        let mut padding = self.padding()?;
        update(&mut padding);
        self.set(PAD, padding)
    }

    pub fn padding_top(&self) -> Result<Option<i64>, FormsError> {
        Ok(self.padding()?.top)
    }

    pub fn set_padding_top(&mut self, top: Option<i64>) -> Result<(), FormsError> {
        self.update_padding(|p| p.top = top)
    }

    pub fn padding_right(&self) -> Result<Option<i64>, FormsError> {
        Ok(self.padding()?.right)
    }

    pub fn set_padding_right(&mut self, right: Option<i64>) -> Result<(), FormsError> {
        self.update_padding(|p| p.right = right)
    }

    pub fn padding_bottom(&self) -> Result<Option<i64>, FormsError> {
        Ok(self.padding()?.bottom)
    }

    pub fn set_padding_bottom(&mut self, bottom: Option<i64>) -> Result<(), FormsError> {
        self.update_padding(|p| p.bottom = bottom)
    }

    pub fn padding_left(&self) -> Result<Option<i64>, FormsError> {
        Ok(self.padding()?.left)
    }

    pub fn set_padding_left(&mut self, left: Option<i64>) -> Result<(), FormsError> {
        self.update_padding(|p| p.left = left)
    }
}

impl Control for Button {
    fn encode(&self, _gui: &Gui) -> Result<Dynamic, FormsError> {
        Ok(Dynamic::Object(self.handle))
    }

    fn retains_handle(&self) -> bool {
        true
    }
}
