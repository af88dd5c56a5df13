//! An in-memory stand-in for the foreign toolkit.
//!
//! Objects are plain attribute maps. Windows never render; `read` replays
//! events scripted by the caller, which makes the whole façade drivable
//! from tests without a display.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::backend::Backend;
use crate::kwargs::Kwargs;
use crate::value::{BridgeError, Dynamic, Handle};

/// Event name the toolkit reports when a timed read expires.
pub const TIMEOUT_EVENT: &str = "__TIMEOUT__";

/// Set on a window object once its `close` method ran.
pub const CLOSED_ATTR: &str = "closed";

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectData {
    pub class_name: String,
    pub attrs: HashMap<String, Dynamic>,
}

#[derive(Debug, Default)]
struct Store {
    module: Option<String>,
    objects: HashMap<Handle, ObjectData>,
    next_id: u64,
    script: VecDeque<Dynamic>,
    constructed: usize,
}

impl Store {
    fn is_closed(&self, object: Handle) -> bool {
        self.objects
            .get(&object)
            .and_then(|o| o.attrs.get(CLOSED_ATTR))
            .is_some_and(|closed| *closed == Dynamic::Bool(true))
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessBackend {
    inner: Rc<RefCell<Store>>,
}

/// Name of the attribute the first positional argument of `class` binds to.
fn leading_param(class: &str) -> Option<&'static str> {
    match class {
        "Text" => Some("text"),
        "InputText" => Some("default_text"),
        "Button" => Some("button_text"),
        "Window" => Some("title"),
        _ => None,
    }
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the result of the next `read`: `(event, {key: value, ...})`.
    pub fn script_event(&self, event: &str, values: &[(&str, &str)]) {
        let values = values
            .iter()
            .map(|(k, v)| (Dynamic::Str(k.to_string()), Dynamic::Str(v.to_string())))
            .collect();
        self.script_raw(Dynamic::pair(Dynamic::Str(event.to_string()), Dynamic::Dict(values)));
    }

    /// Queues an arbitrary value as the next `read` result.
    pub fn script_raw(&self, result: Dynamic) {
        self.inner.borrow_mut().script.push_back(result);
    }

    pub fn pending_events(&self) -> usize {
        self.inner.borrow().script.len()
    }

    pub fn imported_module(&self) -> Option<String> {
        self.inner.borrow().module.clone()
    }

    pub fn attr(&self, object: Handle, name: &str) -> Option<Dynamic> {
        self.inner.borrow().objects.get(&object).and_then(|o| o.attrs.get(name).cloned())
    }

    pub fn class_of(&self, object: Handle) -> Option<String> {
        self.inner.borrow().objects.get(&object).map(|o| o.class_name.clone())
    }

    pub fn is_live(&self, object: Handle) -> bool {
        self.inner.borrow().objects.contains_key(&object)
    }

    /// Whether the window has been closed through its `close` method.
    pub fn is_closed(&self, object: Handle) -> bool {
        self.inner.borrow().is_closed(object)
    }

    /// Number of live windows that have not been closed.
    pub fn open_windows(&self) -> usize {
        let store = self.inner.borrow();
        store
            .objects
            .iter()
            .filter(|(handle, o)| o.class_name == "Window" && !store.is_closed(**handle))
            .count()
    }

    /// Live objects of `class`, oldest first.
    pub fn live_objects(&self, class: &str) -> Vec<Handle> {
        let store = self.inner.borrow();
        let mut handles: Vec<Handle> = store
            .objects
            .iter()
            .filter(|(_, o)| o.class_name == class)
            .map(|(handle, _)| *handle)
            .collect();
        handles.sort();
        handles
    }

    /// Total number of successful `construct` calls so far.
    pub fn construct_count(&self) -> usize {
        self.inner.borrow().constructed
    }

    fn validate_layout(layout: &Dynamic, store: &Store) -> Result<(), BridgeError> {
        let rows = match layout {
            Dynamic::List(rows) | Dynamic::Tuple(rows) => rows,
            other => return Err(BridgeError::type_error("list of rows", other)),
        };
        for row in rows {
            let elements = match row {
                Dynamic::List(elements) | Dynamic::Tuple(elements) => elements,
                other => return Err(BridgeError::type_error("list of elements", other)),
            };
            for element in elements {
                let handle = element
                    .as_handle()
                    .ok_or_else(|| BridgeError::type_error("element", element))?;
                if !store.objects.contains_key(&handle) {
                    return Err(BridgeError::NoSuchObject(handle));
                }
            }
        }
        Ok(())
    }

    fn read(store: &mut Store, kwargs: &Kwargs) -> Dynamic {
        if let Some(result) = store.script.pop_front() {
            return result;
        }
        let timed = kwargs.get("timeout").is_some_and(|t| !t.is_none());
        if timed {
            Dynamic::pair(Dynamic::Str(TIMEOUT_EVENT.to_string()), Dynamic::Dict(Vec::new()))
        } else {
            // Nothing left to deliver: report the window as closed by the user
            Dynamic::pair(Dynamic::None, Dynamic::None)
        }
    }
}

impl Backend for HeadlessBackend {
    fn import(&self, module: &str) -> Result<(), BridgeError> {
        if module.trim().is_empty() {
            return Err(BridgeError::ModuleNotFound(module.to_string()));
        }
        self.inner.borrow_mut().module = Some(module.to_string());
        Ok(())
    }

    fn construct(&self, class: &str, args: Vec<Dynamic>, kwargs: Kwargs) -> Result<Handle, BridgeError> {
        let mut store = self.inner.borrow_mut();
        if store.module.is_none() {
            return Err(BridgeError::NotImported);
        }
        let leading = leading_param(class).ok_or_else(|| BridgeError::UnknownClass(class.to_string()))?;
        if args.len() > 1 {
            return Err(BridgeError::Custom(format!(
                "{}() takes at most 1 positional argument ({} given)",
                class,
                args.len()
            )));
        }

        let mut attrs = HashMap::new();
        if class == "InputText" {
            attrs.insert("default_text".to_string(), Dynamic::Str(String::new()));
        }
        if let Some(first) = args.into_iter().next() {
            attrs.insert(leading.to_string(), first);
        }
        for (name, value) in kwargs {
            attrs.insert(name, value);
        }
        if class == "Window" {
            let layout = attrs.get("layout").cloned().unwrap_or(Dynamic::List(Vec::new()));
            Self::validate_layout(&layout, &store)?;
            attrs.insert("layout".to_string(), layout);
        }

        store.next_id += 1;
        let handle = Handle(store.next_id);
        store.objects.insert(
            handle,
            ObjectData {
                class_name: class.to_string(),
                attrs,
            },
        );
        store.constructed += 1;
        Ok(handle)
    }

    fn get_attr(&self, object: Handle, name: &str) -> Result<Dynamic, BridgeError> {
        let store = self.inner.borrow();
        let data = store.objects.get(&object).ok_or(BridgeError::NoSuchObject(object))?;
        data.attrs
            .get(name)
            .cloned()
            .ok_or_else(|| BridgeError::NoSuchAttribute(object, name.to_string()))
    }

    fn set_attr(&self, object: Handle, name: &str, value: Dynamic) -> Result<(), BridgeError> {
        let mut store = self.inner.borrow_mut();
        let data = store.objects.get_mut(&object).ok_or(BridgeError::NoSuchObject(object))?;
        data.attrs.insert(name.to_string(), value);
        Ok(())
    }

    fn call(&self, object: Handle, method: &str, _args: Vec<Dynamic>, kwargs: Kwargs) -> Result<Dynamic, BridgeError> {
        let mut store = self.inner.borrow_mut();
        let class_name = store
            .objects
            .get(&object)
            .map(|o| o.class_name.clone())
            .ok_or(BridgeError::NoSuchObject(object))?;
        match (class_name.as_str(), method) {
            ("Window", "read") => {
                if store.is_closed(object) {
                    return Err(BridgeError::Custom(format!("read() on closed window {}", object)));
                }
                Ok(Self::read(&mut store, &kwargs))
            }
            ("Window", "close") => {
                if let Some(data) = store.objects.get_mut(&object) {
                    data.attrs.insert(CLOSED_ATTR.to_string(), Dynamic::Bool(true));
                }
                Ok(Dynamic::None)
            }
            _ => Err(BridgeError::NoSuchMethod(object, method.to_string())),
        }
    }

    fn release(&self, object: Handle) -> Result<(), BridgeError> {
        self.inner
            .borrow_mut()
            .objects
            .remove(&object)
            .map(|_| ())
            .ok_or(BridgeError::NoSuchObject(object))
    }
}
