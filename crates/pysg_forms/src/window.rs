use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use pysg_runtime::{from_foreign, Dynamic, Gui, Handle, Kwargs};

use crate::control::Layout;
use crate::error::FormsError;

/// What a read produced: the event name and the values of keyed inputs.
pub type ReadResult = (String, Option<HashMap<String, String>>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Unopened,
    Open,
    Closed,
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WindowState::Unopened => write!(f, "unopened"),
            WindowState::Open => write!(f, "open"),
            WindowState::Closed => write!(f, "closed"),
        }
    }
}

/// Converts every control of `layout` into the foreign list-of-rows shape.
///
/// If a control fails to encode, the objects already built for controls
/// that do not retain their handle are released before the error returns.
pub fn encode_layout(gui: &Gui, layout: &Layout<'_>) -> Result<Dynamic, FormsError> {
    let mut built = Vec::new();
    let mut rows = Vec::with_capacity(layout.len());
    for row in layout {
        let mut elements = Vec::with_capacity(row.len());
        for control in row {
            match control.encode(gui) {
                Ok(element) => {
                    if !control.retains_handle() {
                        built.extend(element.as_handle());
                    }
                    elements.push(element);
                }
                Err(e) => {
                    release_all(gui, &built);
                    return Err(e);
                }
            }
        }
        rows.push(Dynamic::List(elements));
    }
    Ok(Dynamic::List(rows))
}

/// Handles built for `layout` that nothing else owns.
fn layout_owned_handles(layout: &Layout<'_>, encoded: &Dynamic) -> Vec<Handle> {
    let Dynamic::List(rows) = encoded else {
        return Vec::new();
    };
    layout
        .iter()
        .zip(rows)
        .flat_map(|(row, encoded_row)| {
            let elements: &[Dynamic] = match encoded_row {
                Dynamic::List(elements) => elements,
                _ => &[],
            };
            row.iter()
                .zip(elements)
                .filter(|(control, _)| !control.retains_handle())
                .filter_map(|(_, element)| element.as_handle())
        })
        .collect()
}

fn release_all(gui: &Gui, handles: &[Handle]) {
    for handle in handles {
        if let Err(e) = gui.release(*handle) {
            tracing::warn!(%handle, error = %e, "could not release layout object");
        }
    }
}

/// Decodes a raw `(event, values)` read result.
///
/// Any unexpected shape degrades to `("", None)`.
fn decode_read(result: &Dynamic) -> ReadResult {
    let decoded = result.as_pair().and_then(|(event, values)| {
        let event: String = from_foreign(event)?;
        let values: HashMap<String, String> = from_foreign(values)?;
        Some((event, Some(values)))
    });
    match decoded {
        Some(read) => read,
        None => {
            tracing::warn!(%result, "read result did not decode; reporting empty event");
            (String::new(), None)
        }
    }
}

/// One dialog session. Owns the foreign window handle from `open` to `close`.
///
/// Dropping a window does not close it; call [`Window::close`].
#[derive(Debug)]
pub struct Window {
    gui: Gui,
    handle: Option<Handle>,
    state: WindowState,
}

impl Window {
    pub fn new(gui: &Gui) -> Self {
        Self {
            gui: gui.clone(),
            handle: None,
            state: WindowState::Unopened,
        }
    }

    /// Creates and opens a window in one step.
    pub fn create(gui: &Gui, title: &str, layout: &Layout<'_>) -> Result<Self, FormsError> {
        let mut window = Self::new(gui);
        window.open(title, layout)?;
        Ok(window)
    }

    pub fn open(&mut self, title: &str, layout: &Layout<'_>) -> Result<(), FormsError> {
        if self.state != WindowState::Unopened {
            return Err(FormsError::InvalidState {
                operation: "open",
                state: self.state,
            });
        }
        let encoded = encode_layout(&self.gui, layout)?;
        let owned = layout_owned_handles(layout, &encoded);
        let kwargs = Kwargs::new().with("layout", encoded);
        let handle = match self.gui.construct("Window", vec![Dynamic::Str(title.to_string())], kwargs) {
            Ok(handle) => handle,
            Err(e) => {
                release_all(&self.gui, &owned);
                return Err(e.into());
            }
        };
        tracing::debug!(title, %handle, rows = layout.len(), "window opened");
        self.handle = Some(handle);
        self.state = WindowState::Open;
        Ok(())
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    fn open_handle(&self, operation: &'static str) -> Result<Handle, FormsError> {
        match (self.state, self.handle) {
            (WindowState::Open, Some(handle)) => Ok(handle),
            _ => Err(FormsError::InvalidState {
                operation,
                state: self.state,
            }),
        }
    }

    pub fn title(&self) -> Result<String, FormsError> {
        let handle = self.open_handle("read the title of")?;
        let title = self.gui.get_attr(handle, "title")?;
        Ok(pysg_runtime::decode_required(&title, "title")?)
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), FormsError> {
        let handle = self.open_handle("set the title of")?;
        Ok(self.gui.set_attr(handle, "title", Dynamic::Str(title.to_string()))?)
    }

    /// Blocks until the toolkit delivers the next event.
    ///
    /// Uses the configured `read_timeout_ms` when one is set.
    pub fn read(&mut self) -> Result<ReadResult, FormsError> {
        let timeout = self.gui.config().read_timeout_ms;
        self.read_with(timeout)
    }

    /// Like [`Window::read`], but returns the toolkit's timeout event once
    /// `timeout` elapses without input.
    pub fn read_timeout(&mut self, timeout: Duration) -> Result<ReadResult, FormsError> {
        let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self.read_with(Some(millis))
    }

    fn read_with(&mut self, timeout_ms: Option<u64>) -> Result<ReadResult, FormsError> {
        let handle = self.open_handle("read")?;
        let mut kwargs = Kwargs::new();
        if let Some(ms) = timeout_ms {
            kwargs.set("timeout", i64::try_from(ms).unwrap_or(i64::MAX));
        }
        let result = self.gui.call(handle, "read", Vec::new(), kwargs)?;
        let read = decode_read(&result);
        tracing::debug!(event = %read.0, "window event");
        Ok(read)
    }

    /// Closes the window and releases its handle.
    ///
    /// The window only becomes Closed once the toolkit has closed it and the
    /// handle is released; on failure the handle is kept so `close` can be
    /// retried. Closing an unopened or already closed window only changes
    /// the state.
    pub fn close(&mut self) -> Result<(), FormsError> {
        match self.handle {
            Some(handle) => {
                self.gui.call(handle, "close", Vec::new(), Kwargs::new())?;
                self.gui.release(handle)?;
                self.handle = None;
                tracing::debug!(%handle, "window closed");
            }
            None => tracing::debug!(state = %self.state, "close on a window without a handle"),
        }
        self.state = WindowState::Closed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_read_accepts_event_and_string_values() {
        let raw = Dynamic::pair(
            Dynamic::Str("ok".into()),
            Dynamic::Dict(vec![(Dynamic::Str("name".into()), Dynamic::Str("Alice".into()))]),
        );
        let (event, values) = decode_read(&raw);
        assert_eq!(event, "ok");
        assert_eq!(values.and_then(|v| v.get("name").cloned()), Some("Alice".to_string()));
    }

    #[test]
    fn decode_read_degrades_on_any_bad_shape() {
        let empty = (String::new(), None);
        assert_eq!(decode_read(&Dynamic::pair(Dynamic::Int(3), Dynamic::Dict(Vec::new()))), empty);
        assert_eq!(decode_read(&Dynamic::pair(Dynamic::Str("ok".into()), Dynamic::None)), empty);
        assert_eq!(decode_read(&Dynamic::Str("ok".into())), empty);
        assert_eq!(decode_read(&Dynamic::pair(Dynamic::None, Dynamic::None)), empty);
    }
}
