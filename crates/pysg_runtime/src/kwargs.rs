use crate::bridge::IntoDynamic;
use crate::value::Dynamic;

/// Named arguments for a foreign constructor or method call, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kwargs {
    entries: Vec<(String, Dynamic)>,
}

impl Kwargs {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Sets `key`, replacing an earlier value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl IntoDynamic) {
        self.set_raw(key, value.into_dynamic());
    }

    pub fn set_raw(&mut self, key: impl Into<String>, value: Dynamic) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl IntoDynamic) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Dynamic> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Dynamic)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl IntoIterator for Kwargs {
    type Item = (String, Dynamic);
    type IntoIter = std::vec::IntoIter<(String, Dynamic)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
