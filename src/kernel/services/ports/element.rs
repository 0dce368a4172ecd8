use compact_str::CompactString;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// The host element as it was before attach; handed back on detach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSnapshot {
    pub id: ElementId,
    pub tag: CompactString,
    attributes: FxHashMap<String, String>,
}

impl ElementSnapshot {
    pub fn new(id: ElementId, tag: &str) -> Self {
        Self {
            id,
            tag: CompactString::from(tag),
            attributes: FxHashMap::default(),
        }
    }

    /// `<input type="text">` with the given id.
    pub fn text_input(id: u64) -> Self {
        Self::new(ElementId(id), "input").with_attr("type", "text")
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(&name.to_ascii_lowercase())
    }

    pub fn usize_attr(&self, name: &str) -> Option<usize> {
        self.attr(name)?.trim().parse().ok()
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
