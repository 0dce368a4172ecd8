use crate::metrics::FontDescriptor;

use super::element::ElementSnapshot;

/// Ordered CSS declaration block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssDeclaration {
    properties: Vec<(String, String)>,
}

impl CssDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: &str, value: &str) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: &str, value: &str) {
        let property = property.trim().to_ascii_lowercase();
        match self.properties.iter_mut().find(|(p, _)| *p == property) {
            Some((_, v)) => *v = value.trim().to_string(),
            None => self.properties.push((property, value.trim().to_string())),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        let property = property.to_ascii_lowercase();
        self.properties
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Parses `a: b; c: d` text, ignoring malformed entries.
    pub fn parse(css_text: &str) -> Self {
        let mut decl = Self::new();
        for entry in css_text.split(';') {
            if let Some((property, value)) = entry.split_once(':') {
                if !property.trim().is_empty() {
                    decl.set(property, value);
                }
            }
        }
        decl
    }

    pub fn css_text(&self) -> String {
        self.properties
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Font from `font-family` / `font-size` / `letter-spacing`, if a size is given in px.
    pub fn font(&self) -> Option<FontDescriptor> {
        let size = parse_px(self.get("font-size")?)?;
        let family = self
            .get("font-family")
            .map(|f| f.trim_matches(|c| c == '"' || c == '\''))
            .unwrap_or("monospace");
        let mut font = FontDescriptor::new(family, size);
        if let Some(spacing) = self.get("letter-spacing").and_then(parse_px) {
            font.letter_spacing = spacing;
        }
        Some(font)
    }
}

fn parse_px(value: &str) -> Option<f32> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

/// Computed-style cloning ("doppelganger" measurement), supplied by the host.
pub trait StyleSource {
    fn clone_computed_style(&self, element: &ElementSnapshot) -> CssDeclaration;
}
