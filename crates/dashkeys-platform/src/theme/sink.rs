use std::collections::BTreeMap;

/// Where applied theme variables land; the document root in a browser host.
pub trait CssVariableSink {
    fn set_property(&mut self, name: &str, value: &str);
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// In-process stand-in for the document root's inline style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootStyle {
    properties: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
}

impl RootStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render the properties as a `:root { ... }` block.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.properties {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push('}');
        css
    }
}

impl CssVariableSink for RootStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}
