//! Ordered HTML attribute lists.
//!
//! Attributes render in insertion order: `name="value"` when a value is
//! present, or the bare `name` for boolean flags, separated by single spaces.
//! Values are written verbatim; callers escape anything that needs it.
//!
//! ## Examples
//!
//! ```
//! use video_embed::AttributeList;
//!
//! let mut attrs = AttributeList::new();
//! attrs.push("type", "text/html");
//! attrs.push("frameborder", "0");
//! attrs.push_flag("allowfullscreen");
//!
//! assert_eq!(attrs.to_string(), r#"type="text/html" frameborder="0" allowfullscreen"#);
//! ```

use std::fmt;

/// A single attribute; `value` is `None` for boolean flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub value: Option<String>,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, r#"{}="{}""#, self.name, value),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Attributes in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList(Vec<Attribute>);

impl AttributeList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `name="value"`.
    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.push(Attribute {
            name,
            value: Some(value.into()),
        });
    }

    /// Appends a bare boolean flag.
    pub fn push_flag(&mut self, name: &'static str) {
        self.0.push(Attribute { name, value: None });
    }

    /// Returns the value stored for `name`; `Some(None)` for a flag.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.0
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_deref())
    }

    /// Attribute names in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|attr| attr.name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.0.iter()
    }
}

impl fmt::Display for AttributeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attr) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{attr}")?;
        }
        Ok(())
    }
}

/// Formats a number the way it appears in markup: integers without a
/// fractional part, everything else in shortest round-trip form.
pub(crate) fn format_number(value: f64) -> String {
    // -0.0 would otherwise print as "-0"
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_renders_nothing() {
        let attrs = AttributeList::new();
        assert!(attrs.is_empty());
        assert_eq!(attrs.to_string(), "");
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut attrs = AttributeList::new();
        attrs.push("src", "//a");
        attrs.push("type", "text/html");
        attrs.push("height", "1");
        attrs.push("width", "2");

        assert_eq!(attrs.names().collect::<Vec<_>>(), vec!["src", "type", "height", "width"]);
        assert_eq!(attrs.to_string(), r#"src="//a" type="text/html" height="1" width="2""#);
    }

    #[test]
    fn test_flags_render_bare() {
        let mut attrs = AttributeList::new();
        attrs.push_flag("webkitallowfullscreen");
        attrs.push_flag("mozallowfullscreen");

        assert_eq!(attrs.to_string(), "webkitallowfullscreen mozallowfullscreen");
        assert_eq!(attrs.get("mozallowfullscreen"), Some(None));
    }

    #[test]
    fn test_empty_value_is_not_a_flag() {
        let mut attrs = AttributeList::new();
        attrs.push("title", "");
        assert_eq!(attrs.to_string(), r#"title="""#);
        assert_eq!(attrs.get("title"), Some(Some("")));
        assert_eq!(attrs.get("missing"), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(640.0), "640");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(56.25), "56.25");
        assert_eq!(format_number(41.5), "41.5");
    }
}
