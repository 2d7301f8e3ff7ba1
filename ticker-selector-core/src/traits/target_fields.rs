//! Target field abstract Trait

/// Input fields a selection can be written into.
///
/// A selector is either `#id` or a bare `id`; front ends map ids to whatever
/// widget holds the value. Provides a default memory implementation
/// [`InMemoryFields`].
pub trait TargetFields {
    /// Whether `selector` names an existing field
    fn contains(&self, selector: &str) -> bool;

    /// Current value of the field
    fn value(&self, selector: &str) -> Option<&str>;

    /// Overwrite the field value. Returns `false` if no field matched.
    fn set_value(&mut self, selector: &str, value: &str) -> bool;
}

/// Strip the `#` of an id selector.
///
/// Anything else (class or attribute selectors) is not supported and yields
/// `None`, which makes the binding inert.
pub fn selector_id(selector: &str) -> Option<&str> {
    let trimmed = selector.trim();
    let id = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
    valid.then_some(id)
}

/// In-memory field set, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryFields {
    fields: Vec<(String, String)>,
}

impl InMemoryFields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty field (no-op if it already exists)
    #[must_use]
    pub fn with_field(mut self, id: impl Into<String>) -> Self {
        self.insert(id);
        self
    }

    /// Add an empty field (no-op if it already exists)
    pub fn insert(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.fields.iter().any(|(k, _)| *k == id) {
            self.fields.push((id, String::new()));
        }
    }

    /// Iterate `(id, value)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn position(&self, selector: &str) -> Option<usize> {
        let id = selector_id(selector)?;
        self.fields.iter().position(|(k, _)| k == id)
    }
}

impl TargetFields for InMemoryFields {
    fn contains(&self, selector: &str) -> bool {
        self.position(selector).is_some()
    }

    fn value(&self, selector: &str) -> Option<&str> {
        self.position(selector).map(|i| self.fields[i].1.as_str())
    }

    fn set_value(&mut self, selector: &str, value: &str) -> bool {
        match self.position(selector) {
            Some(i) => {
                self.fields[i].1 = value.to_string();
                true
            }
            None => false,
        }
    }
}
