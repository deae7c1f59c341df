//! Static catalog of schema attributes a segment can be built from.

use std::fmt;

/// One selectable schema attribute.
///
/// `value` is the stable identifier sent to the collaborator,
/// `label` is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaOption {
    /// Human-readable name (e.g. "First Name").
    pub label: &'static str,
    /// Stable identifier (e.g. "first_name").
    pub value: &'static str,
}

impl SchemaOption {
    /// Create a catalog entry.
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

impl fmt::Display for SchemaOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// The fixed set of attributes offered at startup.
const DEFAULT_OPTIONS: [SchemaOption; 7] = [
    SchemaOption::new("First Name", "first_name"),
    SchemaOption::new("Last Name", "last_name"),
    SchemaOption::new("Gender", "gender"),
    SchemaOption::new("Age", "age"),
    SchemaOption::new("Account Name", "account_name"),
    SchemaOption::new("City", "city"),
    SchemaOption::new("State", "state"),
];

/// Ordered, immutable list of [`SchemaOption`]s.
///
/// Catalog order is display order for every selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaCatalog {
    options: Vec<SchemaOption>,
}

impl SchemaCatalog {
    /// All options in catalog order.
    pub fn options(&self) -> &[SchemaOption] {
        &self.options
    }

    /// Number of options in the catalog.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True when the catalog holds no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Look up an option by its stable identifier.
    pub fn find(&self, value: &str) -> Option<SchemaOption> {
        self.options.iter().copied().find(|o| o.value == value)
    }

    /// Options whose value does not appear in `used`, in catalog order.
    pub fn available_excluding<'a, I>(&self, used: I) -> Vec<SchemaOption>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let used: Vec<&str> = used.into_iter().collect();
        self.options
            .iter()
            .copied()
            .filter(|o| !used.contains(&o.value))
            .collect()
    }
}

impl Default for SchemaCatalog {
    fn default() -> Self {
        Self {
            options: DEFAULT_OPTIONS.to_vec(),
        }
    }
}
