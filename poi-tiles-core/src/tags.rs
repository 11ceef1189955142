//! OpenStreetMap tag maps and the lookups used to build points of interest.
//!
//! Only four keys drive the output record: `name`, the `tourism`/`historic`
//! pair for the type, and the `addr:full`/`addr:street` pair for the address.
//! Every other tag is carried along but never inspected.

use std::collections::BTreeMap;

/// Tag carrying the display name of a point of interest.
pub const NAME_KEY: &str = "name";

/// Keys consulted, in order, for the point of interest type.
pub const KIND_KEYS: [&str; 2] = ["tourism", "historic"];

/// Keys consulted, in order, for the point of interest address.
pub const ADDRESS_KEYS: [&str; 2] = ["addr:full", "addr:street"];

/// Free-form key/value tags attached to an OpenStreetMap node.
///
/// Keys are unique; inserting an existing key replaces its value, so the last
/// occurrence in the input wins.
///
/// # Examples
/// ```
/// use poi_tiles_core::Tags;
///
/// let tags = Tags::from([("name", "Fort Point"), ("historic", "fort")]);
/// assert_eq!(tags.name(), Some("Fort Point"));
/// assert_eq!(tags.kind(), "fort");
/// assert_eq!(tags.address(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(BTreeMap<String, String>);

impl Tags {
    /// Create an empty tag map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a tag, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a tag value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the value of the first key in `keys` that is present.
    ///
    /// A key that is present with an empty value still counts as present and
    /// stops the search.
    #[must_use]
    pub fn first_present(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }

    /// The `name` tag, or `None` when it is absent or empty.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get(NAME_KEY).filter(|name| !name.is_empty())
    }

    /// The point of interest type: `tourism`, then `historic`, else `""`.
    #[must_use]
    pub fn kind(&self) -> &str {
        self.first_present(&KIND_KEYS).unwrap_or_default()
    }

    /// The address: `addr:full`, then `addr:street`, else `""`.
    #[must_use]
    pub fn address(&self) -> &str {
        self.first_present(&ADDRESS_KEYS).unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for Tags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tags = Self::new();
        for (key, value) in iter {
            tags.insert(key, value);
        }
        tags
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Tags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
