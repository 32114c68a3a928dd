use std::collections::HashMap;

/// Key → human-readable text resolution.
pub trait Localizer {
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Localized text for `key`, or the key itself when it is missing.
    fn translate<'k>(&'k self, key: &'k str) -> &'k str {
        self.lookup(key).unwrap_or(key)
    }
}

/// Flat localization dictionary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocaleTable {
    entries: HashMap<String, String>,
}

impl LocaleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), text.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LocaleTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, text)| (key.into(), text.into()))
                .collect(),
        }
    }
}

impl Localizer for LocaleTable {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}
