use indexmap::IndexMap;
use serde::Deserialize;

/// DependencySpec value object: package name to version specifier
///
/// Keys keep the order in which they appeared in the source document
/// (manifest or registry response).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DependencySpec(IndexMap<String, String>);

impl DependencySpec {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builds a spec from a JSON object, keeping string-valued entries only.
    ///
    /// Registry documents occasionally carry non-string values here
    /// (e.g. `null` for a removed dependency); those entries are skipped.
    pub fn from_json_object(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        Self(
            object
                .iter()
                .filter_map(|(name, value)| value.as_str().map(|v| (name.clone(), v.to_string())))
                .collect(),
        )
    }

    /// Appends the entries of `other` whose names are not yet present.
    pub fn merge_missing(&mut self, other: DependencySpec) {
        for (name, specifier) in other.0 {
            self.0.entry(name).or_insert(specifier);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for DependencySpec {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        )
    }
}
