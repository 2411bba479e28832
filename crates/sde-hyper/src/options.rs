//! Role options: `{type=shield,color=darkcyan,logo=Markdown}`.

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;
use serde_yaml::Value;

/// Options of a role occurrence, sorted by key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HyperOptions {
    values: BTreeMap<String, String>,
}

impl HyperOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `key=value` pairs separated by `,`.
    ///
    /// Keys and values are percent-decoded, `+` stands for a space. Pairs
    /// without `=` or with an empty value are dropped, and the first value of
    /// a repeated key wins.
    ///
    /// # Example
    ///
    /// ```
    /// use sde_hyper::HyperOptions;
    ///
    /// let options = HyperOptions::decode("type=shield,label=Navigate+to,message=100%25");
    /// assert_eq!(options.get("label"), Some("Navigate to"));
    /// assert_eq!(options.get("message"), Some("100%"));
    /// ```
    pub fn decode(text: &str) -> Self {
        let mut options = Self::new();
        for pair in text.split(',') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let value = unquote_plus(value);
            if value.is_empty() {
                continue;
            }
            options.values.entry(unquote_plus(key)).or_insert(value);
        }
        options
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_owned(), value.into());
    }

    /// Insert unless `key` is already set. Returns the effective value.
    pub fn set_default(&mut self, key: &str, value: impl Into<String>) -> &str {
        self.values.entry(key.to_owned()).or_insert_with(|| value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Overlay `other`, whose values win.
    pub fn merge(&mut self, other: Self) {
        self.values.extend(other.values);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Directive options as YAML. Empty and truthy values become `true`.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        let mapping: BTreeMap<&str, Value> = self
            .values
            .iter()
            .map(|(key, value)| {
                let value = if value.is_empty() || is_truthy(value) {
                    Value::Bool(true)
                } else {
                    Value::String(value.clone())
                };
                (key.as_str(), value)
            })
            .collect();
        serde_yaml::to_string(&mapping)
    }
}

/// Whether an option value reads as boolean true.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

fn unquote_plus(text: &str) -> String {
    percent_decode_str(&text.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}
