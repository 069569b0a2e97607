//! Query-string construction.
//!
//! Parameters keep insertion order. Absent values are never written, list
//! values are sent as one comma-joined value, and the API key always goes
//! last as `key`.

use url::Url;

use crate::error::{ApiError, Result};

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Text(String),
    Number(i64),
    Unsigned(u64),
    Flag(bool),
    List(Vec<String>),
}

impl QueryValue {
    /// The value as it appears in the query string, before escaping.
    pub fn render(&self) -> String {
        match self {
            QueryValue::Text(text) => text.clone(),
            QueryValue::Number(n) => n.to_string(),
            QueryValue::Unsigned(n) => n.to_string(),
            QueryValue::Flag(b) => b.to_string(),
            QueryValue::List(items) => items.join(","),
        }
    }

    fn is_empty_list(&self) -> bool {
        matches!(self, QueryValue::List(items) if items.is_empty())
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Text(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Flag(value)
    }
}

macro_rules! number_value {
    ($variant:ident: $wide:ty => $($t:ty),*) => {
        $(
            impl From<$t> for QueryValue {
                fn from(value: $t) -> Self {
                    QueryValue::$variant(<$wide>::from(value))
                }
            }
        )*
    };
}

number_value!(Number: i64 => i32, i64);
number_value!(Unsigned: u64 => u32, u64);

impl<T: ToString> From<&[T]> for QueryValue {
    fn from(values: &[T]) -> Self {
        QueryValue::List(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&Vec<T>> for QueryValue {
    fn from(values: &Vec<T>) -> Self {
        QueryValue::from(values.as_slice())
    }
}

/// Ordered query parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`. An existing parameter keeps its position and
    /// takes the new value.
    pub fn set(&mut self, name: &str, value: impl Into<QueryValue>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((name.to_string(), value)),
        }
    }

    /// Set `name` only when `value` is present.
    pub fn set_opt<V: Into<QueryValue>>(&mut self, name: &str, value: Option<V>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<QueryValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn with_opt<V: Into<QueryValue>>(mut self, name: &str, value: Option<V>) -> Self {
        self.set_opt(name, value);
        self
    }

    /// Apply every pair of `other` with `set` semantics.
    pub fn merge(mut self, other: QueryParams) -> Self {
        for (name, value) in other.pairs {
            self.set(&name, value);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Compose `{base}{path}?{params}&key={api_key}`.
///
/// A caller-supplied `key` parameter is dropped so the real key is always
/// the single, final `key` pair. Empty lists are treated as absent.
pub fn build_url(base: &str, path: &str, params: &QueryParams, api_key: &str) -> Result<String> {
    let raw = format!("{base}{path}");
    let mut url = Url::parse(&raw)
        .map_err(|e| ApiError::Configuration(format!("invalid request URL {raw:?}: {e}")))?;

    {
        let mut query = url.query_pairs_mut();
        for (name, value) in params.iter() {
            if name == "key" || value.is_empty_list() {
                continue;
            }
            query.append_pair(name, &value.render());
        }
        query.append_pair("key", api_key);
    }

    Ok(url.into())
}
