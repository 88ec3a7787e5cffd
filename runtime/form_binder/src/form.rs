//! The inputs consumed by the binder: multi-valued form values and single-valued route parameters.
use indexmap::IndexMap;

/// Parsed query or form values: each key maps to one or more values, in arrival order.
///
/// Keys are unique; values pushed under an existing key are appended to its list.
/// Iteration follows the order in which keys were first inserted.
///
/// # Example
///
/// ```rust
/// use form_binder::FormValues;
///
/// let form = FormValues::parse(b"ul[]=str&ul[]=array&user.Name=John+Doe");
/// assert_eq!(form.get_all("ul[]"), ["str", "array"]);
/// assert_eq!(form.get("user.Name"), Some("John Doe"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: IndexMap<String, Vec<String>>,
}

impl FormValues {
    /// An empty set of form values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` payload, e.g. a request body or
    /// the query string of a URI (without the leading `?`).
    ///
    /// Keys and values are percent-decoded and `+` is decoded as a space.
    pub fn parse(input: &[u8]) -> Self {
        form_urlencoded::parse(input).collect()
    }

    /// Push `value` at the end of the values associated with `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// The first value associated with `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All the values associated with `key`, in arrival order.
    ///
    /// It returns an empty slice if `key` is missing.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns `true` if there is at least one entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over keys and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// The number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormValues::new();
        form.extend(iter);
        form
    }
}

impl<K, V> Extend<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.append(key, value);
        }
    }
}

/// Route parameters extracted by the router, e.g. `id` for `/users/{id}`.
///
/// Unlike [`FormValues`], each key maps to exactly one value.
/// When binding scalars, a non-empty route parameter takes precedence over form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: IndexMap<String, String>,
}

impl RouteParams {
    /// An empty set of route parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// The value of the route parameter named `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = RouteParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
