/// Configuration for [`Binder`](crate::Binder).
///
/// It implements `serde::Deserialize`, so it can be embedded in the configuration
/// of your application. Every field is optional and falls back to its default value.
///
/// # Example
///
/// ```rust
/// use form_binder::{Binder, BinderConfig, FormValues};
///
/// let form = FormValues::parse(b"ids[2]=7");
/// let config = BinderConfig {
///     max_slice_index: 100,
/// };
/// let ids: Vec<u32> = Binder::new(&form).with_config(config).bind_value("ids").unwrap();
/// assert_eq!(ids, [0, 0, 7]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct BinderConfig {
    /// The largest index accepted in an indexed sequence key, e.g. `ids[3]`.
    ///
    /// A sequence is sized after its largest index, so an unbounded index
    /// (`ids[4294967295]=1`) would let a single parameter trigger a huge allocation.
    /// Entries above the limit are ignored.
    ///
    /// Defaults to 10,000.
    #[serde(default = "default_max_slice_index")]
    pub max_slice_index: usize,
}

fn default_max_slice_index() -> usize {
    10_000
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            max_slice_index: default_max_slice_index(),
        }
    }
}
