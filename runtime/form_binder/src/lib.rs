//! Bind untyped, string-keyed request data into strongly-typed destinations.
//!
//! Query strings and `application/x-www-form-urlencoded` bodies are flat: every key maps to
//! one or more strings. `form_binder` recovers structure from the keys themselves
//! (`ol[0]=1`, `ul[]=str`, `user.Name=astaxie`, `m[key]=val`) and binds the values into
//! scalars, sequences, maps, structs and pointers.
//!
//! [`Binder`] is the key type in this crate. Check out its documentation for the supported
//! key syntax and destination types.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use form_binder::{Binder, FormValues, RouteParams};
//!
//! #[derive(serde::Deserialize, Debug, PartialEq)]
//! struct Item {
//!     sku: String,
//!     quantity: u32,
//! }
//!
//! let form = FormValues::parse(
//!     b"items[0].sku=A-1&items[0].quantity=2&items[1].sku=B-7&m[a]=1&m[b]=2&id=5",
//! );
//! let route_params: RouteParams = [("id", "42")].into_iter().collect();
//! let binder = Binder::new(&form).with_route_params(&route_params);
//!
//! let items: Vec<Item> = binder.bind_value("items").unwrap();
//! assert_eq!(
//!     items,
//!     [
//!         Item { sku: "A-1".into(), quantity: 2 },
//!         Item { sku: "B-7".into(), quantity: 0 },
//!     ]
//! );
//!
//! let mut m: HashMap<String, i64> = HashMap::new();
//! binder.bind(&mut m, "m").unwrap();
//! assert_eq!(m, HashMap::from([("a".to_owned(), 1), ("b".to_owned(), 2)]));
//!
//! // Route parameters take precedence over form values.
//! let id: u64 = binder.bind_value("id").unwrap();
//! assert_eq!(id, 42);
//! ```
mod binder;
mod config;
mod de;
pub mod errors;
mod form;
mod key;

pub use binder::Binder;
pub use config::BinderConfig;
pub use errors::BindError;
pub use form::{FormValues, RouteParams};
