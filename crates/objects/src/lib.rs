//! Value objects and JSON round-tripping.
//!
//! - [`Rectangle`] and [`Circle`]: plain values with a computed `area()`
//! - [`to_json`] / [`from_json`]: typed encode and decode
//! - [`from_json_with`]: decode onto the fields of a prototype value
//!
//! ```
//! use objects::{Circle, Rectangle, from_json, to_json};
//!
//! let r = Rectangle::new(10.0, 20.0);
//! assert_eq!(r.area(), 200.0);
//! assert_eq!(to_json(&r).unwrap(), r#"{"width":10.0,"height":20.0}"#);
//!
//! let c: Circle = from_json(r#"{"radius":10}"#).unwrap();
//! assert_eq!(c.radius, 10.0);
//! ```

pub mod error;
pub mod json;
pub mod shapes;

pub use error::CodecError;
pub use json::{from_json, from_json_with, to_json};
pub use shapes::{Circle, Rectangle};
