//! Object construction exercises: a CSS selector builder, value objects with
//! computed properties, and JSON round-tripping.
//!
//! The work lives in two crates, re-exported here:
//!
//! - [`cssb`]: fluent builder for CSS selector strings
//! - [`objects`]: [`Rectangle`], [`Circle`] and the JSON codec
//!
//! ```
//! use objects_tasks::{Rectangle, Result, cssb, from_json, to_json};
//!
//! fn run() -> Result<String> {
//!     let selector = cssb::id("main").class("container")?.class("editable")?;
//!     let rect: Rectangle = from_json(&to_json(&Rectangle::new(10.0, 20.0))?)?;
//!     Ok(format!("{selector} {}", rect.area()))
//! }
//!
//! assert_eq!(run().unwrap(), "#main.container.editable 200");
//! ```

pub mod error;
mod log_init;

pub use error::{Error, Result};
pub use log_init::init_logger;

pub use cssb::{self, Combinator, FragmentKind, SelectorBuilder, SelectorError};
pub use objects::{self, Circle, CodecError, Rectangle, from_json, from_json_with, to_json};

// Re-export the log crate so users can use objects_tasks::log::info!, etc.
pub use log;
