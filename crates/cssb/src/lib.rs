//! # CSSB - CSS Selector Builder
//!
//! A fluent builder for CSS selector strings. Selectors are assembled from
//! typed fragments and rendered to text; nothing is ever parsed.
//!
//! Each compound selector follows the shape
//!
//! ```text
//! element#id.class[attr]:pseudoClass::pseudoElement
//!           \----/\----/\----------/
//!           can occur several times
//! ```
//!
//! and compound selectors are joined with the combinators `' '`, `+`, `~`
//! and `>`.
//!
//! ## Quick Start
//!
//! ```rust
//! use cssb::{combine, element};
//!
//! let link = element("a").attribute(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let rows = combine(
//!     &element("tr").pseudo_class("nth-of-type(even)")?,
//!     ' ',
//!     &element("td").pseudo_class("nth-of-type(even)")?,
//! );
//! let table = combine(&element("table").id("data")?, '~', &rows);
//! let selector = combine(
//!     &element("div").id("main")?.class("container")?.class("draggable")?,
//!     '+',
//!     &table,
//! );
//! assert_eq!(
//!     selector.stringify(),
//!     "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
//! );
//! # Ok::<(), cssb::SelectorError>(())
//! ```
//!
//! ## Rules
//!
//! - Element, id and pseudo-element occur at most once
//!   ([`SelectorError::DuplicateFragment`]).
//! - Parts appear in the order element, id, class, attribute, pseudo-class,
//!   pseudo-element ([`SelectorError::OrderViolation`]).
//! - [`combine`] does not re-check rules across its two sides.
//!
//! ## Modules
//!
//! - [`builder`]: the [`SelectorBuilder`] type
//! - [`facade`]: free functions that start a chain
//! - [`fragment`]: fragment kinds, combinators and specificity
//! - [`error`]: construction errors

pub mod builder;
pub mod error;
pub mod facade;
pub mod fragment;

pub use builder::SelectorBuilder;
pub use error::SelectorError;
pub use facade::{
    attribute, class, combine, element, id, pseudo_class, pseudo_element, stringify,
};
pub use fragment::{Combinator, Fragment, FragmentKind, Specificity};
