//! Error types for selector construction.
//!
//! Both variants are raised by the builder method that breaks an invariant.
//! Rendering never fails.

use thiserror::Error;

use crate::fragment::FragmentKind;

/// Errors that can occur while appending fragments to a selector.
///
/// # Examples
///
/// ```rust
/// use cssb::{FragmentKind, SelectorError};
///
/// let result = cssb::element("div").element("span");
/// assert_eq!(
///     result.unwrap_err(),
///     SelectorError::DuplicateFragment { kind: FragmentKind::Element }
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// An element, id or pseudo-element was appended a second time.
    #[error("{kind} should not occur more than one time inside the selector")]
    DuplicateFragment { kind: FragmentKind },

    /// A fragment was appended after a fragment of a later kind.
    ///
    /// Parts must be arranged as: element, id, class, attribute,
    /// pseudo-class, pseudo-element.
    #[error(
        "{kind} is out of order: selector parts should be arranged as element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation { kind: FragmentKind },
}

impl SelectorError {
    /// The fragment kind the rejected call tried to append.
    pub fn kind(&self) -> FragmentKind {
        match self {
            SelectorError::DuplicateFragment { kind } | SelectorError::OrderViolation { kind } => {
                *kind
            }
        }
    }
}
