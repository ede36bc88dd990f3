//! The chainable selector builder.
//!
//! A [`SelectorBuilder`] owns a growing list of [`Fragment`]s. Every append
//! consumes the builder and hands it back only if the new fragment keeps the
//! compound-selector invariants:
//!
//! - element, id and pseudo-element occur at most once
//! - parts appear in the order element, id, class, attribute, pseudo-class,
//!   pseudo-element
//! - an element must be the very first fragment
//!
//! Combinators take part in neither check.

use std::fmt;

use crate::error::SelectorError;
use crate::fragment::{Combinator, Fragment, FragmentKind, Specificity};

/// A selector under construction.
///
/// # Examples
///
/// ```rust
/// use cssb::SelectorBuilder;
///
/// let selector = SelectorBuilder::new()
///     .id("main")?
///     .class("container")?
///     .class("editable")?;
/// assert_eq!(selector.stringify(), "#main.container.editable");
/// # Ok::<(), cssb::SelectorError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectorBuilder {
    fragments: Vec<Fragment>,
}

impl SelectorBuilder {
    /// Create an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn starting_with(kind: FragmentKind, text: impl Into<String>) -> Self {
        let fragment = Fragment::new(kind, text);
        log::trace!("starting selector with {} {:?}", fragment.kind, fragment.text);
        Self {
            fragments: vec![fragment],
        }
    }

    /// Append a type selector. Must be the first fragment.
    pub fn element(self, text: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Element, text.into())
    }

    pub fn id(self, text: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Id, text.into())
    }

    pub fn class(self, text: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Class, text.into())
    }

    /// Append an attribute selector. The text goes between the brackets,
    /// e.g. `href$=".png"`.
    pub fn attribute(self, text: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Attribute, text.into())
    }

    pub fn pseudo_class(self, text: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, text.into())
    }

    pub fn pseudo_element(self, text: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, text.into())
    }

    /// Append a bare combinator.
    ///
    /// The ordering and duplicate checks still look at the whole sequence,
    /// so fragments after the combinator must continue the canonical order.
    pub fn combinator(mut self, combinator: impl Into<Combinator>) -> Self {
        let combinator = combinator.into();
        log::trace!("appending combinator {:?}", combinator.as_str());
        self.fragments
            .push(Fragment::new(FragmentKind::Combinator, combinator.as_str()));
        self
    }

    /// Join two selectors with a combinator into a new selector.
    ///
    /// Both inputs are only read; the result owns copies of their fragments.
    /// Invariants are not re-checked across the two sides.
    pub fn combine(
        left: &SelectorBuilder,
        combinator: impl Into<Combinator>,
        right: &SelectorBuilder,
    ) -> SelectorBuilder {
        let combinator = combinator.into();
        log::trace!(
            "combining {} + {} fragments with {:?}",
            left.len(),
            right.len(),
            combinator.as_str()
        );

        let mut fragments = Vec::with_capacity(left.len() + right.len() + 1);
        fragments.extend(left.fragments.iter().cloned());
        fragments.push(Fragment::new(FragmentKind::Combinator, combinator.as_str()));
        fragments.extend(right.fragments.iter().cloned());
        SelectorBuilder { fragments }
    }

    /// Render the selector as CSS text.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Returns true if any fragment of `kind` is present.
    pub fn contains(&self, kind: FragmentKind) -> bool {
        self.fragments.iter().any(|f| f.kind == kind)
    }

    pub fn specificity(&self) -> Specificity {
        Specificity::of(&self.fragments)
    }

    fn append(mut self, kind: FragmentKind, text: String) -> Result<Self, SelectorError> {
        if let Err(err) = self.check(kind) {
            log::debug!("rejected {kind} {text:?}: {err}");
            return Err(err);
        }
        log::trace!("appending {kind} {text:?}");
        self.fragments.push(Fragment::new(kind, text));
        Ok(self)
    }

    fn check(&self, kind: FragmentKind) -> Result<(), SelectorError> {
        if kind.is_exclusive() && self.contains(kind) {
            return Err(SelectorError::DuplicateFragment { kind });
        }

        if kind == FragmentKind::Element && !self.is_empty() {
            return Err(SelectorError::OrderViolation { kind });
        }

        let Some(rank) = kind.rank() else {
            return Ok(());
        };
        let later_present = self
            .fragments
            .iter()
            .filter_map(|f| f.kind.rank())
            .any(|existing| existing > rank);
        if later_present {
            return Err(SelectorError::OrderViolation { kind });
        }

        Ok(())
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}
