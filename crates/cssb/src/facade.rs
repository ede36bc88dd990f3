//! Free functions that start a fresh selector chain.
//!
//! A single fragment always satisfies the selector invariants, so these
//! cannot fail. Continue the chain with the fallible [`SelectorBuilder`]
//! methods.

use crate::builder::SelectorBuilder;
use crate::fragment::{Combinator, FragmentKind};

pub fn element(text: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::Element, text)
}

pub fn id(text: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::Id, text)
}

pub fn class(text: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::Class, text)
}

pub fn attribute(text: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::Attribute, text)
}

pub fn pseudo_class(text: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::PseudoClass, text)
}

pub fn pseudo_element(text: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::PseudoElement, text)
}

/// See [`SelectorBuilder::combine`].
pub fn combine(
    left: &SelectorBuilder,
    combinator: impl Into<Combinator>,
    right: &SelectorBuilder,
) -> SelectorBuilder {
    SelectorBuilder::combine(left, combinator, right)
}

pub fn stringify(builder: &SelectorBuilder) -> String {
    builder.stringify()
}
