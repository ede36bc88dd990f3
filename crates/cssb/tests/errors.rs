//! Integration tests for rejected fragments.
//!
//! - Duplicates: element, id and pseudo-element occur once
//! - Ordering: element, id, class, attribute, pseudo-class, pseudo-element

use cssb::{
    FragmentKind, SelectorBuilder, SelectorError, attribute, class, element, id, pseudo_class,
    pseudo_element,
};

type Append = fn(SelectorBuilder) -> Result<SelectorBuilder, SelectorError>;

fn duplicate(kind: FragmentKind) -> SelectorError {
    SelectorError::DuplicateFragment { kind }
}

fn out_of_order(kind: FragmentKind) -> SelectorError {
    SelectorError::OrderViolation { kind }
}

// ============================================================================
// DUPLICATES
// ============================================================================

#[test]
fn test_second_element_is_duplicate() {
    let err = element("div").element("span").unwrap_err();
    assert_eq!(err, duplicate(FragmentKind::Element));
}

#[test]
fn test_second_id_is_duplicate() {
    let err = id("a").id("b").unwrap_err();
    assert_eq!(err, duplicate(FragmentKind::Id));
}

#[test]
fn test_second_pseudo_element_is_duplicate() {
    let err = pseudo_element("before").pseudo_element("after").unwrap_err();
    assert_eq!(err, duplicate(FragmentKind::PseudoElement));
}

#[test]
fn test_duplicate_far_down_the_chain() {
    let err = element("a")
        .id("x")
        .and_then(|s| s.class("y"))
        .and_then(|s| s.pseudo_class("hover"))
        .and_then(|s| s.id("z"))
        .unwrap_err();
    assert_eq!(err, duplicate(FragmentKind::Id));
}

// ============================================================================
// ORDERING
// ============================================================================

#[test]
fn test_class_then_id() {
    let err = class("x").id("y").unwrap_err();
    assert_eq!(err, out_of_order(FragmentKind::Id));
}

#[test]
fn test_attribute_then_class() {
    let err = attribute("disabled").class("x").unwrap_err();
    assert_eq!(err, out_of_order(FragmentKind::Class));
}

#[test]
fn test_pseudo_class_then_attribute() {
    let err = pseudo_class("hover").attribute("href").unwrap_err();
    assert_eq!(err, out_of_order(FragmentKind::Attribute));
}

#[test]
fn test_pseudo_element_then_pseudo_class() {
    let err = pseudo_element("after").pseudo_class("hover").unwrap_err();
    assert_eq!(err, out_of_order(FragmentKind::PseudoClass));
}

#[test]
fn test_element_must_come_first() {
    let err = id("main").element("div").unwrap_err();
    assert_eq!(err, out_of_order(FragmentKind::Element));

    let err = class("x").element("div").unwrap_err();
    assert_eq!(err, out_of_order(FragmentKind::Element));
}

#[test]
fn test_every_earlier_kind_is_rejected() {
    // Each kind is rejected after every strictly later kind.
    let appenders: [(FragmentKind, Append); 6] = [
        (FragmentKind::Element, |s| s.element("e")),
        (FragmentKind::Id, |s| s.id("i")),
        (FragmentKind::Class, |s| s.class("c")),
        (FragmentKind::Attribute, |s| s.attribute("a")),
        (FragmentKind::PseudoClass, |s| s.pseudo_class("p")),
        (FragmentKind::PseudoElement, |s| s.pseudo_element("pe")),
    ];

    for (later_idx, (_, add_later)) in appenders.iter().enumerate() {
        for (kind, add_earlier) in &appenders[..later_idx] {
            let base = add_later(SelectorBuilder::new()).unwrap();
            let err = add_earlier(base).unwrap_err();
            assert_eq!(err, out_of_order(*kind), "{kind} after index {later_idx}");
        }
    }
}

// ============================================================================
// ERROR DETAILS
// ============================================================================

#[test]
fn test_error_kind_accessor() {
    assert_eq!(duplicate(FragmentKind::Id).kind(), FragmentKind::Id);
    assert_eq!(out_of_order(FragmentKind::Class).kind(), FragmentKind::Class);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        duplicate(FragmentKind::PseudoElement).to_string(),
        "pseudo-element should not occur more than one time inside the selector"
    );
    assert!(
        out_of_order(FragmentKind::Id)
            .to_string()
            .starts_with("id is out of order")
    );
}

#[test]
fn test_repeatable_kinds_are_never_duplicates() {
    let selector = element("a")
        .class("x")
        .and_then(|s| s.class("x"))
        .and_then(|s| s.attribute("y"))
        .and_then(|s| s.attribute("y"))
        .and_then(|s| s.pseudo_class("z"))
        .and_then(|s| s.pseudo_class("z"));
    assert!(selector.is_ok());
}
