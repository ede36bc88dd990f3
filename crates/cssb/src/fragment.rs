//! Selector fragments and the combinators that join them.

use std::fmt;

/// The category of a single selector fragment.
///
/// The six simple-selector kinds are declared in canonical order, so the
/// derived `Ord` matches the order they must appear in a compound selector.
/// `Combinator` sits outside that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FragmentKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
    Combinator,
}

impl FragmentKind {
    /// Position in the canonical ordering, or `None` for combinators.
    pub fn rank(self) -> Option<u8> {
        match self {
            FragmentKind::Element => Some(0),
            FragmentKind::Id => Some(1),
            FragmentKind::Class => Some(2),
            FragmentKind::Attribute => Some(3),
            FragmentKind::PseudoClass => Some(4),
            FragmentKind::PseudoElement => Some(5),
            FragmentKind::Combinator => None,
        }
    }

    /// Kinds that may occur at most once per selector.
    pub fn is_exclusive(self) -> bool {
        matches!(
            self,
            FragmentKind::Element | FragmentKind::Id | FragmentKind::PseudoElement
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            FragmentKind::Element => "element",
            FragmentKind::Id => "id",
            FragmentKind::Class => "class",
            FragmentKind::Attribute => "attribute",
            FragmentKind::PseudoClass => "pseudo-class",
            FragmentKind::PseudoElement => "pseudo-element",
            FragmentKind::Combinator => "combinator",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One piece of a selector: its kind plus the caller's raw text.
///
/// The text is stored verbatim. Symbol prefixes (`#`, `.`, `[...]`, `:`,
/// `::`) are only added when the fragment is rendered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = &self.text;
        match self.kind {
            FragmentKind::Element => write!(f, "{text}"),
            FragmentKind::Id => write!(f, "#{text}"),
            FragmentKind::Class => write!(f, ".{text}"),
            FragmentKind::Attribute => write!(f, "[{text}]"),
            FragmentKind::PseudoClass => write!(f, ":{text}"),
            FragmentKind::PseudoElement => write!(f, "::{text}"),
            FragmentKind::Combinator => write!(f, " {text} "),
        }
    }
}

/// A combinator joining two selectors.
///
/// Any string is accepted; the four CSS symbols get named variants.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    Descendant,      // ' '
    Child,           // >
    AdjacentSibling, // +
    GeneralSibling,  // ~
    Other(String),
}

impl Combinator {
    pub fn as_str(&self) -> &str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
            Combinator::Other(s) => s,
        }
    }
}

impl From<&str> for Combinator {
    fn from(s: &str) -> Self {
        match s {
            " " => Combinator::Descendant,
            ">" => Combinator::Child,
            "+" => Combinator::AdjacentSibling,
            "~" => Combinator::GeneralSibling,
            other => Combinator::Other(other.to_string()),
        }
    }
}

impl From<String> for Combinator {
    fn from(s: String) -> Self {
        Combinator::from(s.as_str())
    }
}

impl From<char> for Combinator {
    fn from(c: char) -> Self {
        Combinator::from(c.to_string())
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CSS specificity of a built selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

impl Specificity {
    pub fn of<'a>(fragments: impl IntoIterator<Item = &'a Fragment>) -> Self {
        let mut spec = Specificity::default();
        for fragment in fragments {
            match fragment.kind {
                FragmentKind::Id => spec.ids += 1,
                // Attributes weigh the same as classes and pseudo-classes
                FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                    spec.classes += 1;
                }
                FragmentKind::Element | FragmentKind::PseudoElement => spec.types += 1,
                FragmentKind::Combinator => {}
            }
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_follows_declaration_order() {
        let kinds = [
            FragmentKind::Element,
            FragmentKind::Id,
            FragmentKind::Class,
            FragmentKind::Attribute,
            FragmentKind::PseudoClass,
            FragmentKind::PseudoElement,
        ];
        for pair in kinds.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(FragmentKind::Combinator.rank(), None);
    }

    #[test]
    fn exclusive_kinds() {
        assert!(FragmentKind::Element.is_exclusive());
        assert!(FragmentKind::Id.is_exclusive());
        assert!(FragmentKind::PseudoElement.is_exclusive());
        assert!(!FragmentKind::Class.is_exclusive());
        assert!(!FragmentKind::Attribute.is_exclusive());
        assert!(!FragmentKind::PseudoClass.is_exclusive());
        assert!(!FragmentKind::Combinator.is_exclusive());
    }

    #[test]
    fn fragment_prefixes() {
        assert_eq!(Fragment::new(FragmentKind::Element, "a").to_string(), "a");
        assert_eq!(Fragment::new(FragmentKind::Id, "main").to_string(), "#main");
        assert_eq!(Fragment::new(FragmentKind::Class, "box").to_string(), ".box");
        assert_eq!(
            Fragment::new(FragmentKind::Attribute, "href").to_string(),
            "[href]"
        );
        assert_eq!(
            Fragment::new(FragmentKind::PseudoClass, "focus").to_string(),
            ":focus"
        );
        assert_eq!(
            Fragment::new(FragmentKind::PseudoElement, "after").to_string(),
            "::after"
        );
        assert_eq!(Fragment::new(FragmentKind::Combinator, ">").to_string(), " > ");
    }

    #[test]
    fn combinator_from_symbols() {
        assert_eq!(Combinator::from(" "), Combinator::Descendant);
        assert_eq!(Combinator::from(">"), Combinator::Child);
        assert_eq!(Combinator::from('+'), Combinator::AdjacentSibling);
        assert_eq!(Combinator::from("~".to_string()), Combinator::GeneralSibling);
        assert_eq!(Combinator::from("||"), Combinator::Other("||".to_string()));
        assert_eq!(Combinator::Other("||".to_string()).as_str(), "||");
    }

    #[test]
    fn specificity_counts() {
        let fragments = [
            Fragment::new(FragmentKind::Element, "a"),
            Fragment::new(FragmentKind::Id, "x"),
            Fragment::new(FragmentKind::Class, "c"),
            Fragment::new(FragmentKind::Attribute, "href"),
            Fragment::new(FragmentKind::Combinator, ">"),
            Fragment::new(FragmentKind::PseudoClass, "hover"),
            Fragment::new(FragmentKind::PseudoElement, "before"),
        ];
        assert_eq!(
            Specificity::of(&fragments),
            Specificity {
                ids: 1,
                classes: 3,
                types: 2,
            }
        );
    }

    #[test]
    fn specificity_orders_ids_first() {
        let one_id = Specificity {
            ids: 1,
            classes: 0,
            types: 0,
        };
        let many_classes = Specificity {
            ids: 0,
            classes: 10,
            types: 10,
        };
        assert!(one_id > many_classes);
    }
}
