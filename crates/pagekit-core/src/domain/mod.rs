//! Core domain layer for pagekit.
//!
//! Pure value types with no I/O: which templating technology a family belongs
//! to ([`Variant`]), which product of a family is meant ([`TemplateKind`]) and
//! a serialisable snapshot of one family ([`TemplateSet`]).

pub mod error;
pub mod value_objects;

pub use error::DomainError;
pub use value_objects::{TemplateKind, TemplateSet, Variant};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn variant_parses_correctly() {
        assert_eq!(Variant::from_str("twig").unwrap(), Variant::Twig);
        assert_eq!(Variant::from_str("TWIG").unwrap(), Variant::Twig);
        assert_eq!(
            Variant::from_str("phptemplate").unwrap(),
            Variant::PhpTemplate
        );
        assert_eq!(Variant::from_str("php").unwrap(), Variant::PhpTemplate);
        assert!(Variant::from_str("jinja").is_err());
    }

    #[test]
    fn variant_display_is_canonical() {
        for variant in Variant::ALL {
            assert_eq!(
                Variant::from_str(&variant.to_string()).unwrap(),
                variant,
                "{variant} should parse back from its display name"
            );
        }
    }

    #[test]
    fn template_kind_parses_correctly() {
        assert_eq!(TemplateKind::from_str("title").unwrap(), TemplateKind::Title);
        assert_eq!(TemplateKind::from_str("Page").unwrap(), TemplateKind::Page);
        assert!(matches!(
            TemplateKind::from_str("footer"),
            Err(DomainError::UnknownTemplateKind { .. })
        ));
    }

    #[test]
    fn unknown_variant_error_keeps_input() {
        let err = Variant::from_str("Mustache").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownVariant {
                input: "Mustache".into()
            }
        );
    }
}
