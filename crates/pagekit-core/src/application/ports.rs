//! Application ports: the product and factory abstractions.
//!
//! Template families in `pagekit-adapters` implement these traits. A client
//! only ever sees the traits, so swapping one factory for another swaps the
//! whole family at once.
//!
//! ## Variant consistency
//!
//! [`TemplateFactory::Page`] is bound by `PageTemplate<Title = Self::Title>`:
//! a factory cannot compile if its page template embeds a title template
//! from another family.

use crate::domain::{TemplateSet, Variant};

/// Product: the fragment rendering a page title.
pub trait TitleTemplate: Send + Sync {
    /// The fixed title fragment of this variant.
    fn template_string(&self) -> &'static str;
}

/// Product: a full page, composed around a title template.
pub trait PageTemplate: Send + Sync {
    /// Title product this page embeds.
    type Title: TitleTemplate;

    /// The title template this page was built with.
    fn title_template(&self) -> &Self::Title;

    /// The page fragment, with the title fragment embedded verbatim.
    fn template_string(&self) -> String;
}

/// Abstract factory for one family of template products.
pub trait TemplateFactory: Send + Sync {
    type Title: TitleTemplate;
    type Page: PageTemplate<Title = Self::Title>;

    /// Variant every product of this factory belongs to.
    const VARIANT: Variant;

    fn create_title_template(&self) -> Self::Title;

    /// Build a page template around this factory's own title template.
    fn create_page_template(&self) -> Self::Page;
}

/// Object-safe view of a [`TemplateFactory`].
///
/// [`TemplateFactory`] has associated types and cannot be used as a trait
/// object; this trait erases them so a factory can be chosen at runtime.
/// Every `TemplateFactory` implements it through the blanket impl below.
#[cfg_attr(test, mockall::automock)]
pub trait DynTemplateFactory: Send + Sync {
    fn variant(&self) -> Variant;

    fn title_template_string(&self) -> String;

    fn page_template_string(&self) -> String;

    /// Both templates of the family, taken from a single page product.
    fn template_set(&self) -> TemplateSet;
}

impl<F: TemplateFactory> DynTemplateFactory for F {
    fn variant(&self) -> Variant {
        F::VARIANT
    }

    fn title_template_string(&self) -> String {
        self.create_title_template().template_string().to_owned()
    }

    fn page_template_string(&self) -> String {
        self.create_page_template().template_string()
    }

    fn template_set(&self) -> TemplateSet {
        let page = self.create_page_template();
        TemplateSet {
            variant: F::VARIANT,
            title: page.title_template().template_string().to_owned(),
            page: page.template_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainTitle;

    impl TitleTemplate for PlainTitle {
        fn template_string(&self) -> &'static str {
            "<h1>title</h1>"
        }
    }

    struct PlainPage {
        title: PlainTitle,
    }

    impl PageTemplate for PlainPage {
        type Title = PlainTitle;

        fn title_template(&self) -> &PlainTitle {
            &self.title
        }

        fn template_string(&self) -> String {
            format!("<main>{}</main>", self.title.template_string())
        }
    }

    struct PlainFactory;

    impl TemplateFactory for PlainFactory {
        type Title = PlainTitle;
        type Page = PlainPage;

        const VARIANT: Variant = Variant::Twig;

        fn create_title_template(&self) -> PlainTitle {
            PlainTitle
        }

        fn create_page_template(&self) -> PlainPage {
            PlainPage {
                title: self.create_title_template(),
            }
        }
    }

    #[test]
    fn blanket_impl_forwards_to_factory() {
        let factory: Box<dyn DynTemplateFactory> = Box::new(PlainFactory);
        assert_eq!(factory.variant(), Variant::Twig);
        assert_eq!(factory.title_template_string(), "<h1>title</h1>");
        assert_eq!(factory.page_template_string(), "<main><h1>title</h1></main>");
    }

    #[test]
    fn blanket_template_set_comes_from_one_family() {
        let factory: Box<dyn DynTemplateFactory> = Box::new(PlainFactory);
        let set = factory.template_set();
        assert_eq!(set.variant, Variant::Twig);
        assert_eq!(set.title, factory.title_template_string());
        assert_eq!(set.page, factory.page_template_string());
        assert!(set.page.contains(&set.title));
    }

    #[test]
    fn page_embeds_title_from_same_factory() {
        let factory = PlainFactory;
        let page = factory.create_page_template();
        assert_eq!(
            page.title_template().template_string(),
            factory.create_title_template().template_string()
        );
    }
}
