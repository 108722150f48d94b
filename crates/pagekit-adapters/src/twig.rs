//! Twig family: `{{ var }}` fragments.

use pagekit_core::{
    application::ports::{PageTemplate, TemplateFactory, TitleTemplate},
    domain::Variant,
};

/// Factory for Twig templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwigTemplateFactory;

impl TemplateFactory for TwigTemplateFactory {
    type Title = TwigTitleTemplate;
    type Page = TwigPageTemplate;

    const VARIANT: Variant = Variant::Twig;

    fn create_title_template(&self) -> TwigTitleTemplate {
        TwigTitleTemplate
    }

    fn create_page_template(&self) -> TwigPageTemplate {
        TwigPageTemplate::new(self.create_title_template())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwigTitleTemplate;

impl TitleTemplate for TwigTitleTemplate {
    fn template_string(&self) -> &'static str {
        "<h1>{{ title }}</h1>"
    }
}

/// Twig page layout wrapped around a Twig title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwigPageTemplate {
    title: TwigTitleTemplate,
}

impl TwigPageTemplate {
    pub fn new(title: TwigTitleTemplate) -> Self {
        Self { title }
    }
}

impl PageTemplate for TwigPageTemplate {
    type Title = TwigTitleTemplate;

    fn title_template(&self) -> &TwigTitleTemplate {
        &self.title
    }

    fn template_string(&self) -> String {
        let rendered_title = self.title.template_string();
        format!(
            r#"<div class="page">{rendered_title}<article class="content">{{{{ content }}}}</article></div>"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_uses_twig_syntax() {
        assert_eq!(
            TwigTemplateFactory.create_title_template().template_string(),
            "<h1>{{ title }}</h1>"
        );
    }

    #[test]
    fn page_escapes_braces_correctly() {
        let page = TwigTemplateFactory.create_page_template().template_string();
        assert_eq!(
            page,
            r#"<div class="page"><h1>{{ title }}</h1><article class="content">{{ content }}</article></div>"#
        );
    }
}
