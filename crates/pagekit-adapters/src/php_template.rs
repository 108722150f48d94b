//! PHPTemplate family: `<?= $var; ?>` fragments.

use pagekit_core::{
    application::ports::{PageTemplate, TemplateFactory, TitleTemplate},
    domain::Variant,
};

/// Factory for PHPTemplate templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpTemplateFactory;

impl TemplateFactory for PhpTemplateFactory {
    type Title = PhpTemplateTitleTemplate;
    type Page = PhpTemplatePageTemplate;

    const VARIANT: Variant = Variant::PhpTemplate;

    fn create_title_template(&self) -> PhpTemplateTitleTemplate {
        PhpTemplateTitleTemplate
    }

    fn create_page_template(&self) -> PhpTemplatePageTemplate {
        PhpTemplatePageTemplate::new(self.create_title_template())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhpTemplateTitleTemplate;

impl TitleTemplate for PhpTemplateTitleTemplate {
    fn template_string(&self) -> &'static str {
        "<h1><?= $title; ?></h1>"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhpTemplatePageTemplate {
    title: PhpTemplateTitleTemplate,
}

impl PhpTemplatePageTemplate {
    pub fn new(title: PhpTemplateTitleTemplate) -> Self {
        Self { title }
    }
}

impl PageTemplate for PhpTemplatePageTemplate {
    type Title = PhpTemplateTitleTemplate;

    fn title_template(&self) -> &PhpTemplateTitleTemplate {
        &self.title
    }

    fn template_string(&self) -> String {
        let rendered_title = self.title.template_string();
        format!(
            r#"<div class="page">{rendered_title}<article class="content"><?= $content; ?></article></div>"#
        )
    }
}
