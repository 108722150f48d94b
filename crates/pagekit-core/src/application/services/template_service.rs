//! Template Service - client code for one template family.
//!
//! The service is handed a factory and never learns which concrete family it
//! drives; every string it returns comes from that single factory.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::ports::DynTemplateFactory,
    domain::{TemplateKind, TemplateSet, Variant},
};

/// Service for template operations.
pub struct TemplateService {
    factory: Arc<dyn DynTemplateFactory>,
}

impl TemplateService {
    /// Create a new template service around one factory.
    pub fn new(factory: Arc<dyn DynTemplateFactory>) -> Self {
        Self { factory }
    }

    /// Variant of the family this service renders.
    pub fn variant(&self) -> Variant {
        self.factory.variant()
    }

    #[instrument(skip_all, fields(variant = %self.factory.variant()))]
    pub fn render_title(&self) -> String {
        debug!("creating title template");
        self.factory.title_template_string()
    }

    #[instrument(skip_all, fields(variant = %self.factory.variant()))]
    pub fn render_page(&self) -> String {
        debug!("creating page template");
        self.factory.page_template_string()
    }

    /// Template string for one product of the family.
    pub fn render(&self, kind: TemplateKind) -> String {
        match kind {
            TemplateKind::Title => self.render_title(),
            TemplateKind::Page => self.render_page(),
        }
    }

    /// Snapshot of the whole family.
    #[instrument(skip_all, fields(variant = %self.factory.variant()))]
    pub fn template_set(&self) -> TemplateSet {
        debug!("creating template set");
        self.factory.template_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockDynTemplateFactory;

    fn mock_factory() -> MockDynTemplateFactory {
        let mut factory = MockDynTemplateFactory::new();
        factory.expect_variant().return_const(Variant::PhpTemplate);
        factory
            .expect_title_template_string()
            .returning(|| "<h1>t</h1>".to_string());
        factory
            .expect_page_template_string()
            .returning(|| "<div><h1>t</h1></div>".to_string());
        factory.expect_template_set().returning(|| TemplateSet {
            variant: Variant::PhpTemplate,
            title: "<h1>t</h1>".to_string(),
            page: "<div><h1>t</h1></div>".to_string(),
        });
        factory
    }

    #[test]
    fn render_dispatches_by_kind() {
        let service = TemplateService::new(Arc::new(mock_factory()));
        assert_eq!(service.render(TemplateKind::Title), "<h1>t</h1>");
        assert_eq!(service.render(TemplateKind::Page), "<div><h1>t</h1></div>");
    }

    #[test]
    fn template_set_collects_one_family() {
        let service = TemplateService::new(Arc::new(mock_factory()));
        let set = service.template_set();
        assert_eq!(set.variant, Variant::PhpTemplate);
        assert_eq!(set.get(TemplateKind::Title), "<h1>t</h1>");
        assert_eq!(set.get(TemplateKind::Page), "<div><h1>t</h1></div>");
    }

    #[test]
    fn template_set_is_one_factory_call() {
        let mut factory = MockDynTemplateFactory::new();
        factory.expect_variant().return_const(Variant::Twig);
        factory.expect_title_template_string().never();
        factory.expect_page_template_string().never();
        factory
            .expect_template_set()
            .times(1)
            .returning(|| TemplateSet {
                variant: Variant::Twig,
                title: "t".to_string(),
                page: "p(t)".to_string(),
            });

        let service = TemplateService::new(Arc::new(factory));
        assert_eq!(service.template_set().page, "p(t)");
    }

    #[test]
    fn page_is_requested_once_per_render() {
        let mut factory = MockDynTemplateFactory::new();
        factory.expect_variant().return_const(Variant::Twig);
        factory
            .expect_page_template_string()
            .times(1)
            .returning(|| "page".to_string());

        let service = TemplateService::new(Arc::new(factory));
        assert_eq!(service.render_page(), "page");
    }

    #[test]
    fn template_set_serialises_with_lowercase_variant() {
        let service = TemplateService::new(Arc::new(mock_factory()));
        let json = serde_json::to_value(service.template_set()).unwrap();
        assert_eq!(json["variant"], "phptemplate");
        assert_eq!(json["title"], "<h1>t</h1>");
    }
}
