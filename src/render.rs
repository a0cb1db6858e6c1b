//! HTML rendering with tera. Templates are compiled into the binary.

use crate::error::HubError;
use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

pub const LISTING_TEMPLATE: &str = "portfolios.html";
pub const FORM_TEMPLATE: &str = "form.html";
pub const DETAIL_TEMPLATE: &str = "portfolio.html";

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../templates/base.html")),
    (LISTING_TEMPLATE, include_str!("../templates/portfolios.html")),
    (FORM_TEMPLATE, include_str!("../templates/form.html")),
    (DETAIL_TEMPLATE, include_str!("../templates/portfolio.html")),
];

pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, HubError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    pub fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<Html<String>, HubError> {
        let ctx = Context::from_serialize(data)?;
        Ok(Html(self.tera.render(template, &ctx)?))
    }

    pub fn render_empty(&self, template: &str) -> Result<Html<String>, HubError> {
        Ok(Html(self.tera.render(template, &Context::new())?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::github_api::Project;
    use crate::types::views::{DetailPage, ListingPage, PortfolioCard, SkillBadge};
    use std::collections::BTreeMap;

    #[test]
    fn listing_escapes_user_text() {
        let renderer = Renderer::new().unwrap();
        let page = ListingPage {
            portfolios: vec![PortfolioCard {
                public_id: "abc".into(),
                name: "<script>alert(1)</script>".into(),
                avatar: String::new(),
                bio: "bio".into(),
                skills: vec![SkillBadge {
                    name: "Python".into(),
                    icon: Some("🐍".into()),
                }],
            }],
            tool_icons: BTreeMap::new(),
            current_skills: "python".into(),
        };
        let Html(html) = renderer.render(LISTING_TEMPLATE, &page).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("/portfolio/abc"));
        assert!(html.contains("🐍"));
    }

    #[test]
    fn detail_lists_projects() {
        let renderer = Renderer::new().unwrap();
        let page = DetailPage {
            name: "Ada".into(),
            bio: "bio".into(),
            github: "ada".into(),
            telegram: String::new(),
            avatar: String::new(),
            skills: vec![],
            projects: vec![Project {
                title: "engine".into(),
                description: "analytical".into(),
                link: "https://github.com/ada/engine".into(),
            }],
            tool_icons: BTreeMap::new(),
        };
        let Html(html) = renderer.render(DETAIL_TEMPLATE, &page).unwrap();
        // tera escapes `/` inside interpolated values
        assert!(html.contains("github.com&#x2F;ada&#x2F;engine"));
        assert!(html.contains("analytical"));
    }

    #[test]
    fn form_renders_without_context() {
        let renderer = Renderer::new().unwrap();
        let Html(html) = renderer.render_empty(FORM_TEMPLATE).unwrap();
        assert!(html.contains(r#"action="/generate""#));
        assert!(html.contains(r#"name="avatar""#));
    }
}
