use crate::html::{esc, escape_html, heading, objects, safe_url, section_open, text};
use crate::{BlockContext, BlockError, BlockRenderer};
use serde_json::{Value, json};

pub struct FeaturesBlock;
pub struct FaqBlock;
pub struct CtaBlock;
pub struct StatsBlock;
pub struct FooterBlock;

pub(super) fn features_default() -> Value {
    json!({
        "title": "Everything you need",
        "subtitle": "",
        "items": [
            { "icon": "zap", "title": "Fast", "description": "Pages load in under a second." },
            { "icon": "layout", "title": "Flexible", "description": "Mix and match dozens of blocks." },
            { "icon": "inbox", "title": "Leads", "description": "Every form submission lands in your dashboard." }
        ]
    })
}

pub(super) fn faq_default() -> Value {
    json!({
        "title": "Frequently asked questions",
        "items": [
            { "question": "Can I use my own domain?", "answer": "Yes, on any paid plan." },
            { "question": "Is there a free trial?", "answer": "The Starter plan is free forever." }
        ]
    })
}

pub(super) fn cta_default() -> Value {
    json!({
        "headline": "Ready to launch?",
        "description": "Join thousands of teams building pages that convert.",
        "button_text": "Start now",
        "button_url": "#signup"
    })
}

pub(super) fn stats_default() -> Value {
    json!({
        "title": "",
        "items": [
            { "value": "10k+", "label": "Pages published" },
            { "value": "2.4M", "label": "Leads captured" },
            { "value": "99.9%", "label": "Uptime" }
        ]
    })
}

pub(super) fn footer_default() -> Value {
    json!({
        "company": "Your Company",
        "tagline": "",
        "links": [
            { "label": "Privacy", "url": "/privacy" },
            { "label": "Terms", "url": "/terms" }
        ],
        "copyright": ""
    })
}

impl BlockRenderer for FeaturesBlock {
    fn render(&self, ctx: &BlockContext<'_>) -> Result<String, BlockError> {
        let c = ctx.object()?;
        let mut html = section_open("features");
        html.push_str(&heading(c, "title"));
        if !text(c, "subtitle").is_empty() {
            html.push_str(&format!("<p>{}</p>", esc(c, "subtitle")));
        }
        html.push_str(r#"<div class="pc-features">"#);
        for item in objects(c, "items") {
            html.push_str(&format!(
                r#"<div class="pc-feature" data-icon="{}"><h3>{}</h3><p>{}</p></div>"#,
                esc(item, "icon"),
                esc(item, "title"),
                esc(item, "description"),
            ));
        }
        html.push_str("</div></section>");
        Ok(html)
    }
}

impl BlockRenderer for FaqBlock {
    fn render(&self, ctx: &BlockContext<'_>) -> Result<String, BlockError> {
        let c = ctx.object()?;
        let mut html = section_open("faq");
        html.push_str(&heading(c, "title"));
        for item in objects(c, "items") {
            html.push_str(&format!(
                "<details><summary>{}</summary><p>{}</p></details>",
                esc(item, "question"),
                esc(item, "answer"),
            ));
        }
        html.push_str("</section>");
        Ok(html)
    }
}

impl BlockRenderer for CtaBlock {
    fn render(&self, ctx: &BlockContext<'_>) -> Result<String, BlockError> {
        let c = ctx.object()?;
        let mut html = section_open("cta");
        html.push_str(&format!("<h2>{}</h2>", esc(c, "headline")));
        if !text(c, "description").is_empty() {
            html.push_str(&format!("<p>{}</p>", esc(c, "description")));
        }
        if !text(c, "button_text").is_empty() {
            html.push_str(&format!(
                r#"<a class="pc-button" href="{}">{}</a>"#,
                escape_html(safe_url(text(c, "button_url"))),
                esc(c, "button_text"),
            ));
        }
        html.push_str("</section>");
        Ok(html)
    }
}

impl BlockRenderer for StatsBlock {
    fn render(&self, ctx: &BlockContext<'_>) -> Result<String, BlockError> {
        let c = ctx.object()?;
        let mut html = section_open("stats");
        html.push_str(&heading(c, "title"));
        html.push_str("<dl>");
        for item in objects(c, "items") {
            html.push_str(&format!(
                "<div><dt>{}</dt><dd>{}</dd></div>",
                esc(item, "label"),
                esc(item, "value"),
            ));
        }
        html.push_str("</dl></section>");
        Ok(html)
    }
}

impl BlockRenderer for FooterBlock {
    fn render(&self, ctx: &BlockContext<'_>) -> Result<String, BlockError> {
        let c = ctx.object()?;
        let mut html = String::from(r#"<footer class="pc-block pc-footer">"#);
        html.push_str(&format!("<strong>{}</strong>", esc(c, "company")));
        if !text(c, "tagline").is_empty() {
            html.push_str(&format!("<p>{}</p>", esc(c, "tagline")));
        }
        html.push_str("<nav>");
        for link in objects(c, "links") {
            html.push_str(&format!(
                r#"<a href="{}">{}</a>"#,
                escape_html(safe_url(text(link, "url"))),
                esc(link, "label"),
            ));
        }
        html.push_str("</nav>");
        let copyright = match text(c, "copyright") {
            "" => format!("© {}", esc(c, "company")),
            line => escape_html(line),
        };
        html.push_str(&format!("<small>{copyright}</small></footer>"));
        Ok(html)
    }
}
