use crate::html::{esc, escape_html, safe_url, section_open, text};
use crate::{BlockContext, BlockError, BlockRenderer};
use serde_json::json;

pub struct HeroBlock;

pub(super) fn default_content() -> serde_json::Value {
    json!({
        "headline": "Build something people want",
        "subheadline": "Launch a beautiful landing page in minutes, no code required.",
        "cta_text": "Get started",
        "cta_url": "#signup",
        "image_url": "",
        "alignment": "center"
    })
}

impl BlockRenderer for HeroBlock {
    fn render(&self, ctx: &BlockContext<'_>) -> Result<String, BlockError> {
        let c = ctx.object()?;
        let align = match text(c, "alignment") {
            "left" => "left",
            _ => "center",
        };

        let mut html = section_open("hero");
        html.push_str(&format!(r#"<div class="pc-hero-inner pc-align-{align}">"#));
        html.push_str(&format!("<h1>{}</h1>", esc(c, "headline")));
        if !text(c, "subheadline").is_empty() {
            html.push_str(&format!("<p>{}</p>", esc(c, "subheadline")));
        }
        if !text(c, "cta_text").is_empty() {
            html.push_str(&format!(
                r#"<a class="pc-button" href="{}">{}</a>"#,
                escape_html(safe_url(text(c, "cta_url"))),
                esc(c, "cta_text"),
            ));
        }
        html.push_str("</div>");
        if !text(c, "image_url").is_empty() {
            html.push_str(&format!(
                r#"<img class="pc-hero-image" src="{}" alt="{}">"#,
                escape_html(safe_url(text(c, "image_url"))),
                esc(c, "headline"),
            ));
        }
        html.push_str("</section>");
        Ok(html)
    }
}
