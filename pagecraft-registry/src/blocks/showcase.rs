use crate::html::{esc, escape_html, heading, objects, safe_url, section_open, text};
use crate::{BlockContext, BlockError, BlockRenderer, RenderMode};
use serde_json::{Value, json};

pub struct TestimonialsBlock;
pub struct GalleryBlock;

pub(super) fn testimonials_default() -> Value {
    json!({
        "title": "Loved by teams everywhere",
        "items": [
            {
                "quote": "We shipped our launch page in an afternoon.",
                "author": "Jamie Rivera",
                "role": "Head of Growth, Northwind",
                "avatar_url": ""
            },
            {
                "quote": "Our sign-ups doubled the week we switched.",
                "author": "Priya Natarajan",
                "role": "Founder, Lumen Labs",
                "avatar_url": ""
            }
        ]
    })
}

pub(super) fn gallery_default() -> Value {
    json!({
        "title": "Gallery",
        "columns": 3,
        "images": [
            { "url": "/static/placeholder-1.jpg", "alt": "Product screenshot", "caption": "" },
            { "url": "/static/placeholder-2.jpg", "alt": "Team at work", "caption": "" },
            { "url": "/static/placeholder-3.jpg", "alt": "Happy customer", "caption": "" }
        ]
    })
}

impl BlockRenderer for TestimonialsBlock {
    fn render(&self, ctx: &BlockContext<'_>) -> Result<String, BlockError> {
        let c = ctx.object()?;
        let mut html = section_open("testimonials");
        html.push_str(&heading(c, "title"));
        html.push_str(r#"<div class="pc-testimonials">"#);
        for item in objects(c, "items") {
            html.push_str("<figure>");
            if !text(item, "avatar_url").is_empty() {
                html.push_str(&format!(
                    r#"<img class="pc-avatar" src="{}" alt="{}">"#,
                    escape_html(safe_url(text(item, "avatar_url"))),
                    esc(item, "author"),
                ));
            }
            html.push_str(&format!("<blockquote>{}</blockquote>", esc(item, "quote")));
            html.push_str(&format!(
                "<figcaption><strong>{}</strong> <span>{}</span></figcaption>",
                esc(item, "author"),
                esc(item, "role"),
            ));
            html.push_str("</figure>");
        }
        html.push_str("</div></section>");
        Ok(html)
    }
}

impl BlockRenderer for GalleryBlock {
    fn render(&self, ctx: &BlockContext<'_>) -> Result<String, BlockError> {
        let c = ctx.object()?;
        let columns = c
            .get("columns")
            .and_then(Value::as_u64)
            .unwrap_or(3)
            .clamp(1, 6);
        // The builder canvas loads images eagerly so edits show immediately.
        let loading = if ctx.mode == RenderMode::Edit { "eager" } else { "lazy" };

        let mut html = section_open("gallery");
        html.push_str(&heading(c, "title"));
        html.push_str(&format!(r#"<div class="pc-gallery pc-cols-{columns}">"#));
        for image in objects(c, "images") {
            html.push_str("<figure>");
            html.push_str(&format!(
                r#"<img src="{}" alt="{}" loading="{loading}">"#,
                escape_html(safe_url(text(image, "url"))),
                esc(image, "alt"),
            ));
            if !text(image, "caption").is_empty() {
                html.push_str(&format!("<figcaption>{}</figcaption>", esc(image, "caption")));
            }
            html.push_str("</figure>");
        }
        html.push_str("</div></section>");
        Ok(html)
    }
}
