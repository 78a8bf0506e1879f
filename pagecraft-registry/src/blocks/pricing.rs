use crate::html::{esc, escape_html, flag, heading, items, objects, safe_url, section_open, text};
use crate::{BlockContext, BlockError, BlockRenderer};
use serde_json::{Value, json};

pub struct PricingBlock;

pub(super) fn default_content() -> Value {
    json!({
        "title": "Simple, transparent pricing",
        "subtitle": "Start free, upgrade when you grow.",
        "currency": "$",
        "plans": [
            {
                "name": "Starter",
                "price": "0",
                "period": "month",
                "features": ["1 landing page", "100 leads / month"],
                "cta_text": "Start free",
                "cta_url": "#signup",
                "highlighted": false
            },
            {
                "name": "Pro",
                "price": "29",
                "period": "month",
                "features": ["Unlimited pages", "Unlimited leads", "Custom domain"],
                "cta_text": "Go Pro",
                "cta_url": "#signup",
                "highlighted": true
            }
        ]
    })
}

/// Prices may be stored as strings or numbers.
fn price(plan: &serde_json::Map<String, Value>) -> String {
    match plan.get("price") {
        Some(Value::String(s)) => escape_html(s),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

impl BlockRenderer for PricingBlock {
    fn render(&self, ctx: &BlockContext<'_>) -> Result<String, BlockError> {
        let c = ctx.object()?;
        let currency = esc(c, "currency");

        let mut html = section_open("pricing");
        html.push_str(&heading(c, "title"));
        if !text(c, "subtitle").is_empty() {
            html.push_str(&format!("<p>{}</p>", esc(c, "subtitle")));
        }
        html.push_str(r#"<div class="pc-plans">"#);
        for plan in objects(c, "plans") {
            let class = if flag(plan, "highlighted") {
                "pc-plan pc-plan-highlighted"
            } else {
                "pc-plan"
            };
            html.push_str(&format!(r#"<div class="{class}">"#));
            html.push_str(&format!("<h3>{}</h3>", esc(plan, "name")));
            html.push_str(&format!(
                r#"<p class="pc-price">{currency}{}<span>/{}</span></p>"#,
                price(plan),
                esc(plan, "period"),
            ));
            html.push_str("<ul>");
            for feature in items(plan, "features").iter().filter_map(Value::as_str) {
                html.push_str(&format!("<li>{}</li>", escape_html(feature)));
            }
            html.push_str("</ul>");
            if !text(plan, "cta_text").is_empty() {
                html.push_str(&format!(
                    r#"<a class="pc-button" href="{}">{}</a>"#,
                    escape_html(safe_url(text(plan, "cta_url"))),
                    esc(plan, "cta_text"),
                ));
            }
            html.push_str("</div>");
        }
        html.push_str("</div></section>");
        Ok(html)
    }
}
