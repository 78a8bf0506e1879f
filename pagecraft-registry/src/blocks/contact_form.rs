use crate::html::{esc, escape_html, flag, heading, objects, section_open, text};
use crate::{BlockContext, BlockError, BlockRenderer};
use serde_json::{Value, json};

/// Lead capture form. Submissions go to the public lead endpoint of the
/// owning page; on the builder canvas the inputs are inert.
pub struct ContactFormBlock;

pub(super) fn default_content() -> Value {
    json!({
        "title": "Get in touch",
        "description": "Leave your details and we'll get back to you within a day.",
        "submit_text": "Send",
        "success_message": "Thanks! We'll be in touch.",
        "fields": [
            { "name": "name", "label": "Name", "type": "text", "required": true },
            { "name": "email", "label": "Email", "type": "email", "required": true },
            { "name": "message", "label": "Message", "type": "textarea", "required": false }
        ]
    })
}

fn is_valid_field_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 64
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn input_type(kind: &str) -> &'static str {
    match kind {
        "email" => "email",
        "tel" => "tel",
        "number" => "number",
        "url" => "url",
        _ => "text",
    }
}

impl BlockRenderer for ContactFormBlock {
    fn render(&self, ctx: &BlockContext<'_>) -> Result<String, BlockError> {
        let c = ctx.object()?;
        let inert = ctx.mode.is_edit();
        let disabled = if inert { " disabled" } else { "" };
        let action = match (inert, ctx.page_id) {
            (false, Some(page_id)) => format!("/p/{page_id}/leads"),
            _ => "#".to_string(),
        };

        let mut html = section_open("contact_form");
        html.push_str(&heading(c, "title"));
        if !text(c, "description").is_empty() {
            html.push_str(&format!("<p>{}</p>", esc(c, "description")));
        }
        html.push_str(&format!(
            r#"<form class="pc-form" method="post" action="{}" data-success="{}">"#,
            escape_html(&action),
            esc(c, "success_message"),
        ));
        html.push_str(&format!(
            r#"<input type="hidden" name="component_id" value="{}">"#,
            ctx.component_id
        ));
        for field in objects(c, "fields") {
            let name = text(field, "name");
            if !is_valid_field_name(name) || name == "component_id" {
                continue;
            }
            let label = match text(field, "label") {
                "" => escape_html(name),
                label => escape_html(label),
            };
            let required = if flag(field, "required") { " required" } else { "" };
            html.push_str(&format!("<label>{label}"));
            if text(field, "type") == "textarea" {
                html.push_str(&format!(
                    r#"<textarea name="{name}"{required}{disabled}></textarea>"#
                ));
            } else {
                html.push_str(&format!(
                    r#"<input type="{}" name="{name}"{required}{disabled}>"#,
                    input_type(text(field, "type")),
                ));
            }
            html.push_str("</label>");
        }
        let submit = match text(c, "submit_text") {
            "" => "Submit".to_string(),
            s => escape_html(s),
        };
        html.push_str(&format!(
            r#"<button type="submit"{disabled}>{submit}</button></form></section>"#
        ));
        Ok(html)
    }
}
