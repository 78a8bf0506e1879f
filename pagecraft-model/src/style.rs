use serde::{Deserialize, Serialize};

/// Presentation overrides applied uniformly by the renderer wrapper,
/// independent of the block type.
///
/// Blocks are free to ignore these; they form a base layer beneath the
/// block's own styling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingOverrides>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<String>,
}

impl StyleOverrides {
    /// Returns true when no override is set.
    pub fn is_empty(&self) -> bool {
        self.to_inline_css().is_empty()
    }

    /// Renders the set fields as inline CSS declarations.
    ///
    /// Values that could break out of a `style` attribute are dropped.
    /// The accent color is exposed as the `--accent` custom property so
    /// blocks can pick it up.
    pub fn to_inline_css(&self) -> String {
        let mut decls: Vec<String> = Vec::new();
        if let Some(colors) = &self.colors {
            push_decl(&mut decls, "background-color", colors.background.as_deref());
            push_decl(&mut decls, "color", colors.text.as_deref());
            push_decl(&mut decls, "--accent", colors.accent.as_deref());
        }
        if let Some(spacing) = &self.spacing {
            push_decl(&mut decls, "padding-top", spacing.padding_top.as_deref());
            push_decl(&mut decls, "padding-bottom", spacing.padding_bottom.as_deref());
        }
        decls.join("; ")
    }
}

fn push_decl(decls: &mut Vec<String>, property: &str, value: Option<&str>) {
    let Some(value) = value.map(str::trim) else {
        return;
    };
    if is_safe_css_value(value) {
        decls.push(format!("{property}: {value}"));
    }
}

fn is_safe_css_value(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 64
        && !value
            .chars()
            .any(|c| matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\'' | '\\') || c.is_control())
}
