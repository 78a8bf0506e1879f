use crate::{EditAction, EditControls, EditHandler};
use pagecraft_model::{ComponentRecord, Page};
use pagecraft_registry::html::escape_html;
use pagecraft_registry::{BlockContext, ComponentRegistry, ComponentType, RenderMode};
use pagecraft_types::{ComponentId, PageId};
use tracing::{debug, warn};

/// What a rendered slot holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// The registered renderer produced the markup.
    Rendered { component_type: ComponentType },
    /// Edit-mode stand-in for a block that could not be rendered.
    Placeholder { missing_type: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    pub id: ComponentId,
    /// Position of the source record in the input list.
    pub index: usize,
    pub kind: BlockKind,
    pub html: String,
    /// Present only in edit mode.
    pub controls: Option<EditControls>,
}

impl RenderedBlock {
    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, BlockKind::Placeholder { .. })
    }
}

/// Output of one render pass, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub mode: RenderMode,
    pub blocks: Vec<RenderedBlock>,
}

impl RenderedPage {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn ids(&self) -> Vec<ComponentId> {
        self.blocks.iter().map(|b| b.id).collect()
    }

    /// Concatenated fragments.
    pub fn to_html(&self) -> String {
        self.blocks.iter().map(|b| b.html.as_str()).collect()
    }

    /// Forwards an activated control to `handler`.
    ///
    /// Returns `false` without calling the handler outside edit mode, for a
    /// block not in this render, or when the control is disabled.
    pub fn dispatch(&self, action: EditAction, handler: &mut dyn EditHandler) -> bool {
        if !self.mode.is_edit() {
            return false;
        }
        let Some(controls) = self
            .blocks
            .iter()
            .find(|b| b.id == action.id())
            .and_then(|b| b.controls)
        else {
            return false;
        };
        if !controls.allows(&action) {
            debug!(?action, "Ignoring disabled control");
            return false;
        }
        match action {
            EditAction::Edit { id } => handler.on_edit(id),
            EditAction::Delete { id } => handler.on_delete(id),
            EditAction::Move { id, direction } => handler.on_move(id, direction),
        }
        true
    }
}

/// Resolves component records through a registry and renders them.
pub struct PageRenderer<'r> {
    registry: &'r ComponentRegistry,
    page_id: Option<PageId>,
}

impl<'r> PageRenderer<'r> {
    pub fn new(registry: &'r ComponentRegistry) -> Self {
        Self {
            registry,
            page_id: None,
        }
    }

    /// Passes the owning page id down to blocks (form actions need it).
    #[must_use]
    pub fn for_page(mut self, page_id: PageId) -> Self {
        self.page_id = Some(page_id);
        self
    }

    /// Renders a stored page's component list.
    pub fn render_page(&self, page: &Page, mode: RenderMode) -> RenderedPage {
        PageRenderer {
            registry: self.registry,
            page_id: Some(page.id),
        }
        .render(&page.components, mode)
    }

    pub fn render(&self, records: &[ComponentRecord], mode: RenderMode) -> RenderedPage {
        let len = records.len();
        let blocks: Vec<RenderedBlock> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.is_visible())
            .filter_map(|(index, record)| self.render_record(index, len, record, mode))
            .collect();
        debug!(
            page_id = ?self.page_id,
            %mode,
            records = len,
            rendered = blocks.len(),
            "Rendered page"
        );
        RenderedPage { mode, blocks }
    }

    fn render_record(
        &self,
        index: usize,
        len: usize,
        record: &ComponentRecord,
        mode: RenderMode,
    ) -> Option<RenderedBlock> {
        let Some(descriptor) = self.registry.get_by_type(&record.component_type) else {
            warn!(
                page_id = ?self.page_id,
                component_id = %record.id,
                component_type = %record.component_type,
                "Unsupported component type"
            );
            return self.placeholder(index, len, record, mode, "unsupported component type");
        };

        let ctx = BlockContext {
            content: &record.content,
            style: record.style.as_ref(),
            mode,
            component_id: record.id,
            page_id: self.page_id,
        };
        match descriptor.renderer.render(&ctx) {
            Ok(inner) => {
                let controls = mode.is_edit().then(|| EditControls::at(index, len, true));
                Some(RenderedBlock {
                    id: record.id,
                    index,
                    kind: BlockKind::Rendered {
                        component_type: descriptor.component_type,
                    },
                    html: wrap(record, &inner, controls),
                    controls,
                })
            }
            Err(e) => {
                warn!(
                    page_id = ?self.page_id,
                    component_id = %record.id,
                    component_type = %record.component_type,
                    error = %e,
                    "Block failed to render"
                );
                self.placeholder(index, len, record, mode, &e.to_string())
            }
        }
    }

    fn placeholder(
        &self,
        index: usize,
        len: usize,
        record: &ComponentRecord,
        mode: RenderMode,
        reason: &str,
    ) -> Option<RenderedBlock> {
        if !mode.is_edit() {
            return None;
        }
        let controls = Some(EditControls::at(index, len, false));
        let inner = format!(
            r#"<div class="pc-placeholder" role="alert"><strong>Unsupported component: {}</strong><p>{}</p></div>"#,
            escape_html(&record.component_type),
            escape_html(reason),
        );
        Some(RenderedBlock {
            id: record.id,
            index,
            kind: BlockKind::Placeholder {
                missing_type: record.component_type.clone(),
                reason: reason.to_string(),
            },
            html: wrap(record, &inner, controls),
            controls,
        })
    }
}

/// Wraps block markup with the style base layer and, in edit mode, the
/// hover toolbar.
fn wrap(record: &ComponentRecord, inner: &str, controls: Option<EditControls>) -> String {
    let css = record
        .style
        .as_ref()
        .map(|s| s.to_inline_css())
        .unwrap_or_default();
    let style_attr = if css.is_empty() {
        String::new()
    } else {
        format!(r#" style="{}""#, escape_html(&css))
    };
    let type_attr = escape_html(&record.component_type);

    match controls {
        None => format!(
            r#"<div class="pc-component" data-component-id="{}" data-component-type="{type_attr}"{style_attr}>{inner}</div>"#,
            record.id
        ),
        Some(c) => format!(
            concat!(
                r#"<div class="pc-component pc-editable" data-component-id="{id}" data-component-type="{ty}"{style}>"#,
                r#"<div class="pc-controls" role="toolbar">"#,
                r#"<button type="button" data-action="edit"{edit}>Edit</button>"#,
                r#"<button type="button" data-action="move-up"{up}>Move up</button>"#,
                r#"<button type="button" data-action="move-down"{down}>Move down</button>"#,
                r#"<button type="button" data-action="delete"{delete}>Delete</button>"#,
                "</div>{inner}</div>"
            ),
            id = record.id,
            ty = type_attr,
            style = style_attr,
            edit = disabled(c.can_edit),
            up = disabled(c.can_move_up),
            down = disabled(c.can_move_down),
            delete = disabled(c.can_delete),
            inner = inner,
        ),
    }
}

fn disabled(enabled: bool) -> &'static str {
    if enabled { "" } else { " disabled" }
}
