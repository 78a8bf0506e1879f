use pagecraft_model::{
    ColorOverrides, ComponentRecord, MoveDirection, Page, SpacingOverrides, StyleOverrides,
};
use pagecraft_registry::{
    BlockContext, BlockError, BlockRenderer, ComponentRegistry, ComponentType,
    ComponentTypeDescriptor,
};
use pagecraft_render::{
    BlockKind, EditAction, EditHandler, PageRenderer, RenderMode, render_document,
    render_unavailable,
};
use pagecraft_types::ComponentId;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Records every component id it is asked to render.
#[derive(Default)]
struct Spy {
    calls: Mutex<Vec<ComponentId>>,
}

impl Spy {
    fn calls(&self) -> Vec<ComponentId> {
        self.calls.lock().unwrap().clone()
    }
}

struct SpyRenderer(Arc<Spy>, &'static str);

impl BlockRenderer for SpyRenderer {
    fn render(&self, ctx: &BlockContext<'_>) -> Result<String, BlockError> {
        self.0.calls.lock().unwrap().push(ctx.component_id);
        Ok(format!("<p>{}:{}</p>", self.1, ctx.mode))
    }
}

struct Failing;
impl BlockRenderer for Failing {
    fn render(&self, _ctx: &BlockContext<'_>) -> Result<String, BlockError> {
        Err(BlockError::InvalidContent("broken".into()))
    }
}

/// Registry with `{hero, pricing, testimonials}` backed by one spy.
fn spy_registry() -> (ComponentRegistry, Arc<Spy>) {
    let spy = Arc::new(Spy::default());
    let mut builder = ComponentRegistry::builder();
    for (t, label) in [
        (ComponentType::Hero, "hero"),
        (ComponentType::Pricing, "pricing"),
        (ComponentType::Testimonials, "testimonials"),
    ] {
        builder
            .register(ComponentTypeDescriptor::new(
                t,
                Arc::new(SpyRenderer(Arc::clone(&spy), label)),
            ))
            .unwrap();
    }
    (builder.build(), spy)
}

fn rec(tag: &str, visible: bool) -> ComponentRecord {
    ComponentRecord::new(tag, json!({})).with_visible(visible)
}

// ── Scenario ─────────────────────────────────────────────────────

#[test]
fn published_scenario_renders_only_known_visible_blocks() {
    let (registry, spy) = spy_registry();
    let a = rec("hero", true);
    let b = rec("unknown", true);
    let c = rec("pricing", false);
    let records = vec![a.clone(), b, c];

    let out = PageRenderer::new(&registry).render(&records, RenderMode::Published);

    assert_eq!(out.len(), 1);
    assert_eq!(out.ids(), vec![a.id]);
    assert_eq!(spy.calls(), vec![a.id]);
    assert!(out.blocks[0].controls.is_none());
}

// ── Visibility ───────────────────────────────────────────────────

#[test]
fn hidden_records_are_never_rendered_in_any_mode() {
    let (registry, spy) = spy_registry();
    let hidden = rec("hero", false);
    let records = vec![hidden.clone()];

    for mode in [RenderMode::Edit, RenderMode::Preview, RenderMode::Published] {
        let out = PageRenderer::new(&registry).render(&records, mode);
        assert!(out.is_empty(), "{mode}");
    }
    assert!(spy.calls().is_empty());
}

#[test]
fn missing_visible_flag_means_visible() {
    let (registry, _) = spy_registry();
    let mut record = rec("hero", true);
    record.visible = None;
    let out = PageRenderer::new(&registry).render(&[record], RenderMode::Published);
    assert_eq!(out.len(), 1);
}

// ── Unknown types ────────────────────────────────────────────────

#[test]
fn unknown_type_is_placeholder_in_edit_mode() {
    let (registry, spy) = spy_registry();
    let unknown = rec("countdown", true);
    let after = rec("hero", true);
    let records = vec![unknown.clone(), after.clone()];

    let out = PageRenderer::new(&registry).render(&records, RenderMode::Edit);

    assert_eq!(out.ids(), vec![unknown.id, after.id]);
    assert_eq!(
        out.blocks[0].kind,
        BlockKind::Placeholder {
            missing_type: "countdown".into(),
            reason: "unsupported component type".into(),
        }
    );
    assert!(out.blocks[0].html.contains("Unsupported component: countdown"));
    assert_eq!(spy.calls(), vec![after.id]);
}

#[test]
fn unknown_type_renders_nothing_outside_edit_mode() {
    let (registry, _) = spy_registry();
    let records = vec![rec("countdown", true), rec("hero", true)];
    for mode in [RenderMode::Preview, RenderMode::Published] {
        let out = PageRenderer::new(&registry).render(&records, mode);
        assert_eq!(out.len(), 1);
        assert!(!out.to_html().contains("countdown"));
    }
}

#[test]
fn placeholder_escapes_the_type_tag() {
    let (registry, _) = spy_registry();
    let records = vec![rec("<script>", true)];
    let out = PageRenderer::new(&registry).render(&records, RenderMode::Edit);
    assert!(!out.to_html().contains("<script>"));
    assert!(out.to_html().contains("&lt;script&gt;"));
}

#[test]
fn failing_renderer_soft_fails() {
    let mut builder = ComponentRegistry::builder();
    builder
        .register(ComponentTypeDescriptor::new(ComponentType::Faq, Arc::new(Failing)))
        .unwrap();
    let registry = builder.build();
    let records = vec![rec("faq", true)];

    let published = PageRenderer::new(&registry).render(&records, RenderMode::Published);
    assert!(published.is_empty());

    let edit = PageRenderer::new(&registry).render(&records, RenderMode::Edit);
    assert_eq!(edit.len(), 1);
    assert!(edit.blocks[0].is_placeholder());
    assert!(edit.blocks[0].html.contains("broken"));
}

// ── Edge cases ───────────────────────────────────────────────────

#[test]
fn empty_list_renders_empty_page() {
    let (registry, _) = spy_registry();
    let out = PageRenderer::new(&registry).render(&[], RenderMode::Edit);
    assert!(out.is_empty());
    assert_eq!(out.to_html(), "");
}

#[test]
fn duplicate_ids_pass_through() {
    let (registry, spy) = spy_registry();
    let first = rec("hero", true);
    let second = rec("pricing", true).with_id(first.id);
    let out = PageRenderer::new(&registry).render(&[first.clone(), second], RenderMode::Preview);
    assert_eq!(out.ids(), vec![first.id, first.id]);
    assert_eq!(spy.calls().len(), 2);
}

#[test]
fn style_overrides_land_on_the_wrapper() {
    let (registry, _) = spy_registry();
    let style = StyleOverrides {
        colors: Some(ColorOverrides {
            background: Some("#000".into()),
            ..Default::default()
        }),
        spacing: Some(SpacingOverrides {
            padding_top: Some("10px".into()),
            padding_bottom: None,
        }),
    };
    let record = rec("hero", true).with_style(style);
    let out = PageRenderer::new(&registry).render(&[record], RenderMode::Published);
    assert!(
        out.to_html()
            .contains(r#"style="background-color: #000; padding-top: 10px""#)
    );
}

#[test]
fn mode_is_passed_to_block_renderers() {
    let (registry, _) = spy_registry();
    let records = vec![rec("testimonials", true)];
    let out = PageRenderer::new(&registry).render(&records, RenderMode::Preview);
    assert!(out.to_html().contains("<p>testimonials:preview</p>"));
}

// ── Edit affordances ─────────────────────────────────────────────

#[test]
fn move_controls_respect_list_boundaries() {
    let (registry, _) = spy_registry();
    let records = vec![rec("hero", true), rec("pricing", true), rec("testimonials", true)];
    let out = PageRenderer::new(&registry).render(&records, RenderMode::Edit);

    let controls: Vec<_> = out.blocks.iter().map(|b| b.controls.unwrap()).collect();
    assert!(!controls[0].can_move_up);
    assert!(controls[0].can_move_down);
    assert!(controls[1].can_move_up && controls[1].can_move_down);
    assert!(controls[2].can_move_up);
    assert!(!controls[2].can_move_down);
    assert!(out.blocks[0].html.contains(r#"data-action="move-up" disabled"#));
}

struct ListHandler {
    page: Page,
    edited: Vec<ComponentId>,
}

impl EditHandler for ListHandler {
    fn on_edit(&mut self, id: ComponentId) {
        self.edited.push(id);
    }

    fn on_delete(&mut self, id: ComponentId) {
        self.page.remove_component(id);
    }

    fn on_move(&mut self, id: ComponentId, direction: MoveDirection) {
        self.page.move_component(id, direction);
    }
}

impl ListHandler {
    fn new() -> Self {
        Self {
            page: Page::new("test"),
            edited: Vec::new(),
        }
    }
}

fn handler_with_three() -> (ListHandler, [ComponentId; 3]) {
    let mut handler = ListHandler::new();
    let records = [rec("hero", true), rec("pricing", true), rec("testimonials", true)];
    let ids = [records[0].id, records[1].id, records[2].id];
    for r in records {
        handler.page.push_component(r);
    }
    (handler, ids)
}

#[test]
fn dispatch_respects_move_boundaries() {
    let (registry, _) = spy_registry();
    let (mut handler, [a, b, c]) = handler_with_three();
    let out = PageRenderer::new(&registry).render(&handler.page.components, RenderMode::Edit);

    let up = |id| EditAction::Move { id, direction: MoveDirection::Up };
    let down = |id| EditAction::Move { id, direction: MoveDirection::Down };

    assert!(!out.dispatch(up(a), &mut handler));
    assert!(!out.dispatch(down(c), &mut handler));
    assert_eq!(handler.page.components.iter().map(|r| r.id).collect::<Vec<_>>(), vec![a, b, c]);

    assert!(out.dispatch(up(b), &mut handler));
    assert_eq!(handler.page.components.iter().map(|r| r.id).collect::<Vec<_>>(), vec![b, a, c]);
}

#[test]
fn dispatch_is_inert_outside_edit_mode() {
    let (registry, _) = spy_registry();
    let (mut handler, [a, _, _]) = handler_with_three();
    let out = PageRenderer::new(&registry).render(&handler.page.components, RenderMode::Published);
    assert!(!out.dispatch(EditAction::Delete { id: a }, &mut handler));
    assert_eq!(handler.page.components.len(), 3);
}

#[test]
fn placeholders_can_be_deleted_but_not_edited() {
    let (registry, _) = spy_registry();
    let mut handler = ListHandler::new();
    let stale = rec("legacy_banner", true);
    let id = stale.id;
    handler.page.push_component(stale);
    let out = PageRenderer::new(&registry).render(&handler.page.components, RenderMode::Edit);

    assert!(!out.dispatch(EditAction::Edit { id }, &mut handler));
    assert!(handler.edited.is_empty());
    assert!(out.dispatch(EditAction::Delete { id }, &mut handler));
    assert!(handler.page.components.is_empty());
}

#[test]
fn edit_action_json_shape() {
    let id = ComponentId::new();
    let action: EditAction = serde_json::from_value(json!({
        "action": "move",
        "id": id,
        "direction": "down"
    }))
    .unwrap();
    assert_eq!(action, EditAction::Move { id, direction: MoveDirection::Down });
}

// ── Documents ────────────────────────────────────────────────────

#[test]
fn document_wraps_fragments_with_escaped_title() {
    let registry = ComponentRegistry::with_builtin_blocks();
    let mut page = Page::new("Tom & Jerry");
    page.push_component(registry.create_default_content("hero").unwrap());

    let html = render_document(&page, RenderMode::Published, &registry);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Tom &amp; Jerry</title>"));
    assert!(html.contains("pc-hero"));
    assert!(html.contains(r#"data-mode="published""#));
}

#[test]
fn unavailable_document_is_distinct() {
    let html = render_unavailable();
    assert!(html.contains("Page not available"));
    assert!(!html.contains("pc-component"));
}

// ── Properties ───────────────────────────────────────────────────

fn record_strategy() -> impl Strategy<Value = ComponentRecord> {
    (
        prop::sample::select(vec!["hero", "pricing", "testimonials", "bogus", "faq"]),
        any::<bool>(),
    )
        .prop_map(|(tag, visible)| rec(tag, visible))
}

fn mode_strategy() -> impl Strategy<Value = RenderMode> {
    prop::sample::select(vec![RenderMode::Edit, RenderMode::Preview, RenderMode::Published])
}

proptest! {
    #[test]
    fn output_preserves_relative_input_order(
        records in prop::collection::vec(record_strategy(), 0..20),
        mode in mode_strategy(),
    ) {
        let (registry, _) = spy_registry();
        let out = PageRenderer::new(&registry).render(&records, mode);

        let expected: Vec<ComponentId> = records
            .iter()
            .filter(|r| r.is_visible())
            .filter(|r| mode.is_edit() || registry.contains(&r.component_type))
            .map(|r| r.id)
            .collect();
        prop_assert_eq!(out.ids(), expected);

        let indices: Vec<usize> = out.blocks.iter().map(|b| b.index).collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn hidden_records_never_reach_renderers(
        records in prop::collection::vec(record_strategy(), 0..20),
        mode in mode_strategy(),
    ) {
        let (registry, spy) = spy_registry();
        let _ = PageRenderer::new(&registry).render(&records, mode);
        let hidden: Vec<ComponentId> =
            records.iter().filter(|r| !r.is_visible()).map(|r| r.id).collect();
        prop_assert!(spy.calls().iter().all(|id| !hidden.contains(id)));
    }
}
