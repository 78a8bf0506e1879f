//! Editing session over a single page document.

use crate::{BuilderError, BuilderResult};
use pagecraft_model::{ComponentRecord, MoveDirection, Page, StyleOverrides, validate_slug};
use pagecraft_registry::{ComponentRegistry, RenderMode};
use pagecraft_render::{EditAction, EditHandler, PageRenderer, RenderedPage};
use pagecraft_storage::PageStore;
use pagecraft_types::{ComponentId, PageId, Timestamp};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One user's edit of one page.
pub struct BuilderSession {
    page: Page,
    store: Arc<dyn PageStore>,
    registry: Arc<ComponentRegistry>,
    dirty: bool,
    selected: Option<ComponentId>,
}

impl BuilderSession {
    /// Starts a session on a page that has not been persisted yet.
    ///
    /// The session starts dirty: the page only exists in memory.
    pub fn new(page: Page, store: Arc<dyn PageStore>, registry: Arc<ComponentRegistry>) -> Self {
        Self {
            page,
            store,
            registry,
            dirty: true,
            selected: None,
        }
    }

    /// Loads a stored page into a clean session.
    pub fn open(
        page_id: PageId,
        store: Arc<dyn PageStore>,
        registry: Arc<ComponentRegistry>,
    ) -> BuilderResult<Self> {
        let page = store
            .load_page(page_id)?
            .ok_or(BuilderError::PageNotFound(page_id))?;
        debug!(page_id = %page_id, components = page.components.len(), "Opened builder session");
        Ok(Self {
            page,
            store,
            registry,
            dirty: false,
            selected: None,
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn id(&self) -> PageId {
        self.page.id
    }

    /// True when the in-memory page differs from what was last saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The component most recently opened for editing, if it still exists.
    pub fn selected(&self) -> Option<ComponentId> {
        self.selected
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    // ================================================================
    // Component list
    // ================================================================

    /// Appends a new block of `tag` with its default content.
    pub fn add_component(&mut self, tag: &str) -> BuilderResult<ComponentId> {
        self.add_component_at(self.page.components.len(), tag)
    }

    /// Inserts a new block of `tag` at `index` (clamped to the end).
    pub fn add_component_at(&mut self, index: usize, tag: &str) -> BuilderResult<ComponentId> {
        let record = self.registry.create_default_content(tag)?;
        let id = record.id;
        self.page.insert_component(index, record);
        self.mark_dirty();
        debug!(page_id = %self.page.id, component_id = %id, component_type = tag, "Added component");
        Ok(id)
    }

    pub fn remove_component(&mut self, id: ComponentId) -> BuilderResult<ComponentRecord> {
        let record = self
            .page
            .remove_component(id)
            .ok_or(BuilderError::ComponentNotFound(id))?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.mark_dirty();
        Ok(record)
    }

    /// Moves a block one step. Returns `Ok(false)` at the list boundary.
    pub fn move_component(&mut self, id: ComponentId, direction: MoveDirection) -> BuilderResult<bool> {
        self.require(id)?;
        let moved = self.page.move_component(id, direction);
        if moved {
            self.mark_dirty();
        }
        Ok(moved)
    }

    /// Replaces a block's content after checking it against its type.
    pub fn update_content(&mut self, id: ComponentId, content: serde_json::Value) -> BuilderResult<()> {
        let tag = self.require(id)?.component_type.clone();
        self.registry.validate_content(&tag, &content)?;
        self.page.update_content(id, content);
        self.mark_dirty();
        Ok(())
    }

    pub fn update_style(&mut self, id: ComponentId, style: Option<StyleOverrides>) -> BuilderResult<()> {
        self.require(id)?;
        self.page.update_style(id, style);
        self.mark_dirty();
        Ok(())
    }

    pub fn set_visible(&mut self, id: ComponentId, visible: bool) -> BuilderResult<()> {
        self.require(id)?;
        self.page.set_visible(id, visible);
        self.mark_dirty();
        Ok(())
    }

    // ================================================================
    // Page metadata
    // ================================================================

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.page.title = title.into();
        self.mark_dirty();
    }

    pub fn set_slug(&mut self, slug: &str) -> BuilderResult<()> {
        validate_slug(slug)?;
        self.page.slug = slug.to_string();
        self.mark_dirty();
        Ok(())
    }

    // ================================================================
    // Rendering / affordances
    // ================================================================

    pub fn render(&self, mode: RenderMode) -> RenderedPage {
        PageRenderer::new(&self.registry)
            .for_page(self.page.id)
            .render_page(&self.page, mode)
    }

    /// Routes a canvas control through an edit-mode render of the current
    /// page. Returns `false` when the control is not active.
    pub fn apply(&mut self, action: EditAction) -> bool {
        let rendered = self.render(RenderMode::Edit);
        rendered.dispatch(action, self)
    }

    // ================================================================
    // Persistence
    // ================================================================

    /// Writes the whole page to the store.
    ///
    /// On failure the in-memory page and the dirty flag are left as they
    /// were, so the caller can retry.
    pub fn save(&mut self) -> BuilderResult<()> {
        let mut snapshot = self.page.clone();
        snapshot.touch(Timestamp::now());
        if let Err(e) = self.store.save_page(&snapshot) {
            warn!(page_id = %self.page.id, error = %e, "Page save failed; keeping unsaved edits");
            return Err(BuilderError::Save(e));
        }
        self.page = snapshot;
        self.dirty = false;
        info!(page_id = %self.page.id, components = self.page.components.len(), "Page saved");
        Ok(())
    }

    /// Marks the page published and saves it.
    ///
    /// If the save fails the status change stays pending in the session.
    pub fn publish(&mut self) -> BuilderResult<()> {
        self.page.publish(Timestamp::now());
        self.mark_dirty();
        self.save()
    }

    pub fn unpublish(&mut self) -> BuilderResult<()> {
        self.page.unpublish();
        self.mark_dirty();
        self.save()
    }

    /// Takes the page out of circulation. Archived pages are never served.
    pub fn archive(&mut self) -> BuilderResult<()> {
        self.page.archive();
        self.mark_dirty();
        self.save()
    }

    fn require(&self, id: ComponentId) -> BuilderResult<&ComponentRecord> {
        self.page
            .component(id)
            .ok_or(BuilderError::ComponentNotFound(id))
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl EditHandler for BuilderSession {
    fn on_edit(&mut self, id: ComponentId) {
        self.selected = Some(id);
    }

    fn on_delete(&mut self, id: ComponentId) {
        if let Err(e) = self.remove_component(id) {
            warn!(component_id = %id, error = %e, "Delete control on missing component");
        }
    }

    fn on_move(&mut self, id: ComponentId, direction: MoveDirection) {
        if let Err(e) = self.move_component(id, direction) {
            warn!(component_id = %id, error = %e, "Move control on missing component");
        }
    }
}

impl std::fmt::Debug for BuilderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuilderSession")
            .field("page_id", &self.page.id)
            .field("components", &self.page.components.len())
            .field("dirty", &self.dirty)
            .field("selected", &self.selected)
            .finish()
    }
}
