//! rusqlite-backed implementation of the page and lead stores.

use crate::{LeadStore, PageStore, PageSummary, StorageError, StorageResult};
use pagecraft_model::{ComponentRecord, Lead, LeadStatus, Page, PageStatus};
use pagecraft_types::{ComponentId, LeadId, PageId, Timestamp};
use rusqlite::{Connection, ErrorCode, OptionalExtension, Row, params};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS pages (
        id TEXT PRIMARY KEY,
        slug TEXT NOT NULL UNIQUE,
        title TEXT NOT NULL,
        status TEXT NOT NULL,
        components TEXT NOT NULL,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL,
        published_at INTEGER
    );

    CREATE TABLE IF NOT EXISTS leads (
        id TEXT PRIMARY KEY,
        page_id TEXT NOT NULL,
        component_id TEXT,
        fields TEXT NOT NULL,
        status TEXT NOT NULL,
        submitted_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_leads_page ON leads (page_id, submitted_at);
";

const PAGE_COLUMNS: &str =
    "id, slug, title, status, components, created_at, updated_at, published_at";

const LEAD_COLUMNS: &str =
    "id, page_id, component_id, fields, status, submitted_at, updated_at";

/// Persistent page and lead store backed by SQLite.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens (or creates) a store at the given path, creating parent
    /// directories as needed.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        info!("Opened page store at {}", path.display());
        Self::with_connection(conn)
    }

    /// Opens an in-memory store (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StorageResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── Row mapping ──────────────────────────────────────────────────

struct PageRow {
    id: String,
    slug: String,
    title: String,
    status: String,
    components: String,
    created_at: i64,
    updated_at: i64,
    published_at: Option<i64>,
}

impl PageRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            slug: row.get(1)?,
            title: row.get(2)?,
            status: row.get(3)?,
            components: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
            published_at: row.get(7)?,
        })
    }

    fn into_page(self) -> StorageResult<Page> {
        let components: Vec<ComponentRecord> = serde_json::from_str(&self.components)?;
        Ok(Page {
            id: parse_id(&self.id, PageId::parse)?,
            title: self.title,
            slug: self.slug,
            status: parse_status::<PageStatus>(&self.status)?,
            components,
            created_at: Timestamp::from_millis(self.created_at),
            updated_at: Timestamp::from_millis(self.updated_at),
            published_at: self.published_at.map(Timestamp::from_millis),
        })
    }
}

struct LeadRow {
    id: String,
    page_id: String,
    component_id: Option<String>,
    fields: String,
    status: String,
    submitted_at: i64,
    updated_at: i64,
}

impl LeadRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            page_id: row.get(1)?,
            component_id: row.get(2)?,
            fields: row.get(3)?,
            status: row.get(4)?,
            submitted_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }

    fn into_lead(self) -> StorageResult<Lead> {
        let fields: BTreeMap<String, String> = serde_json::from_str(&self.fields)?;
        Ok(Lead {
            id: parse_id(&self.id, LeadId::parse)?,
            page_id: parse_id(&self.page_id, PageId::parse)?,
            component_id: self
                .component_id
                .as_deref()
                .map(|s| parse_id(s, ComponentId::parse))
                .transpose()?,
            fields,
            status: parse_status::<LeadStatus>(&self.status)?,
            submitted_at: Timestamp::from_millis(self.submitted_at),
            updated_at: Timestamp::from_millis(self.updated_at),
        })
    }
}

fn parse_id<T, E: std::fmt::Display>(
    s: &str,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> StorageResult<T> {
    parse(s).map_err(|e| StorageError::InvalidData(format!("invalid id {s:?}: {e}")))
}

fn parse_status<T: std::str::FromStr>(s: &str) -> StorageResult<T>
where
    T::Err: std::fmt::Display,
{
    s.parse()
        .map_err(|e: T::Err| StorageError::InvalidData(e.to_string()))
}

/// The only constraint an upsert can trip is the unique slug.
fn is_constraint_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation
    )
}

// ── PageStore ────────────────────────────────────────────────────

impl PageStore for SqliteStore {
    fn save_page(&self, page: &Page) -> StorageResult<()> {
        let components = serde_json::to_string(&page.components)?;
        let conn = self.conn();
        let result = conn.execute(
            "INSERT INTO pages (id, slug, title, status, components, created_at, updated_at, published_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(id) DO UPDATE SET
                slug = excluded.slug,
                title = excluded.title,
                status = excluded.status,
                components = excluded.components,
                updated_at = excluded.updated_at,
                published_at = excluded.published_at",
            params![
                page.id.to_string(),
                page.slug,
                page.title,
                page.status.as_str(),
                components,
                page.created_at.as_millis(),
                page.updated_at.as_millis(),
                page.published_at.map(|t| t.as_millis()),
            ],
        );
        match result {
            Ok(_) => {
                debug!(page_id = %page.id, components = page.components.len(), "Saved page");
                Ok(())
            }
            Err(e) if is_constraint_violation(&e) => Err(StorageError::SlugTaken(page.slug.clone())),
            Err(e) => Err(e.into()),
        }
    }

    fn load_page(&self, id: PageId) -> StorageResult<Option<Page>> {
        let conn = self.conn();
        let row = conn
            .query_row(
                &format!("SELECT {PAGE_COLUMNS} FROM pages WHERE id = ?1"),
                params![id.to_string()],
                PageRow::from_row,
            )
            .optional()?;
        row.map(PageRow::into_page).transpose()
    }

    fn load_page_by_slug(&self, slug: &str) -> StorageResult<Option<Page>> {
        let conn = self.conn();
        let row = conn
            .query_row(
                &format!("SELECT {PAGE_COLUMNS} FROM pages WHERE slug = ?1"),
                params![slug],
                PageRow::from_row,
            )
            .optional()?;
        row.map(PageRow::into_page).transpose()
    }

    fn delete_page(&self, id: PageId) -> StorageResult<bool> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;
        let id = id.to_string();
        let leads = tx.execute("DELETE FROM leads WHERE page_id = ?1", params![id])?;
        let pages = tx.execute("DELETE FROM pages WHERE id = ?1", params![id])?;
        tx.commit()?;
        if pages > 0 {
            debug!(page_id = %id, leads, "Deleted page");
        }
        Ok(pages > 0)
    }

    fn list_pages(&self) -> StorageResult<Vec<PageSummary>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, title, slug, status, json_array_length(components), updated_at, published_at
             FROM pages ORDER BY updated_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, i64>(4)?,
                row.get::<_, i64>(5)?,
                row.get::<_, Option<i64>>(6)?,
            ))
        })?;

        let mut result = Vec::new();
        for row in rows {
            let (id, title, slug, status, count, updated_at, published_at) = row?;
            result.push(PageSummary {
                id: parse_id(&id, PageId::parse)?,
                title,
                slug,
                status: parse_status::<PageStatus>(&status)?,
                component_count: usize::try_from(count).unwrap_or_default(),
                updated_at: Timestamp::from_millis(updated_at),
                published_at: published_at.map(Timestamp::from_millis),
            });
        }
        Ok(result)
    }
}

// ── LeadStore ────────────────────────────────────────────────────

impl LeadStore for SqliteStore {
    fn save_lead(&self, lead: &Lead) -> StorageResult<()> {
        let fields = serde_json::to_string(&lead.fields)?;
        let conn = self.conn();
        conn.execute(
            "INSERT OR REPLACE INTO leads (id, page_id, component_id, fields, status, submitted_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                lead.id.to_string(),
                lead.page_id.to_string(),
                lead.component_id.map(|c| c.to_string()),
                fields,
                lead.status.as_str(),
                lead.submitted_at.as_millis(),
                lead.updated_at.as_millis(),
            ],
        )?;
        debug!(lead_id = %lead.id, page_id = %lead.page_id, "Saved lead");
        Ok(())
    }

    fn load_lead(&self, id: LeadId) -> StorageResult<Option<Lead>> {
        let conn = self.conn();
        let row = conn
            .query_row(
                &format!("SELECT {LEAD_COLUMNS} FROM leads WHERE id = ?1"),
                params![id.to_string()],
                LeadRow::from_row,
            )
            .optional()?;
        row.map(LeadRow::into_lead).transpose()
    }

    fn list_leads(&self, page_id: Option<PageId>) -> StorageResult<Vec<Lead>> {
        let conn = self.conn();
        let rows: Vec<LeadRow> = match page_id {
            Some(page_id) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {LEAD_COLUMNS} FROM leads WHERE page_id = ?1 ORDER BY submitted_at DESC, id DESC"
                ))?;
                stmt.query_map(params![page_id.to_string()], LeadRow::from_row)?
                    .collect::<rusqlite::Result<_>>()?
            }
            None => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {LEAD_COLUMNS} FROM leads ORDER BY submitted_at DESC, id DESC"
                ))?;
                stmt.query_map([], LeadRow::from_row)?
                    .collect::<rusqlite::Result<_>>()?
            }
        };
        rows.into_iter().map(LeadRow::into_lead).collect()
    }

    fn update_lead_status(
        &self,
        id: LeadId,
        status: LeadStatus,
        now: Timestamp,
    ) -> StorageResult<bool> {
        let conn = self.conn();
        let changed = conn.execute(
            "UPDATE leads SET status = ?1, updated_at = ?2 WHERE id = ?3",
            params![status.as_str(), now.as_millis(), id.to_string()],
        )?;
        Ok(changed > 0)
    }

    fn delete_lead(&self, id: LeadId) -> StorageResult<bool> {
        let conn = self.conn();
        let changed = conn.execute("DELETE FROM leads WHERE id = ?1", params![id.to_string()])?;
        Ok(changed > 0)
    }

    fn count_leads(&self, page_id: Option<PageId>) -> StorageResult<usize> {
        let conn = self.conn();
        let count: i64 = match page_id {
            Some(page_id) => conn.query_row(
                "SELECT COUNT(*) FROM leads WHERE page_id = ?1",
                params![page_id.to_string()],
                |row| row.get(0),
            )?,
            None => conn.query_row("SELECT COUNT(*) FROM leads", [], |row| row.get(0))?,
        };
        Ok(usize::try_from(count).unwrap_or_default())
    }
}
