use crate::error::Result;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::info;

/// Read-only view of the Lutris game library (`pga.db`).
pub struct LibraryDb {
    conn: Connection,
}

impl LibraryDb {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Every game slug, in table order.
    pub fn slugs(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT slug FROM games")?;
        let rows = stmt.query_map([], |row| row.get::<_, Option<String>>(0))?;

        let mut slugs = Vec::new();
        for slug in rows {
            if let Some(slug) = slug? {
                slugs.push(slug);
            }
        }

        info!("Found {} games in the Lutris library", slugs.len());
        Ok(slugs)
    }
}
