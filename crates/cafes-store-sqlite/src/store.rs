//! [`SqliteStore`] — the SQLite implementation of [`CafeStore`].

use std::{path::Path, time::Duration};

use cafes_core::{Cafe, CafeId, NewCafe, store::CafeStore};
use rusqlite::{OptionalExtension as _, ToSql, TransactionBehavior};

use crate::{
  Error, Result,
  encode::{CAFE_COLUMNS, decode_cafe, encode_fields},
  schema::SCHEMA,
};

/// How long a writer waits for another connection's write lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

// ─── Store ───────────────────────────────────────────────────────────────────

/// A café store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

/// Outcome of the update transaction. Refusals are decided inside the
/// transaction and turned into errors once back on the async side.
enum Update {
  Done,
  Missing,
  DuplicateName,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// Writes open their transaction with `BEGIN IMMEDIATE` so the write lock is
// held from the name pre-check onwards. A second connection then waits on the
// busy timeout instead of failing its lock upgrade with `SQLITE_BUSY`.

fn name_taken(
  tx: &rusqlite::Transaction<'_>,
  name: &str,
  except: Option<CafeId>,
) -> rusqlite::Result<bool> {
  Ok(
    tx.query_row(
      "SELECT 1 FROM cafe WHERE name = ?1 AND (?2 IS NULL OR id != ?2)",
      rusqlite::params![name, except],
      |_| Ok(()),
    )
    .optional()?
    .is_some(),
  )
}

// ─── CafeStore impl ──────────────────────────────────────────────────────────

impl CafeStore for SqliteStore {
  type Error = Error;

  async fn list_all(&self) -> Result<Vec<Cafe>> {
    let cafes = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {CAFE_COLUMNS} FROM cafe ORDER BY name"))?;
        let rows = stmt
          .query_map([], decode_cafe)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(cafes)
  }

  async fn get_by_id(&self, id: CafeId) -> Result<Cafe> {
    let cafe = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {CAFE_COLUMNS} FROM cafe WHERE id = ?1"),
              [id],
              decode_cafe,
            )
            .optional()?,
        )
      })
      .await?;

    cafe.ok_or(Error::Core(cafes_core::Error::NotFound(id)))
  }

  async fn create(&self, cafe: NewCafe) -> Result<Cafe> {
    let row = cafe.clone();

    let inserted = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        if name_taken(&tx, &row.name, None)? {
          return Ok(None);
        }
        tx.execute(
          "INSERT INTO cafe (
             name, map_url, img_url, location,
             has_sockets, has_toilet, has_wifi, can_take_calls,
             seats, coffee_price
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
          &encode_fields(&row),
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Some(id))
      })
      .await
      .map_err(Error::from_call)?;

    match inserted {
      Some(id) => Ok(cafe.with_id(id)),
      None => Err(cafes_core::Error::DuplicateName(cafe.name).into()),
    }
  }

  async fn update(&self, id: CafeId, cafe: NewCafe) -> Result<Cafe> {
    let row = cafe.clone();

    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let exists = tx
          .query_row("SELECT 1 FROM cafe WHERE id = ?1", [id], |_| Ok(()))
          .optional()?
          .is_some();
        if !exists {
          return Ok(Update::Missing);
        }
        if name_taken(&tx, &row.name, Some(id))? {
          return Ok(Update::DuplicateName);
        }

        let mut params: Vec<&dyn ToSql> = encode_fields(&row).to_vec();
        params.push(&id);
        tx.execute(
          "UPDATE cafe SET
             name = ?1, map_url = ?2, img_url = ?3, location = ?4,
             has_sockets = ?5, has_toilet = ?6, has_wifi = ?7,
             can_take_calls = ?8, seats = ?9, coffee_price = ?10
           WHERE id = ?11",
          params.as_slice(),
        )?;
        tx.commit()?;
        Ok(Update::Done)
      })
      .await
      .map_err(Error::from_call)?;

    match outcome {
      Update::Done => Ok(cafe.with_id(id)),
      Update::Missing => Err(cafes_core::Error::NotFound(id).into()),
      Update::DuplicateName => {
        Err(cafes_core::Error::DuplicateName(cafe.name).into())
      }
    }
  }

  async fn delete(&self, id: CafeId) -> Result<()> {
    let removed = self
      .conn
      .call(move |conn| Ok(conn.execute("DELETE FROM cafe WHERE id = ?1", [id])?))
      .await
      .map_err(Error::from_call)?;

    if removed == 0 {
      return Err(cafes_core::Error::NotFound(id).into());
    }
    Ok(())
  }
}
