//! SQL schema for the café store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision; there are no migrations beyond initial creation.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids from being reused after a delete.
CREATE TABLE IF NOT EXISTS cafe (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    name           TEXT NOT NULL UNIQUE CHECK (length(name) <= 250),
    map_url        TEXT NOT NULL        CHECK (length(map_url) <= 500),
    img_url        TEXT NOT NULL        CHECK (length(img_url) <= 500),
    location       TEXT NOT NULL        CHECK (length(location) <= 250),
    has_sockets    INTEGER NOT NULL     CHECK (has_sockets IN (0, 1)),
    has_toilet     INTEGER NOT NULL     CHECK (has_toilet IN (0, 1)),
    has_wifi       INTEGER NOT NULL     CHECK (has_wifi IN (0, 1)),
    can_take_calls INTEGER NOT NULL     CHECK (can_take_calls IN (0, 1)),
    seats          TEXT NOT NULL        CHECK (length(seats) <= 250),
    coffee_price   TEXT NOT NULL        CHECK (length(coffee_price) <= 250)
);

PRAGMA user_version = 1;
";
