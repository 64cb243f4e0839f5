//! Mapping between [`Cafe`] and rows of the `cafe` table.
//!
//! Booleans are stored as `0`/`1` integers; rusqlite converts them natively.

use cafes_core::{Cafe, NewCafe};
use rusqlite::{Row, ToSql};

/// Column list shared by every `SELECT`, in [`decode_cafe`] order.
pub const CAFE_COLUMNS: &str = "id, name, map_url, img_url, location, \
   has_sockets, has_toilet, has_wifi, can_take_calls, seats, coffee_price";

pub fn decode_cafe(row: &Row<'_>) -> rusqlite::Result<Cafe> {
  Ok(Cafe {
    id:             row.get(0)?,
    name:           row.get(1)?,
    map_url:        row.get(2)?,
    img_url:        row.get(3)?,
    location:       row.get(4)?,
    has_sockets:    row.get(5)?,
    has_toilet:     row.get(6)?,
    has_wifi:       row.get(7)?,
    can_take_calls: row.get(8)?,
    seats:          row.get(9)?,
    coffee_price:   row.get(10)?,
  })
}

/// The ten data columns as positional parameters, in `name` … `coffee_price`
/// order. Statements bind them to `?1` through `?10`.
pub fn encode_fields(cafe: &NewCafe) -> [&dyn ToSql; 10] {
  [
    &cafe.name,
    &cafe.map_url,
    &cafe.img_url,
    &cafe.location,
    &cafe.has_sockets,
    &cafe.has_toilet,
    &cafe.has_wifi,
    &cafe.can_take_calls,
    &cafe.seats,
    &cafe.coffee_price,
  ]
}
