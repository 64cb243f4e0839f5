//! The `Cafe` record and its pre-persistence candidate, `NewCafe`.

use serde::{Deserialize, Serialize};

/// Primary key of a persisted café. Assigned by the store on insert.
pub type CafeId = i64;

/// A validated café that has not been persisted yet.
///
/// Produced by [`crate::form::validate_and_normalize`] and consumed by
/// [`crate::store::CafeStore::create`] and [`crate::store::CafeStore::update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCafe {
  pub name:           String,
  pub map_url:        String,
  pub img_url:        String,
  pub location:       String,
  pub has_sockets:    bool,
  pub has_toilet:     bool,
  pub has_wifi:       bool,
  pub can_take_calls: bool,
  /// Free text, e.g. `"20-30"`.
  pub seats:          String,
  /// Free text, e.g. `"£2.50"`.
  pub coffee_price:   String,
}

impl NewCafe {
  /// Attach a store-assigned id, producing the persisted form.
  pub fn with_id(self, id: CafeId) -> Cafe {
    Cafe {
      id,
      name: self.name,
      map_url: self.map_url,
      img_url: self.img_url,
      location: self.location,
      has_sockets: self.has_sockets,
      has_toilet: self.has_toilet,
      has_wifi: self.has_wifi,
      can_take_calls: self.can_take_calls,
      seats: self.seats,
      coffee_price: self.coffee_price,
    }
  }
}

/// A café as stored. `id` never changes once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cafe {
  pub id:             CafeId,
  pub name:           String,
  pub map_url:        String,
  pub img_url:        String,
  pub location:       String,
  pub has_sockets:    bool,
  pub has_toilet:     bool,
  pub has_wifi:       bool,
  pub can_take_calls: bool,
  pub seats:          String,
  pub coffee_price:   String,
}

impl Cafe {
  /// Strip the id, e.g. to pre-fill an edit form.
  pub fn to_new(&self) -> NewCafe {
    NewCafe {
      name:           self.name.clone(),
      map_url:        self.map_url.clone(),
      img_url:        self.img_url.clone(),
      location:       self.location.clone(),
      has_sockets:    self.has_sockets,
      has_toilet:     self.has_toilet,
      has_wifi:       self.has_wifi,
      can_take_calls: self.can_take_calls,
      seats:          self.seats.clone(),
      coffee_price:   self.coffee_price.clone(),
    }
  }
}
