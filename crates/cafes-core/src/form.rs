//! Validation of submitted café forms.
//!
//! Raw submissions arrive as string pairs decoded from
//! `application/x-www-form-urlencoded`. [`validate_and_normalize`] turns them
//! into a [`NewCafe`] or reports every failing field at once so the form can
//! be redisplayed with inline messages.

use std::{
  collections::{BTreeMap, HashMap},
  fmt,
};

use url::Url;

use crate::cafe::NewCafe;

/// Field-value pairs as submitted by the browser.
pub type RawFields = HashMap<String, String>;

// ─── Fields ──────────────────────────────────────────────────────────────────

/// A data field of the café form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
  Name,
  MapUrl,
  ImgUrl,
  Location,
  HasSockets,
  HasToilet,
  HasWifi,
  CanTakeCalls,
  Seats,
  CoffeePrice,
}

impl Field {
  /// Text fields, in form order.
  pub const TEXT: [Field; 6] = [
    Field::Name,
    Field::MapUrl,
    Field::ImgUrl,
    Field::Location,
    Field::Seats,
    Field::CoffeePrice,
  ];

  /// Checkbox flags, in form order.
  pub const FLAGS: [Field; 4] = [
    Field::HasSockets,
    Field::HasToilet,
    Field::HasWifi,
    Field::CanTakeCalls,
  ];

  /// The form key, identical to the column name.
  pub fn as_str(self) -> &'static str {
    match self {
      Field::Name => "name",
      Field::MapUrl => "map_url",
      Field::ImgUrl => "img_url",
      Field::Location => "location",
      Field::HasSockets => "has_sockets",
      Field::HasToilet => "has_toilet",
      Field::HasWifi => "has_wifi",
      Field::CanTakeCalls => "can_take_calls",
      Field::Seats => "seats",
      Field::CoffeePrice => "coffee_price",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Field::Name => "Cafe name",
      Field::MapUrl => "Map URL",
      Field::ImgUrl => "Image URL",
      Field::Location => "Location",
      Field::HasSockets => "Has sockets?",
      Field::HasToilet => "Has toilet?",
      Field::HasWifi => "Has wifi?",
      Field::CanTakeCalls => "Can take calls?",
      Field::Seats => "Seats",
      Field::CoffeePrice => "Coffee price",
    }
  }

  /// Maximum length in characters, matching the column definitions.
  pub fn max_len(self) -> usize {
    match self {
      Field::MapUrl | Field::ImgUrl => 500,
      _ => 250,
    }
  }

  fn is_url(self) -> bool { matches!(self, Field::MapUrl | Field::ImgUrl) }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
  MissingField,
  InvalidUrl,
  TooLong { max: usize },
}

impl fmt::Display for FieldError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FieldError::MissingField => f.write_str("This field is required."),
      FieldError::InvalidUrl => f.write_str("Invalid URL."),
      FieldError::TooLong { max } => {
        write!(f, "Must be at most {max} characters.")
      }
    }
  }
}

/// Every rejected field of one submission, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
  pub fn get(&self, field: Field) -> Option<&FieldError> { self.0.get(&field) }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
    self.0.iter().map(|(f, e)| (*f, e))
  }

  fn insert(&mut self, field: Field, error: FieldError) {
    self.0.insert(field, error);
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, (field, error)) in self.iter().enumerate() {
      if i > 0 {
        f.write_str("; ")?;
      }
      write!(f, "{field}: {error}")?;
    }
    Ok(())
  }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Check and normalise a raw submission.
///
/// Text fields are trimmed and must be non-empty; URL fields must be absolute
/// with a host. Flags are checkbox-style: an absent flag is `false`, not an
/// error. Keys that are not café fields are ignored.
pub fn validate_and_normalize(
  raw: &RawFields,
) -> Result<NewCafe, ValidationErrors> {
  let mut errors = ValidationErrors::default();
  let mut text = |field: Field| -> String {
    match check_text(field, raw.get(field.as_str()).map(String::as_str)) {
      Ok(value) => value,
      Err(e) => {
        errors.insert(field, e);
        String::new()
      }
    }
  };

  let name = text(Field::Name);
  let map_url = text(Field::MapUrl);
  let img_url = text(Field::ImgUrl);
  let location = text(Field::Location);
  let seats = text(Field::Seats);
  let coffee_price = text(Field::CoffeePrice);

  if !errors.is_empty() {
    return Err(errors);
  }

  let flag = |field: Field| parse_flag(raw.get(field.as_str()).map(String::as_str));

  Ok(NewCafe {
    name,
    map_url,
    img_url,
    location,
    has_sockets: flag(Field::HasSockets),
    has_toilet: flag(Field::HasToilet),
    has_wifi: flag(Field::HasWifi),
    can_take_calls: flag(Field::CanTakeCalls),
    seats,
    coffee_price,
  })
}

fn check_text(field: Field, value: Option<&str>) -> Result<String, FieldError> {
  let value = value.map(str::trim).unwrap_or_default();
  if value.is_empty() {
    return Err(FieldError::MissingField);
  }
  let max = field.max_len();
  if value.chars().count() > max {
    return Err(FieldError::TooLong { max });
  }
  if field.is_url() && !is_absolute_url(value) {
    return Err(FieldError::InvalidUrl);
  }
  Ok(value.to_owned())
}

fn is_absolute_url(value: &str) -> bool {
  Url::parse(value)
    .ok()
    .and_then(|u| u.host_str().map(|h| !h.is_empty()))
    .unwrap_or(false)
}

/// Checkbox presence means `true`. The explicit falsy spellings keep the older
/// `1`/`0` select-box submissions working.
pub fn parse_flag(value: Option<&str>) -> bool {
  let Some(value) = value else { return false };
  let value = value.trim();
  !(value.is_empty()
    || value == "0"
    || value.eq_ignore_ascii_case("false")
    || value.eq_ignore_ascii_case("off")
    || value.eq_ignore_ascii_case("no"))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn blue_bottle() -> RawFields {
    [
      ("name", "Blue Bottle"),
      ("map_url", "https://maps.example/x"),
      ("img_url", "https://img.example/y"),
      ("location", "SF"),
      ("seats", "10-20"),
      ("coffee_price", "$4"),
      ("has_wifi", "on"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v.to_owned()))
    .collect()
  }

  #[test]
  fn checkbox_presence_sets_only_submitted_flags() {
    let cafe = validate_and_normalize(&blue_bottle()).unwrap();
    assert!(cafe.has_wifi);
    assert!(!cafe.has_sockets);
    assert!(!cafe.has_toilet);
    assert!(!cafe.can_take_calls);
    assert_eq!(cafe.name, "Blue Bottle");
    assert_eq!(cafe.seats, "10-20");
    assert_eq!(cafe.coffee_price, "$4");
  }

  #[test]
  fn malformed_map_url_is_the_only_error() {
    let mut raw = blue_bottle();
    raw.insert("map_url".into(), "not-a-url".into());

    let errors = validate_and_normalize(&raw).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::MapUrl), Some(&FieldError::InvalidUrl));
  }

  #[test]
  fn absent_location_is_missing() {
    let mut raw = blue_bottle();
    raw.remove("location");

    let errors = validate_and_normalize(&raw).unwrap_err();
    assert_eq!(errors.get(Field::Location), Some(&FieldError::MissingField));
  }

  #[test]
  fn blank_text_counts_as_missing() {
    let mut raw = blue_bottle();
    raw.insert("seats".into(), "   ".into());

    let errors = validate_and_normalize(&raw).unwrap_err();
    assert_eq!(errors.get(Field::Seats), Some(&FieldError::MissingField));
  }

  #[test]
  fn errors_are_collected_across_fields() {
    let mut raw = blue_bottle();
    raw.remove("name");
    raw.insert("img_url".into(), "/relative/path.png".into());
    raw.insert("coffee_price".into(), String::new());

    let errors = validate_and_normalize(&raw).unwrap_err();
    let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
    assert_eq!(fields, vec![Field::Name, Field::ImgUrl, Field::CoffeePrice]);
    assert_eq!(errors.get(Field::ImgUrl), Some(&FieldError::InvalidUrl));
  }

  #[test]
  fn url_without_host_is_rejected() {
    let mut raw = blue_bottle();
    raw.insert("img_url".into(), "mailto:owner@example.com".into());

    let errors = validate_and_normalize(&raw).unwrap_err();
    assert_eq!(errors.get(Field::ImgUrl), Some(&FieldError::InvalidUrl));
  }

  #[test]
  fn overlong_name_is_rejected() {
    let mut raw = blue_bottle();
    raw.insert("name".into(), "x".repeat(251));

    let errors = validate_and_normalize(&raw).unwrap_err();
    assert_eq!(errors.get(Field::Name), Some(&FieldError::TooLong { max: 250 }));
  }

  #[test]
  fn text_is_trimmed() {
    let mut raw = blue_bottle();
    raw.insert("location".into(), "  Shoreditch \n".into());

    let cafe = validate_and_normalize(&raw).unwrap();
    assert_eq!(cafe.location, "Shoreditch");
  }

  #[test]
  fn legacy_integer_flags() {
    let mut raw = blue_bottle();
    raw.insert("has_wifi".into(), "0".into());
    raw.insert("has_toilet".into(), "1".into());
    raw.insert("has_sockets".into(), "off".into());

    let cafe = validate_and_normalize(&raw).unwrap();
    assert!(!cafe.has_wifi);
    assert!(cafe.has_toilet);
    assert!(!cafe.has_sockets);
  }

  #[test]
  fn unknown_keys_are_ignored() {
    let mut raw = blue_bottle();
    raw.insert("id".into(), "17".into());
    raw.insert("submit".into(), "Submit".into());

    assert!(validate_and_normalize(&raw).is_ok());
  }
}
