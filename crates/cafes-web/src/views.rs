//! Minimal server-rendered HTML.
//!
//! Every piece of user-supplied text goes through [`escape`].

use std::fmt::Write as _;

use axum::response::Html;
use cafes_core::{
  Cafe,
  form::{Field, RawFields, ValidationErrors, parse_flag},
};

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      c => out.push(c),
    }
  }
  out
}

fn page(title: &str, body: &str) -> Html<String> {
  Html(format!(
    "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
     <title>{title}</title>\n</head>\n<body>\n<nav><a href=\"/\">Home</a> | \
     <a href=\"/cafes\">All cafes</a> | <a href=\"/add\">Add a cafe</a></nav>\n\
     {body}\n</body>\n</html>\n",
    title = escape(title),
  ))
}

pub fn home() -> Html<String> {
  page(
    "Coffee & Wifi",
    "<h1>Coffee &amp; Wifi</h1>\n<p>Find a cafe to work from.</p>\n\
     <p><a href=\"/cafes\">Show me!</a></p>",
  )
}

pub fn message(title: &str, text: &str) -> Html<String> {
  page(title, &format!("<h1>{}</h1>\n<p>{}</p>", escape(title), escape(text)))
}

fn mark(flag: bool) -> &'static str { if flag { "✔" } else { "✘" } }

pub fn cafe_list(cafes: &[Cafe]) -> Html<String> {
  let mut body = String::from("<h1>All Cafes</h1>\n");
  if cafes.is_empty() {
    body.push_str("<p>No cafes yet.</p>\n");
    return page("All Cafes", &body);
  }

  body.push_str(
    "<table>\n<thead><tr><th>Cafe name</th><th>Location</th><th>Map</th>\
     <th>Image</th><th>Sockets</th><th>Toilet</th><th>Wifi</th><th>Calls</th>\
     <th>Seats</th><th>Coffee price</th><th></th></tr></thead>\n<tbody>\n",
  );
  for cafe in cafes {
    let _ = writeln!(
      body,
      "<tr><td>{name}</td><td>{location}</td>\
       <td><a href=\"{map}\">Map</a></td><td><a href=\"{img}\">Image</a></td>\
       <td>{sockets}</td><td>{toilet}</td><td>{wifi}</td><td>{calls}</td>\
       <td>{seats}</td><td>{price}</td>\
       <td><a href=\"/edit?id={id}\">Edit</a> \
       <form method=\"post\" action=\"/delete?id={id}\" style=\"display:inline\">\
       <button type=\"submit\">Delete</button></form></td></tr>",
      id = cafe.id,
      name = escape(&cafe.name),
      location = escape(&cafe.location),
      map = escape(&cafe.map_url),
      img = escape(&cafe.img_url),
      sockets = mark(cafe.has_sockets),
      toilet = mark(cafe.has_toilet),
      wifi = mark(cafe.has_wifi),
      calls = mark(cafe.can_take_calls),
      seats = escape(&cafe.seats),
      price = escape(&cafe.coffee_price),
    );
  }
  body.push_str("</tbody>\n</table>\n");
  page("All Cafes", &body)
}

/// Form values for pre-filling an edit form. Unset flags are omitted, the
/// same way a browser omits an unticked checkbox.
pub fn fields_of(cafe: &Cafe) -> RawFields {
  let mut raw = RawFields::new();
  let text = [
    (Field::Name, &cafe.name),
    (Field::MapUrl, &cafe.map_url),
    (Field::ImgUrl, &cafe.img_url),
    (Field::Location, &cafe.location),
    (Field::Seats, &cafe.seats),
    (Field::CoffeePrice, &cafe.coffee_price),
  ];
  for (field, value) in text {
    raw.insert(field.as_str().to_owned(), value.clone());
  }
  let flags = [
    (Field::HasSockets, cafe.has_sockets),
    (Field::HasToilet, cafe.has_toilet),
    (Field::HasWifi, cafe.has_wifi),
    (Field::CanTakeCalls, cafe.can_take_calls),
  ];
  for (field, set) in flags {
    if set {
      raw.insert(field.as_str().to_owned(), "on".to_owned());
    }
  }
  raw
}

/// The add/edit form.
///
/// `values` are echoed back so a rejected submission keeps what the user
/// typed; `errors` are shown next to their fields; `notice` is shown above
/// the form.
pub fn cafe_form(
  title: &str,
  action: &str,
  values: &RawFields,
  errors: Option<&ValidationErrors>,
  notice: Option<&str>,
) -> Html<String> {
  let mut body = format!("<h1>{}</h1>\n", escape(title));
  if let Some(notice) = notice {
    let _ = writeln!(body, "<p class=\"notice\">{}</p>", escape(notice));
  }
  let _ = writeln!(body, "<form method=\"post\" action=\"{}\">", escape(action));

  for field in Field::TEXT {
    let value = values.get(field.as_str()).map(String::as_str).unwrap_or("");
    let _ = write!(
      body,
      "<p><label for=\"{key}\">{label}</label>\n\
       <input type=\"text\" id=\"{key}\" name=\"{key}\" value=\"{value}\">",
      key = field.as_str(),
      label = escape(field.label()),
      value = escape(value),
    );
    if let Some(error) = errors.and_then(|e| e.get(field)) {
      let _ = write!(body, "\n<span class=\"error\">{}</span>", escape(&error.to_string()));
    }
    body.push_str("</p>\n");
  }

  for field in Field::FLAGS {
    let checked = parse_flag(values.get(field.as_str()).map(String::as_str));
    let _ = writeln!(
      body,
      "<p><label><input type=\"checkbox\" name=\"{key}\"{checked}> {label}</label></p>",
      key = field.as_str(),
      checked = if checked { " checked" } else { "" },
      label = escape(field.label()),
    );
  }

  body.push_str("<p><button type=\"submit\">Submit</button></p>\n</form>\n");
  page(title, &body)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escape_covers_markup_characters() {
    assert_eq!(
      escape(r#"<a href="x">Tom's & co</a>"#),
      "&lt;a href=&quot;x&quot;&gt;Tom&#39;s &amp; co&lt;/a&gt;"
    );
  }

  #[test]
  fn fields_of_omits_unset_flags() {
    let cafe = Cafe {
      id:             1,
      name:           "Lighthaus".into(),
      map_url:        "https://maps.example/l".into(),
      img_url:        "https://img.example/l.png".into(),
      location:       "Clerkenwell".into(),
      has_sockets:    true,
      has_toilet:     false,
      has_wifi:       true,
      can_take_calls: false,
      seats:          "20-30".into(),
      coffee_price:   "£2.90".into(),
    };

    let raw = fields_of(&cafe);
    assert_eq!(raw.get("has_sockets").map(String::as_str), Some("on"));
    assert!(!raw.contains_key("has_toilet"));
    assert_eq!(
      cafes_core::form::validate_and_normalize(&raw).unwrap(),
      cafe.to_new()
    );
  }
}
