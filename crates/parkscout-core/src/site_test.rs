use serde_json::json;

use super::*;

fn isle_royale() -> Site {
    Site::new(
        "Isle Royale",
        "National Park",
        "Houghton",
        "MI",
        " 49931 ",
        "(906)\n 482-0984",
    )
}

#[test]
fn new_composes_address_from_city_and_state() {
    let site = isle_royale();
    assert_eq!(site.address, "Houghton, MI");
}

#[test]
fn new_trims_zipcode() {
    let site = isle_royale();
    assert_eq!(site.zipcode, "49931");
}

#[test]
fn new_strips_embedded_newlines_from_phone() {
    let site = isle_royale();
    assert_eq!(site.phone, "(906) 482-0984");
}

#[test]
fn summary_formats_display_line() {
    let site = isle_royale();
    assert_eq!(
        site.summary(),
        "Isle Royale (National Park): Houghton, MI 49931"
    );
}

#[test]
fn summary_keeps_empty_category_parens() {
    let site = Site::new("Father Marquette", "", "Saint Ignace", "MI", "49781", "");
    assert_eq!(
        site.summary(),
        "Father Marquette (): Saint Ignace, MI 49781"
    );
}

#[test]
fn set_nearby_first_write_wins() {
    let mut site = isle_royale();
    assert!(site.nearby().is_none());

    site.set_nearby(json!({"searchResults": [{"name": "first"}]}));
    site.set_nearby(json!({"searchResults": [{"name": "second"}]}));

    let payload = site.nearby().expect("payload attached");
    assert_eq!(payload["searchResults"][0]["name"], "first");
}

#[test]
fn serialization_omits_absent_nearby() {
    let site = isle_royale();
    let value = serde_json::to_value(&site).expect("site serializes");
    let obj = value.as_object().expect("object");
    assert!(!obj.contains_key("nearby"));
    assert_eq!(
        obj.keys().collect::<Vec<_>>(),
        ["address", "category", "name", "phone", "zipcode"]
    );
}

#[test]
fn serialization_round_trips_nearby() {
    let mut site = isle_royale();
    site.set_nearby(json!({"searchResults": []}));

    let raw = serde_json::to_string(&site).expect("site serializes");
    let back: Site = serde_json::from_str(&raw).expect("site deserializes");
    assert_eq!(back, site);
    assert!(back.nearby().is_some());
}
