//! Console rendering for site lists and nearby-place results.

use parkscout_core::Site;
use serde_json::Value;

pub const RULE: &str = "----------------------------------";

/// `[<n>] <name> (<category>): <address> <zipcode>`, 1-based index.
#[must_use]
pub fn site_line(index: usize, site: &Site) -> String {
    format!("[{index}] {}", site.summary())
}

/// Renders a nearby-search payload as display lines, one per entry of the
/// `searchResults` array, substituting the `no category` / `no address` /
/// `no city` sentinels for empty fields.
#[must_use]
pub fn nearby_lines(payload: &Value) -> Vec<String> {
    let Some(results) = payload.get("searchResults").and_then(Value::as_array) else {
        return Vec::new();
    };

    results
        .iter()
        .map(|entry| {
            let name = str_at(entry, &["name"]);
            let category = or_sentinel(str_at(entry, &["fields", "group_sic_code_name"]), "no category");
            let address = or_sentinel(str_at(entry, &["fields", "address"]), "no address");
            let city = or_sentinel(str_at(entry, &["fields", "city"]), "no city");
            format!("- {name} ({category}): {address}, {city}")
        })
        .collect()
}

fn str_at<'a>(entry: &'a Value, path: &[&str]) -> &'a str {
    let mut value = entry;
    for key in path {
        match value.get(key) {
            Some(next) => value = next,
            None => return "",
        }
    }
    value.as_str().unwrap_or("")
}

fn or_sentinel<'a>(value: &'a str, sentinel: &'a str) -> &'a str {
    if value.is_empty() {
        sentinel
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn site_line_is_numbered_from_one() {
        let site = Site::new(
            "Isle Royale",
            "National Park",
            "Houghton",
            "MI",
            "49931",
            "(906) 482-0984",
        );
        assert_eq!(
            site_line(1, &site),
            "[1] Isle Royale (National Park): Houghton, MI 49931"
        );
    }

    #[test]
    fn nearby_lines_render_verbatim_when_fields_are_present() {
        let payload = json!({
            "searchResults": [{
                "name": "Quincy Mine",
                "fields": {
                    "group_sic_code_name": "Historic Site",
                    "address": "201 Royce Rd",
                    "city": "Hancock"
                }
            }]
        });
        assert_eq!(
            nearby_lines(&payload),
            vec!["- Quincy Mine (Historic Site): 201 Royce Rd, Hancock"]
        );
    }

    #[test]
    fn nearby_lines_substitute_sentinels_for_empty_fields() {
        let payload = json!({
            "searchResults": [{
                "name": "Some Shop",
                "fields": {
                    "group_sic_code_name": "",
                    "address": "",
                    "city": ""
                }
            }]
        });
        assert_eq!(
            nearby_lines(&payload),
            vec!["- Some Shop (no category): no address, no city"]
        );
    }

    #[test]
    fn nearby_lines_substitute_sentinels_for_missing_fields() {
        let payload = json!({"searchResults": [{"name": "Bare Entry"}]});
        assert_eq!(
            nearby_lines(&payload),
            vec!["- Bare Entry (no category): no address, no city"]
        );
    }

    #[test]
    fn nearby_lines_preserve_result_order() {
        let payload = json!({
            "searchResults": [
                {"name": "First", "fields": {"group_sic_code_name": "A", "address": "1 St", "city": "X"}},
                {"name": "Second", "fields": {"group_sic_code_name": "B", "address": "2 St", "city": "Y"}}
            ]
        });
        let lines = nearby_lines(&payload);
        assert_eq!(lines[0], "- First (A): 1 St, X");
        assert_eq!(lines[1], "- Second (B): 2 St, Y");
    }

    #[test]
    fn payload_without_search_results_renders_nothing() {
        assert!(nearby_lines(&json!({"info": {"statuscode": 403}})).is_empty());
    }
}
