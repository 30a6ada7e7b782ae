use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mapping from lowercase state name to the absolute URL of that state's
/// site catalog page.
pub type StateIndex = BTreeMap<String, String>;

/// One national park unit, as parsed from its detail page.
///
/// `nearby` holds the raw payload of a nearby-places search, attached at
/// most once per session the first time the site is drilled into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    /// Designation label (e.g. "National Park"). Some sites have none.
    pub category: String,
    /// Composed "city, state" string.
    pub address: String,
    pub zipcode: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nearby: Option<Value>,
}

impl Site {
    /// Builds a `Site` from raw detail-page text, applying the display
    /// normalizations: address is `city + ", " + state`, the zipcode is
    /// whitespace-trimmed, and embedded newlines are stripped from the
    /// phone number.
    #[must_use]
    pub fn new(
        name: &str,
        category: &str,
        city: &str,
        state: &str,
        zipcode: &str,
        phone: &str,
    ) -> Self {
        Self {
            name: name.to_owned(),
            category: category.to_owned(),
            address: format!("{city}, {state}"),
            zipcode: zipcode.trim().to_owned(),
            phone: phone.replace('\n', ""),
            nearby: None,
        }
    }

    /// One-line display form: `<name> (<category>): <address> <zipcode>`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} ({}): {} {}",
            self.name, self.category, self.address, self.zipcode
        )
    }

    #[must_use]
    pub fn nearby(&self) -> Option<&Value> {
        self.nearby.as_ref()
    }

    /// Attaches a nearby-places payload. The first write wins: once a
    /// payload is present it is never replaced within the session.
    pub fn set_nearby(&mut self, payload: Value) {
        if self.nearby.is_none() {
            self.nearby = Some(payload);
        }
    }
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
