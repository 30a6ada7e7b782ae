//! Integration tests for `NpsClient`.
//!
//! Uses `wiremock` to stand up a local server serving index, catalog, and
//! detail pages, so no real network traffic is made.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use parkscout_scraper::{NpsClient, ScraperError};

fn test_client(server: &MockServer) -> NpsClient {
    NpsClient::new(&server.uri(), 5, "parkscout-test/0.1").expect("failed to build NpsClient")
}

const INDEX_PAGE: &str = r#"
<html><body>
<ul class="dropdown-menu SearchBar-keywordSearch">
  <li><a href="/state/mi/index.htm">Michigan</a></li>
  <li><a href="/state/mn/index.htm">Minnesota</a></li>
</ul>
</body></html>
"#;

const MICHIGAN_CATALOG: &str = r#"
<div class="col-md-9 col-sm-9 col-xs-12 table-cell list_left">
  <h3><a href="/isro/">Isle Royale</a></h3>
</div>
<div class="col-md-9 col-sm-9 col-xs-12 table-cell list_left">
  <h3><a href="/kewe/">Keweenaw</a></h3>
</div>
"#;

const ISLE_ROYALE_DETAIL: &str = "
<div class=\"Hero-titleContainer\">
  <h1 class=\"Hero-title\">Isle Royale</h1>
  <span class=\"Hero-designation\">National Park</span>
</div>
<p class=\"adr\">
  <span itemprop=\"addressLocality\">Houghton</span>,
  <span itemprop=\"addressRegion\">MI</span>
  <span class=\"postal-code\" itemprop=\"postalCode\"> 49931 </span>
</p>
<span itemprop=\"telephone\">(906)\n 482-0984</span>
";

const KEWEENAW_DETAIL: &str = r#"
<h1 class="Hero-title">Keweenaw</h1>
<span class="Hero-designation">National Historical Park</span>
<span itemprop="addressLocality">Calumet</span>
<span itemprop="addressRegion">MI</span>
<span class="postal-code">49913</span>
<span itemprop="telephone">906 337-3168</span>
"#;

async fn mount_page(server: &MockServer, url_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(url_path.to_owned()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_owned()))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_state_index_maps_lowercase_names_to_absolute_urls() {
    let server = MockServer::start().await;
    mount_page(&server, "/index.htm", INDEX_PAGE).await;

    let index = test_client(&server)
        .fetch_state_index()
        .await
        .expect("index builds");

    assert_eq!(index.len(), 2);
    assert_eq!(
        index.get("michigan").map(String::as_str),
        Some(format!("{}/state/mi/index.htm", server.uri()).as_str())
    );
    assert!(index.contains_key("minnesota"));
    assert!(!index.contains_key("Michigan"));
}

#[tokio::test]
async fn fetch_state_index_missing_dropdown_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.htm"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_state_index()
        .await
        .expect_err("structural mismatch must propagate");
    assert!(
        matches!(err, ScraperError::MissingElement { what, .. } if what == "state-search dropdown"),
        "expected MissingElement, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_state_index_non_2xx_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.htm"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_state_index()
        .await
        .expect_err("server error must propagate");
    assert!(
        matches!(err, ScraperError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_sites_for_state_preserves_catalog_order_and_normalizes_fields() {
    let server = MockServer::start().await;
    mount_page(&server, "/state/mi/index.htm", MICHIGAN_CATALOG).await;
    mount_page(&server, "/isro/index.htm", ISLE_ROYALE_DETAIL).await;
    mount_page(&server, "/kewe/index.htm", KEWEENAW_DETAIL).await;

    let catalog_url = format!("{}/state/mi/index.htm", server.uri());
    let sites = test_client(&server)
        .fetch_sites_for_state(&catalog_url)
        .await
        .expect("catalog resolves");

    assert_eq!(sites.len(), 2);

    assert_eq!(sites[0].name, "Isle Royale");
    assert_eq!(sites[0].category, "National Park");
    assert_eq!(sites[0].address, "Houghton, MI");
    assert_eq!(sites[0].zipcode, "49931");
    assert_eq!(sites[0].phone, "(906) 482-0984");
    assert!(sites[0].nearby().is_none());

    assert_eq!(sites[1].name, "Keweenaw");
    assert_eq!(
        sites[1].summary(),
        "Keweenaw (National Historical Park): Calumet, MI 49913"
    );
}

#[tokio::test]
async fn fetch_sites_for_state_empty_catalog_yields_empty_list() {
    let server = MockServer::start().await;
    mount_page(&server, "/state/de/index.htm", "<html><body>No sites.</body></html>").await;

    let catalog_url = format!("{}/state/de/index.htm", server.uri());
    let sites = test_client(&server)
        .fetch_sites_for_state(&catalog_url)
        .await
        .expect("empty catalog is not an error");
    assert!(sites.is_empty());
}

#[tokio::test]
async fn detail_page_missing_postal_code_fails_the_whole_state_lookup() {
    let server = MockServer::start().await;
    let catalog = r#"
<div class="col-md-9 col-sm-9 col-xs-12 table-cell list_left">
  <h3><a href="/bad/">Broken</a></h3>
</div>
"#;
    let detail = r#"
<h1 class="Hero-title">Broken</h1>
<span class="Hero-designation"></span>
<span itemprop="addressLocality">Nowhere</span>
<span itemprop="addressRegion">XX</span>
<span itemprop="telephone">000</span>
"#;
    Mock::given(method("GET"))
        .and(path("/state/xx/index.htm"))
        .respond_with(ResponseTemplate::new(200).set_body_string(catalog))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bad/index.htm"))
        .respond_with(ResponseTemplate::new(200).set_body_string(detail))
        .mount(&server)
        .await;

    let catalog_url = format!("{}/state/xx/index.htm", server.uri());
    let err = test_client(&server)
        .fetch_sites_for_state(&catalog_url)
        .await
        .expect_err("missing postal code must be fatal");
    assert!(
        matches!(err, ScraperError::MissingElement { what, .. } if what == "postal code"),
        "expected MissingElement, got: {err:?}"
    );
}

#[tokio::test]
async fn empty_designation_parses_as_empty_category() {
    let server = MockServer::start().await;
    let catalog = r#"
<div class="col-md-9 col-sm-9 col-xs-12 table-cell list_left">
  <h3><a href="/fama/">Father Marquette</a></h3>
</div>
"#;
    let detail = r#"
<h1 class="Hero-title">Father Marquette</h1>
<span class="Hero-designation"></span>
<span itemprop="addressLocality">Saint Ignace</span>
<span itemprop="addressRegion">MI</span>
<span class="postal-code">49781</span>
<span itemprop="telephone">906 643-8620</span>
"#;
    Mock::given(method("GET"))
        .and(path("/state/mi/index.htm"))
        .respond_with(ResponseTemplate::new(200).set_body_string(catalog))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fama/index.htm"))
        .respond_with(ResponseTemplate::new(200).set_body_string(detail))
        .mount(&server)
        .await;

    let catalog_url = format!("{}/state/mi/index.htm", server.uri());
    let sites = test_client(&server)
        .fetch_sites_for_state(&catalog_url)
        .await
        .expect("empty designation is valid");
    assert_eq!(sites[0].category, "");
}
