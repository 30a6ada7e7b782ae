//! HTTP clients for parkscout: national-park-service page scraping and the
//! nearby-places radius search.

mod error;
mod html;
mod nps;
mod places;

pub use error::ScraperError;
pub use nps::NpsClient;
pub use places::PlacesClient;
