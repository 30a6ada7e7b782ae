//! Interactive navigation over the state → site → nearby-places pipeline.
//!
//! Three stages, each backed by the cache before the network: the state
//! index under its reserved key, one site list per lowercase state name,
//! and a nearby payload attached to each drilled-into site. Soft errors
//! (unknown state, bad selection) re-prompt; scrape and API failures
//! propagate out of [`Navigator::run`] and end the session.

use std::io::{BufRead, Write};

use parkscout_core::{CacheStore, StateIndex};
use parkscout_scraper::{NpsClient, PlacesClient};

use crate::input::{self, SelectCommand, StateCommand};
use crate::render;

const STATE_PROMPT: &str = "\nEnter a state name (e.g. Michigan, michigan) or 'exit': ";
const SELECT_PROMPT: &str = "\nChoose the number for detail search or 'exit' or 'back': ";

/// Where the session goes after handling one stage.
enum Stage {
    StateSelect,
    SiteListed {
        state_key: String,
        display_name: String,
        catalog_url: String,
    },
    Exit,
}

pub struct Navigator<R, W> {
    cache: CacheStore,
    nps: NpsClient,
    places: PlacesClient,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Navigator<R, W> {
    pub fn new(cache: CacheStore, nps: NpsClient, places: PlacesClient, input: R, output: W) -> Self {
        Self {
            cache,
            nps,
            places,
            input,
            output,
        }
    }

    #[must_use]
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Runs the session until the user exits or a hard failure propagates.
    ///
    /// # Errors
    ///
    /// Scrape, API, and terminal I/O failures. Invalid user input is never
    /// an error; it re-prompts in place.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let index = self.state_index().await?;

        let mut stage = Stage::StateSelect;
        loop {
            stage = match stage {
                Stage::StateSelect => self.state_select(&index)?,
                Stage::SiteListed {
                    state_key,
                    display_name,
                    catalog_url,
                } => {
                    self.site_listed(&state_key, &display_name, &catalog_url)
                        .await?
                }
                Stage::Exit => return Ok(()),
            };
        }
    }

    /// The state index, from cache or a one-time scrape of the index page.
    async fn state_index(&mut self) -> anyhow::Result<StateIndex> {
        if let Some(index) = self.cache.state_index() {
            tracing::info!("using cached state index");
            return Ok(index.clone());
        }
        let index = self.nps.fetch_state_index().await?;
        self.cache.put_state_index(index.clone());
        Ok(index)
    }

    /// Prompts for a state name until one resolves (or the user exits).
    fn state_select(&mut self, index: &StateIndex) -> anyhow::Result<Stage> {
        loop {
            let raw = self.prompt(STATE_PROMPT)?;
            match input::parse_state_command(&raw) {
                StateCommand::Exit => return Ok(Stage::Exit),
                StateCommand::Lookup(name) => {
                    let state_key = name.to_lowercase();
                    if let Some(catalog_url) = index.get(&state_key) {
                        return Ok(Stage::SiteListed {
                            state_key,
                            display_name: name,
                            catalog_url: catalog_url.clone(),
                        });
                    }
                    writeln!(self.output, "[Error] Enter proper state name")?;
                }
            }
        }
    }

    /// Renders the state's site list (cache-or-fetch) and runs the
    /// selection prompt; drilling into a site returns here without
    /// re-rendering or re-fetching the list.
    async fn site_listed(
        &mut self,
        state_key: &str,
        display_name: &str,
        catalog_url: &str,
    ) -> anyhow::Result<Stage> {
        if self.cache.sites(state_key).is_none() {
            tracing::info!(state = state_key, "fetching site catalog");
            let sites = self.nps.fetch_sites_for_state(catalog_url).await?;
            self.cache.put_sites(state_key, sites);
        } else {
            tracing::info!(state = state_key, "using cached site catalog");
        }

        let lines: Vec<String> = self
            .cache
            .sites(state_key)
            .map(|sites| {
                sites
                    .iter()
                    .enumerate()
                    .map(|(i, site)| render::site_line(i + 1, site))
                    .collect()
            })
            .unwrap_or_default();

        writeln!(self.output, "{}", render::RULE)?;
        writeln!(self.output, "List of national sites in {display_name}")?;
        writeln!(self.output, "{}", render::RULE)?;
        for line in &lines {
            writeln!(self.output, "{line}")?;
        }

        loop {
            let raw = self.prompt(SELECT_PROMPT)?;
            match input::parse_select_command(&raw, lines.len()) {
                SelectCommand::Exit => return Ok(Stage::Exit),
                SelectCommand::Back => return Ok(Stage::StateSelect),
                SelectCommand::Select(index) => self.site_detail(state_key, index).await?,
                SelectCommand::Invalid => {
                    writeln!(self.output, "[Error] Invalid input\n\n{}", render::RULE)?;
                }
            }
        }
    }

    /// Resolves and renders nearby places for one site, memoizing the raw
    /// payload onto the cached site so it is fetched at most once per
    /// session.
    async fn site_detail(&mut self, state_key: &str, index: usize) -> anyhow::Result<()> {
        let (name, zipcode, cached) = {
            let site = self
                .cache
                .site(state_key, index)
                .ok_or_else(|| anyhow::anyhow!("selection {index} out of range for {state_key}"))?;
            (
                site.name.clone(),
                site.zipcode.clone(),
                site.nearby().cloned(),
            )
        };

        let payload = match cached {
            Some(payload) => {
                tracing::info!(site = %name, "using cached nearby places");
                payload
            }
            None => {
                tracing::info!(site = %name, origin = %zipcode, "fetching nearby places");
                let payload = self.places.nearby(&zipcode).await?;
                self.cache.set_nearby(state_key, index, payload.clone());
                payload
            }
        };

        writeln!(self.output, "{}", render::RULE)?;
        writeln!(self.output, "Places near {name}")?;
        writeln!(self.output, "{}", render::RULE)?;
        for line in render::nearby_lines(&payload) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            // EOF on the input stream ends the session like an explicit exit.
            return Ok("exit".to_owned());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }
}

#[cfg(test)]
#[path = "navigator_test.rs"]
mod tests;
