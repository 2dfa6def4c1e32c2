// src/driver/http.rs

use std::error::Error;

use super::PageDriver;
use crate::config::consts::MAX_PAGES;
use crate::config::options::SelectorSpec;
use crate::core::html::{attr_values_by_class, link_href_by_class};
use crate::core::net::{self, PageUrl};
use crate::core::sanitize::normalize_entities;

/// Fetch-and-scan driver for server-rendered listings. "Load more" is an
/// ordinary link here, so activating it means resolving the href against
/// the current location and fetching the next document; the fetch blocks
/// until the body is fully read, which is what makes extraction safe to
/// run right after.
pub struct HttpDriver {
    selectors: SelectorSpec,
    location: Option<PageUrl>,
    doc: String,
    pages_fetched: usize,
}

impl HttpDriver {
    pub fn new(selectors: SelectorSpec) -> Self {
        Self {
            selectors,
            location: None,
            doc: s!(),
            pages_fetched: 0,
        }
    }

    fn more_href(&self) -> Option<String> {
        link_href_by_class(&self.doc, &self.selectors.more_link_class)
    }
}

impl PageDriver for HttpDriver {
    fn navigate(&mut self, source: &str) -> Result<(), Box<dyn Error>> {
        let url = PageUrl::parse(source)?;
        logd!("GET {}:{}{}", url.host, url.port, url.path);
        self.doc = net::http_get(&url)?;
        self.location = Some(url);
        self.pages_fetched = 1;
        Ok(())
    }

    fn timestamp_values(&self) -> Vec<String> {
        attr_values_by_class(
            &self.doc,
            &self.selectors.timestamp_class,
            &self.selectors.timestamp_attr,
        )
        .into_iter()
        .map(|v| normalize_entities(&v))
        .collect()
    }

    fn has_more(&self) -> bool {
        self.more_href().is_some()
    }

    fn load_more(&mut self) -> Result<(), Box<dyn Error>> {
        let here = self.location.as_ref().ok_or("load_more before navigate")?;
        let href = self.more_href().ok_or("no pagination link on current page")?;
        if self.pages_fetched >= MAX_PAGES {
            return Err(format!("pagination exceeded {MAX_PAGES} pages, giving up").into());
        }
        let next = here.resolve(&href)?;
        logd!("GET {}:{}{}", next.host, next.port, next.path);
        self.doc = net::http_get(&next)?;
        self.location = Some(next);
        self.pages_fetched += 1;
        Ok(())
    }
}
