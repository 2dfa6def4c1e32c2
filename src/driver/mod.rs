// src/driver/mod.rs

mod http;
pub use http::HttpDriver;

use std::error::Error;

/// The page-driving capability the collector needs: go somewhere, read the
/// rendered timestamp values, follow the "more" control. Implementations
/// own whatever session state that takes (sockets, documents, a browser
/// tab) and release it when dropped, so a check that consumes a driver
/// tears everything down on every exit path.
pub trait PageDriver {
    /// Load the document at `source`. Must succeed before anything else
    /// is asked of the driver.
    fn navigate(&mut self, source: &str) -> Result<(), Box<dyn Error>>;

    /// Timestamp attribute values on the current page, in document order.
    /// Elements missing the attribute yield an empty string; downstream
    /// parsing rejects those.
    fn timestamp_values(&self) -> Vec<String>;

    /// Whether the current page offers a control that loads more items.
    fn has_more(&self) -> bool;

    /// Activate the "more" control. Returns only once the next page has
    /// fully loaded, so a following `timestamp_values` never reads a page
    /// mid-transition.
    fn load_more(&mut self) -> Result<(), Box<dyn Error>>;
}
