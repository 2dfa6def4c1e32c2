// tests/common/mod.rs
//
// Shared test kit: a scripted in-memory PageDriver and a fixture builder
// producing the listing markup the default selectors expect.
#![allow(dead_code)]

use std::error::Error;

use chrono::{DateTime, Duration, TimeZone, Utc};
use sortcheck::driver::PageDriver;

/// Scripted driver over a fixed set of pages. `load_more` simply advances
/// to the next scripted page; optional failure injection for the
/// navigate/load-more steps.
pub struct MockDriver {
    pages: Vec<Vec<String>>,
    current: usize,
    navigated: bool,
    pub fail_navigate: bool,
    /// Fail the `load_more` that would leave the page with this index.
    pub fail_load_more_from: Option<usize>,
}

impl MockDriver {
    pub fn new(pages: Vec<Vec<String>>) -> Self {
        Self {
            pages,
            current: 0,
            navigated: false,
            fail_navigate: false,
            fail_load_more_from: None,
        }
    }

    pub fn single_page(values: Vec<String>) -> Self {
        Self::new(vec![values])
    }
}

impl PageDriver for MockDriver {
    fn navigate(&mut self, _source: &str) -> Result<(), Box<dyn Error>> {
        if self.fail_navigate {
            return Err("connection refused".into());
        }
        self.current = 0;
        self.navigated = true;
        Ok(())
    }

    fn timestamp_values(&self) -> Vec<String> {
        assert!(self.navigated, "extraction before navigation");
        self.pages.get(self.current).cloned().unwrap_or_default()
    }

    fn has_more(&self) -> bool {
        self.current + 1 < self.pages.len()
    }

    fn load_more(&mut self) -> Result<(), Box<dyn Error>> {
        if self.fail_load_more_from == Some(self.current) {
            return Err("click did not settle".into());
        }
        if self.current + 1 >= self.pages.len() {
            return Err("no next page".into());
        }
        self.current += 1;
        Ok(())
    }
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 8, 12, 0, 0).unwrap()
}

/// `n` timestamps starting at `base_time`, stepping by `step` per item.
/// A negative hour step yields the newest-first listing shape.
pub fn hourly(n: usize, step: Duration) -> Vec<String> {
    (0..n)
        .map(|i| {
            (base_time() + step * i as i32)
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string()
        })
        .collect()
}

pub fn descending(n: usize) -> Vec<String> {
    hourly(n, Duration::hours(-1))
}

/// One listing row per timestamp, in the markup shape the default
/// selectors target.
pub fn listing_rows(timestamps: &[String]) -> String {
    let mut body = String::new();
    for (i, ts) in timestamps.iter().enumerate() {
        body.push_str(&format!(
            concat!(
                "<tr class=\"athing\" id=\"item-{i}\">",
                "<td class=\"title\"><span class=\"rank\">{rank}.</span></td>",
                "<td class=\"title\"><span class=\"titleline\">",
                "<a href=\"https://example.com/item-{i}\">Item {i}</a></span></td>",
                "</tr>\n",
                "<tr><td class=\"subtext\">",
                "<span class=\"age\" title=\"{ts}\"><a href=\"item?id={i}\">{i} hours ago</a></span>",
                "</td></tr>\n",
            ),
            i = i,
            rank = i + 1,
            ts = ts,
        ));
    }
    body
}

/// Full fixture page: listing rows plus an optional "more" link.
pub fn listing_page(timestamps: &[String], more_href: Option<&str>) -> String {
    let more = match more_href {
        Some(href) => format!("<a class=\"morelink\" href=\"{href}\" rel=\"next\">More</a>"),
        None => String::new(),
    };
    format!(
        "<!DOCTYPE html>\n<html><head><title>Listing</title></head>\n\
         <body><table><tbody>\n{}</tbody></table>\n{}</body></html>\n",
        listing_rows(timestamps),
        more
    )
}
