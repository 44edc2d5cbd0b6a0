//! Paginated device listing.
//!
//! The listing is a one-way lazy sequence: identifiers are buffered one
//! page at a time and the next page is fetched only when the buffer runs
//! dry. Once the last page (no `next_page` link) is drained, or a page
//! fails to load, the iterator is done for good. A link pointing away from
//! the API host counts as a failed page.

use std::iter::FusedIterator;

use reqwest::{Method, StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use ua_core::error::UaResult;
use ua_core::platform::Platform;

use crate::client::AirshipClient;
use crate::response::DevicePage;

enum Cursor {
    /// Identifiers of the current page, plus the link to the following one.
    /// Relative links resolve against `page`.
    Buffered {
        page: Url,
        identifiers: std::vec::IntoIter<String>,
        next_page: Option<String>,
    },
    Done,
}

/// Iterator over every identifier registered for a platform.
pub struct DeviceList<'a> {
    client: &'a AirshipClient,
    platform: Platform,
    total: u64,
    cursor: Cursor,
}

impl<'a> DeviceList<'a> {
    /// Create the listing and load its first page.
    pub(crate) fn new(client: &'a AirshipClient, platform: Platform) -> UaResult<Self> {
        let mut list = Self {
            client,
            platform,
            total: 0,
            cursor: Cursor::Done,
        };
        list.load_page(client.endpoints().device_collection(platform).clone())?;
        Ok(list)
    }

    /// Platform being listed.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Total collection size reported by the most recently loaded page.
    ///
    /// This mirrors the wire format: it is the count of the whole
    /// collection as of the last fetch, not the number of identifiers
    /// remaining or already yielded.
    pub fn len(&self) -> u64 {
        self.total
    }

    /// Whether the last loaded page reported an empty collection.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    fn load_page(&mut self, url: Url) -> UaResult<()> {
        let response = self
            .client
            .request(Method::GET, url.clone(), None)?
            .expect_status(&[StatusCode::OK])?;
        let page = DevicePage::parse(&response.json::<Value>()?, self.platform)?;

        debug!(
            "loaded {} page: {} identifiers, total {}, more={}",
            self.platform,
            page.identifiers.len(),
            page.count,
            page.next_page.is_some()
        );

        self.total = page.count;
        self.cursor = Cursor::Buffered {
            page: url,
            identifiers: page.identifiers.into_iter(),
            next_page: page.next_page,
        };
        Ok(())
    }
}

impl Iterator for DeviceList<'_> {
    type Item = UaResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let resolved = match &mut self.cursor {
                Cursor::Done => return None,
                Cursor::Buffered {
                    page,
                    identifiers,
                    next_page,
                } => {
                    if let Some(id) = identifiers.next() {
                        return Some(Ok(id));
                    }
                    next_page
                        .take()
                        .map(|link| self.client.endpoints().resolve(&link, page))
                }
            };

            let Some(resolved) = resolved else {
                self.cursor = Cursor::Done;
                return None;
            };

            let loaded = resolved.and_then(|url| self.load_page(url));
            if let Err(e) = loaded {
                self.cursor = Cursor::Done;
                return Some(Err(e));
            }
        }
    }
}

impl FusedIterator for DeviceList<'_> {}

impl std::fmt::Debug for DeviceList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceList")
            .field("platform", &self.platform)
            .field("total", &self.total)
            .field("done", &matches!(self.cursor, Cursor::Done))
            .finish()
    }
}
