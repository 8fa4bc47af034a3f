//! Paged listing of the image collection as shown by the gallery page.
//!
//! Each fetch gets a sequence number and only the reply to the latest one is
//! applied, so a reload started while a page is loading wins over it.

use std::rc::Rc;

use crate::model::image_record::{ImagePage, ImageRecord};

/// One page fetch handed to the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    seq: u64,
    /// Cursor of the page; `None` fetches the first page and replaces the list.
    pub after: Option<String>,
}

impl PageRequest {
    pub fn appends(&self) -> bool {
        self.after.is_some()
    }
}

#[derive(Debug, Default)]
pub struct Listing {
    records: Rc<Vec<ImageRecord>>,
    after: Option<String>,
    latest: u64,
    loading: bool,
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Rc<Vec<ImageRecord>> {
        self.records.clone()
    }

    pub fn has_more(&self) -> bool {
        self.after.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Starts fetching the first page. Replies to earlier requests are dropped.
    pub fn reload(&mut self) -> PageRequest {
        self.start(None)
    }

    /// Starts fetching the next page, unless a fetch is running or the
    /// collection is exhausted.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if self.loading {
            return None;
        }
        let cursor = self.after.clone()?;
        Some(self.start(Some(cursor)))
    }

    /// Applies the reply to `request`. Returns `false` when it was superseded.
    pub fn accept(&mut self, request: &PageRequest, page: ImagePage) -> bool {
        if !self.settle(request) {
            return false;
        }
        let mut records = if request.appends() {
            self.records.as_ref().clone()
        } else {
            Vec::new()
        };
        records.extend(page.data);
        self.records = Rc::new(records);
        self.after = page.after;
        true
    }

    /// Records that `request` failed. Returns `false` when it was superseded.
    pub fn fail(&mut self, request: &PageRequest) -> bool {
        self.settle(request)
    }

    fn start(&mut self, after: Option<String>) -> PageRequest {
        self.latest += 1;
        self.loading = true;
        PageRequest {
            seq: self.latest,
            after,
        }
    }

    fn settle(&mut self, request: &PageRequest) -> bool {
        if request.seq != self.latest {
            log::debug!("dropping superseded page request {}", request.seq);
            return false;
        }
        self.loading = false;
        true
    }
}
