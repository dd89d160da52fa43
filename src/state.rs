//! Shared application state for all routes. Only the notice store is mutable in process.

use crate::notice::NoticeStore;
use crate::render::Pages;
use crate::service::ContactService;

#[derive(Clone)]
pub struct AppState {
    pub contacts: ContactService,
    pub pages: Pages,
    pub notices: NoticeStore,
}

impl AppState {
    pub fn new(contacts: ContactService, pages: Pages) -> Self {
        Self {
            contacts,
            pages,
            notices: NoticeStore::new(),
        }
    }
}
