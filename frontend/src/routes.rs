use dioxus::prelude::*;

use common::search_query::{SearchMode, SearchQuery};
use common::search_request::AttachmentLookup;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::SearchUrl;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/search?:..params")]
    SearchPage {
        params: SearchUrl,
    },

}

impl Route {
    pub fn search_page_from_query(q: SearchQuery, mode: SearchMode) -> Self {
        Self::SearchPage { params: SearchUrl::search(&q, mode) }
    }

    pub fn attachment_page(lookup: &AttachmentLookup) -> Self {
        Self::SearchPage { params: SearchUrl::attachment(lookup) }
    }
}
