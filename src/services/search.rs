//! Search dispatch: one request per submitted query.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::state::search::{SearchHits, SearchMode, SearchOutcome};
use crate::state::session::SessionStore;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("enter a search term")]
    EmptyQuery,
    #[error("search failed: {0}")]
    Api(#[from] ApiError),
}

/// Send `query` to the endpoint for `mode`.
///
/// The outcome is labeled with the trimmed query as sent, independent of any
/// later edits to the input.
///
/// # Errors
///
/// `EmptyQuery` for a blank query (no request is sent), otherwise the API failure.
pub async fn dispatch_search<T: Transport, S: SessionStore>(
    client: &ApiClient<T, S>,
    query: &str,
    mode: SearchMode,
) -> Result<SearchOutcome, SearchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    log::debug!("search: {} query {query:?}", mode.as_str());
    let hits = match mode {
        SearchMode::File => SearchHits::Posts(client.search_posts(query).await?),
        SearchMode::Channel => SearchHits::Channels(client.search_channels(query).await?),
    };
    Ok(SearchOutcome { query: query.to_owned(), mode, hits })
}
