// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use url::Url;

use crate::error::FetchError;
use crate::http::HttpClient;

use super::record::RawEpisode;

const EPISODES_PATH: &str = "episodes";

/// Sort direction understood by the episode API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query parameters for the episode listing
#[derive(Debug, Clone)]
pub struct EpisodeQuery {
    /// Maximum number of records (`_limit`)
    pub limit: usize,
    /// Field to sort by (`_sort`)
    pub sort: String,
    /// Sort direction (`_order`)
    pub order: SortOrder,
}

impl Default for EpisodeQuery {
    fn default() -> Self {
        Self {
            limit: 12,
            sort: "published_at".to_string(),
            order: SortOrder::Desc,
        }
    }
}

/// Build the episode listing URL for an API base URL
pub fn episodes_url(api_base: &str, query: &EpisodeQuery) -> Result<Url, FetchError> {
    let mut base = Url::parse(api_base)?;

    // Url::join replaces the last segment unless the path ends in '/'
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let mut url = base.join(EPISODES_PATH)?;
    url.query_pairs_mut()
        .append_pair("_limit", &query.limit.to_string())
        .append_pair("_sort", &query.sort)
        .append_pair("_order", query.order.as_str());

    Ok(url)
}

/// Fetch and decode the episode listing
pub async fn fetch_episodes<C: HttpClient>(
    client: &C,
    url: &Url,
) -> Result<Vec<RawEpisode>, FetchError> {
    let response = client
        .get(url.as_str())
        .await
        .map_err(|e| FetchError::RequestFailed {
            url: url.to_string(),
            source: e,
        })?;

    if !response.is_success() {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    parse_episodes(&response.body, url)
}

/// Decode a JSON array of episode records
pub fn parse_episodes(body: &[u8], url: &Url) -> Result<Vec<RawEpisode>, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::InvalidBody {
        url: url.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::http::HttpResponse;
    use async_trait::async_trait;
    use bytes::Bytes;

    struct MockHttpClient {
        status: u16,
        body: &'static str,
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn get(&self, _url: &str) -> Result<HttpResponse, reqwest::Error> {
            Ok(HttpResponse {
                status: self.status,
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }

    fn api_url() -> Url {
        episodes_url("http://localhost:3333", &EpisodeQuery::default()).unwrap()
    }

    #[test]
    fn episodes_url_carries_query_parameters() {
        let url = api_url();
        assert_eq!(
            url.as_str(),
            "http://localhost:3333/episodes?_limit=12&_sort=published_at&_order=desc"
        );
    }

    #[test]
    fn episodes_url_keeps_base_path() {
        let query = EpisodeQuery {
            limit: 3,
            sort: "title".to_string(),
            order: SortOrder::Asc,
        };

        let url = episodes_url("https://example.com/api", &query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/api/episodes?_limit=3&_sort=title&_order=asc"
        );

        let url = episodes_url("https://example.com/api/", &query).unwrap();
        assert_eq!(url.path(), "/api/episodes");
    }

    #[test]
    fn episodes_url_rejects_garbage() {
        let result = episodes_url("not a url", &EpisodeQuery::default());
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn fetch_decodes_records_in_order() {
        let client = MockHttpClient {
            status: 200,
            body: r#"[{"id": "first"}, {"id": "second"}]"#,
        };

        let records = fetch_episodes(&client, &api_url()).await.unwrap();
        let ids: Vec<_> = records
            .iter()
            .map(|r| r.id.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn fetch_fails_on_error_status() {
        let client = MockHttpClient {
            status: 503,
            body: "[]",
        };

        let result = fetch_episodes(&client, &api_url()).await;
        assert!(matches!(
            result,
            Err(FetchError::HttpStatus { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn fetch_fails_on_non_list_body() {
        let client = MockHttpClient {
            status: 200,
            body: r#"{"error": "nope"}"#,
        };

        let result = fetch_episodes(&client, &api_url()).await;
        assert!(matches!(result, Err(FetchError::InvalidBody { .. })));
    }
}
