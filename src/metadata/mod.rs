//! Outbound movie-metadata lookups against an OMDb-style API.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::domain::movie::MovieDetails;

/// Shown when the API has no poster for a title.
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/500x750.png?text=No+Poster";

/// An abstraction over metadata lookups so flows can be exercised without
/// the network.
#[async_trait]
pub trait MovieMetadataFetcher: Send + Sync {
    /// Fetches details for a single title. Any transport or decoding
    /// failure degrades to `None`.
    async fn fetch(&self, title: &str) -> Option<MovieDetails>;
}

#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

fn details_from_response(response: OmdbResponse) -> Option<MovieDetails> {
    if response.response != "True" {
        return None;
    }
    let poster = match response.poster {
        Some(poster) if poster != "N/A" => poster,
        _ => PLACEHOLDER_POSTER.to_string(),
    };
    Some(MovieDetails {
        title: response.title.unwrap_or_default(),
        year: response.year.unwrap_or_default(),
        plot: response.plot.unwrap_or_default(),
        poster,
    })
}

pub struct OmdbFetcher {
    base_url: Url,
    api_key: String,
    client: reqwest::Client,
}

impl OmdbFetcher {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, title: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("t", title)
            .append_pair("apikey", &self.api_key);
        url
    }
}

#[async_trait]
impl MovieMetadataFetcher for OmdbFetcher {
    async fn fetch(&self, title: &str) -> Option<MovieDetails> {
        let url = self.endpoint(title);
        let res = self.client.get(url).send().await.ok()?;
        if res.status() != 200 {
            log::warn!("Failed to fetch details for {title}: {}", res.status());
            return None;
        }
        let response = res.json::<OmdbResponse>().await.ok()?;
        details_from_response(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(response: &str, poster: Option<&str>) -> OmdbResponse {
        OmdbResponse {
            response: response.to_string(),
            title: Some("Heat".to_string()),
            year: Some("1995".to_string()),
            plot: Some("A heist unravels.".to_string()),
            poster: poster.map(|p| p.to_string()),
        }
    }

    #[test]
    fn negative_api_responses_yield_none() {
        assert_eq!(details_from_response(response("False", None)), None);
    }

    #[test]
    fn missing_or_na_posters_fall_back_to_the_placeholder() {
        let details = details_from_response(response("True", None)).unwrap();
        assert_eq!(details.poster, PLACEHOLDER_POSTER);

        let details = details_from_response(response("True", Some("N/A"))).unwrap();
        assert_eq!(details.poster, PLACEHOLDER_POSTER);
    }

    #[test]
    fn real_posters_are_kept() {
        let details =
            details_from_response(response("True", Some("http://img.example/heat.jpg"))).unwrap();
        assert_eq!(details.poster, "http://img.example/heat.jpg");
        assert_eq!(details.title, "Heat");
        assert_eq!(details.year, "1995");
    }

    #[test]
    fn endpoint_carries_title_and_key() {
        let fetcher = OmdbFetcher::new("http://www.omdbapi.com/", "k123").unwrap();
        let url = fetcher.endpoint("Blade Runner");
        assert_eq!(
            url.as_str(),
            "http://www.omdbapi.com/?t=Blade+Runner&apikey=k123"
        );
    }
}
