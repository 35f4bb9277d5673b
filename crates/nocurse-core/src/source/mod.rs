//! Remote glossary source.
//!
//! The lexicon builder only needs the set of titles in a category; how they
//! are fetched is hidden behind [`GlossarySource`]. [`WiktionarySource`]
//! collects them from a MediaWiki site with two independent strategies:
//!
//! - walking the HTML category listing page by page, and
//! - paging through the `list=categorymembers` query API.
//!
//! Both run to completion and their results are merged. Failures are logged
//! and shrink the result; they never escape.

pub mod api;
pub mod html;
pub mod retry;

use std::collections::HashSet;

use async_trait::async_trait;
use regex::Regex;
use url::Url;

use crate::config::SourceConfig;
use crate::error::{FetchError, FetchResult};

use api::CategoryMembersPage;
use retry::RetryPolicy;

/// Supplier of raw category member titles.
#[async_trait]
pub trait GlossarySource: Send + Sync {
    /// All titles the source can currently provide. Empty on total failure.
    async fn fetch_category_words(&self) -> HashSet<String>;
}

/// [`GlossarySource`] backed by a MediaWiki category, fetched over HTTP.
#[derive(Debug, Clone)]
pub struct WiktionarySource {
    client: reqwest::Client,
    config: SourceConfig,
    start: Url,
    retry: RetryPolicy,
    next_link: Regex,
}

impl WiktionarySource {
    /// Build a source with an HTTP client using the configured timeout and user agent.
    ///
    /// Fails if either configured URL does not parse.
    pub fn new(config: SourceConfig) -> FetchResult<Self> {
        let start = Url::parse(&config.category_url)?;
        Url::parse(&config.api_url)?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            start,
            retry: RetryPolicy::from_config(&config),
            next_link: html::next_link_pattern(&config.next_page_marker),
            config,
        })
    }

    /// Titles gathered by following the HTML category pages.
    ///
    /// Stops when a page has no next-page link, when a request keeps
    /// failing, or when the next link points at a page already visited.
    #[tracing::instrument(skip(self), fields(start = %self.config.category_url))]
    pub async fn fetch_html_titles(&self) -> HashSet<String> {
        let mut titles = HashSet::new();
        let mut url = self.start.clone();
        let mut visited = HashSet::new();

        loop {
            if !visited.insert(url.to_string()) {
                tracing::warn!(url = %url, "pagination returned to a visited page");
                break;
            }

            let Some(page) = self.retry.run("category page", || self.get_text(&url)).await else {
                break;
            };
            let members = html::category_members(&page);
            tracing::debug!(url = %url, members = members.len(), "category page fetched");
            titles.extend(members);

            let Some(href) = html::next_page_href(&self.next_link, &page) else {
                break;
            };
            match url.join(&href) {
                Ok(mut next) => {
                    next.set_fragment(None);
                    url = next;
                }
                Err(e) => {
                    tracing::warn!(href = %href, error = %e, "unusable next page link");
                    break;
                }
            }
        }

        tracing::info!(pages = visited.len(), titles = titles.len(), "html traversal finished");
        titles
    }

    /// Titles gathered from the category members query API.
    #[tracing::instrument(skip(self), fields(api = %self.config.api_url))]
    pub async fn fetch_api_titles(&self) -> HashSet<String> {
        let mut titles = HashSet::new();
        let mut token: Option<String> = None;
        let mut seen_tokens = HashSet::new();
        let mut pages = 0usize;

        loop {
            let Some(page) = self
                .retry
                .run("category api", || self.query_page(token.as_deref()))
                .await
            else {
                break;
            };
            pages += 1;
            titles.extend(page.titles().map(str::to_string));

            match page.next_token() {
                Some(next) if seen_tokens.insert(next.to_string()) => {
                    token = Some(next.to_string());
                }
                Some(next) => {
                    tracing::warn!(token = next, "continuation token repeated");
                    break;
                }
                None => break,
            }
        }

        tracing::info!(pages, titles = titles.len(), "api paging finished");
        titles
    }

    async fn get_text(&self, url: &Url) -> FetchResult<String> {
        let response = self.client.get(url.clone()).send().await?;
        let response = Self::check_status(response)?;
        Ok(response.text().await?)
    }

    async fn query_page(&self, token: Option<&str>) -> FetchResult<CategoryMembersPage> {
        let limit = self.config.page_limit.to_string();
        let mut params = vec![
            ("action", "query"),
            ("format", "json"),
            ("list", "categorymembers"),
            ("cmtitle", self.config.category_title.as_str()),
            ("cmlimit", limit.as_str()),
            ("cmtype", "page"),
            ("cmprop", "title"),
        ];
        if let Some(token) = token {
            params.push(("cmcontinue", token));
        }

        let response = self
            .client
            .get(&self.config.api_url)
            .query(&params)
            .send()
            .await?;
        let body = Self::check_status(response)?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn check_status(response: reqwest::Response) -> FetchResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(FetchError::Status {
                status,
                url: response.url().to_string(),
            })
        }
    }
}

#[async_trait]
impl GlossarySource for WiktionarySource {
    #[tracing::instrument(skip(self))]
    async fn fetch_category_words(&self) -> HashSet<String> {
        let html = async {
            if self.config.html {
                self.fetch_html_titles().await
            } else {
                HashSet::new()
            }
        };
        let api = async {
            if self.config.api {
                self.fetch_api_titles().await
            } else {
                HashSet::new()
            }
        };
        let (mut titles, api_titles) = tokio::join!(html, api);
        titles.extend(api_titles);
        tracing::info!(titles = titles.len(), "category titles collected");
        titles
    }
}
