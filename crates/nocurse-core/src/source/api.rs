//! Response shape of the `list=categorymembers` query.

use serde::Deserialize;

/// One page of category members.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryMembersPage {
    #[serde(default)]
    query: Option<Query>,
    #[serde(default, rename = "continue")]
    continuation: Option<Continuation>,
}

#[derive(Debug, Default, Deserialize)]
struct Query {
    #[serde(default)]
    categorymembers: Vec<Member>,
}

#[derive(Debug, Deserialize)]
struct Member {
    title: String,
}

#[derive(Debug, Deserialize)]
struct Continuation {
    #[serde(default)]
    cmcontinue: Option<String>,
}

impl CategoryMembersPage {
    /// Member titles on this page.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.query
            .iter()
            .flat_map(|q| q.categorymembers.iter())
            .map(|m| m.title.as_str())
    }

    /// Token for the next page, absent on the last one.
    pub fn next_token(&self) -> Option<&str> {
        self.continuation
            .as_ref()
            .and_then(|c| c.cmcontinue.as_deref())
            .filter(|token| !token.is_empty())
    }
}
