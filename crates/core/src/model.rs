use serde::{Deserialize, Serialize};

/// Blog author as stored and rendered by the API
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip)]
    pub deleted: bool,
}

/// Blog post with an embedded author snapshot
///
/// `author` is a copy taken when the post was created or last replaced. Later
/// changes to the author record are not reflected here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub summary: String,
    pub author: Author,
    pub likes: i64,
    pub dislikes: i64,
    #[serde(skip)]
    pub deleted: bool,
}

/// Body accepted when creating an author
///
/// Any `id` sent by the client is ignored; the store assigns one.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NewAuthor {
    pub name: String,
    pub email: String,
}

/// Body accepted when creating or replacing a blog post
///
/// Creation only reads `title`, `text`, `summary` and `author_id`. A replace
/// uses every field, `id` included.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogRequest {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub summary: String,
    pub author_id: i64,
    pub likes: i64,
    pub dislikes: i64,
}

/// Field-level changes for a partial blog update
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub text: Option<String>,
    pub summary: Option<String>,
}

impl Blog {
    /// Overwrite the fields present in `patch`, leaving the rest untouched
    pub fn apply_patch(&mut self, patch: BlogPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(summary) = patch.summary {
            self.summary = summary;
        }
    }
}
