//! Deserialized representation of a site dump file.
//!
//! Field names mirror the attribute names of the upstream XML export, so the
//! JSON form of a dump is a mechanical transliteration of the exported rows.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a dump file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One complete site dump: site metadata plus record tables.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SiteDump {
    pub site: SiteRecord,
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub tags: Vec<TagRecord>,
    #[serde(default)]
    pub badges: Vec<BadgeRecord>,
    #[serde(default)]
    pub posts: Vec<PostRecord>,
    #[serde(default)]
    pub comments: Vec<CommentRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SiteRecord {
    pub name: String,
    pub long_name: Option<String>,
    #[serde(default)]
    pub is_meta: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRecord {
    pub id: Option<i64>,
    pub display_name: Option<String>,
    pub creation_date: Option<String>,
    pub reputation: Option<i64>,
    pub location: Option<String>,
    pub website_url: Option<String>,
    pub about_me: Option<String>,
    pub views: Option<i64>,
    pub up_votes: Option<i64>,
    pub down_votes: Option<i64>,
    pub last_access_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagRecord {
    pub tag_name: Option<String>,
    pub excerpt_post_id: Option<i64>,
    pub wiki_post_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BadgeRecord {
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PostRecord {
    pub id: Option<i64>,
    /// 1 = question, 2 = answer; other values are skipped.
    pub post_type_id: Option<i64>,
    pub parent_id: Option<i64>,
    pub accepted_answer_id: Option<i64>,
    pub owner_user_id: Option<i64>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub score: Option<i64>,
    pub view_count: Option<i64>,
    pub favorite_count: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub creation_date: Option<String>,
    pub last_edit_date: Option<String>,
    pub last_activity_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommentRecord {
    pub id: Option<i64>,
    pub post_id: Option<i64>,
    pub user_id: Option<i64>,
    pub text: Option<String>,
    pub score: Option<i64>,
    pub creation_date: Option<String>,
}

/// Load a dump JSON file from disk.
pub fn load_dump(path: &Path) -> Result<SiteDump, LoadError> {
    let content = std::fs::read_to_string(path)?;
    let dump: SiteDump = serde_json::from_str(&content)?;
    Ok(dump)
}
