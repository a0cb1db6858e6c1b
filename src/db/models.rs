use crate::service::skills::parse_skills;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbPortfolio {
    pub id: i64,
    pub public_id: String,
    pub name: String,
    pub bio: String,
    pub github: Option<String>,
    pub telegram: Option<String>,
    pub avatar: Option<String>,
    pub skills: String,
}

impl DbPortfolio {
    pub fn skill_list(&self) -> Vec<String> {
        parse_skills(&self.skills)
    }

    /// GitHub username, if one was stored.
    pub fn github_username(&self) -> Option<&str> {
        self.github.as_deref().filter(|g| !g.is_empty())
    }
}

/// Row payload for a fresh submission. `avatar` is empty when no image was sent.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPortfolio {
    pub public_id: String,
    pub name: String,
    pub bio: String,
    pub github: String,
    pub telegram: String,
    pub avatar: String,
    pub skills: String,
}
