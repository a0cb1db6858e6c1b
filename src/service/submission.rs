use crate::db::models::NewPortfolio;
use std::collections::HashSet;
use uuid::Uuid;

const GITHUB_PREFIX: &str = "https://github.com/";

/// Raw form fields of a portfolio submission. Missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioSubmission {
    pub name: String,
    pub bio: String,
    pub github: String,
    pub telegram: String,
    pub skills: String,
}

impl PortfolioSubmission {
    /// Assign a text field by its form name. Unknown names are ignored.
    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "bio" => self.bio = value,
            "github" => self.github = value,
            "telegram" => self.telegram = value,
            "skills" => self.skills = value,
            _ => {}
        }
    }

    /// Trim every field, normalize the GitHub link and attach the record ids.
    pub fn into_new_portfolio(self, public_id: Uuid, avatar: String) -> NewPortfolio {
        NewPortfolio {
            public_id: public_id.to_string(),
            name: self.name.trim().to_string(),
            bio: self.bio.trim().to_string(),
            github: normalize_github(&self.github),
            telegram: self.telegram.trim().to_string(),
            avatar,
            skills: self.skills.trim().to_string(),
        }
    }
}

/// Collects submitted form fields in arrival order.
///
/// A field sent more than once keeps its first value.
#[derive(Debug, Default)]
pub struct SubmissionFields {
    submission: PortfolioSubmission,
    seen: HashSet<String>,
}

impl SubmissionFields {
    pub fn push(&mut self, name: &str, value: String) {
        if self.seen.insert(name.to_string()) {
            self.submission.set_field(name, value);
        }
    }

    pub fn finish(self) -> PortfolioSubmission {
        self.submission
    }
}

/// Reduce a GitHub profile link or username to the bare username.
pub fn normalize_github(raw: &str) -> String {
    raw.trim().replace(GITHUB_PREFIX, "").replace('/', "")
}
