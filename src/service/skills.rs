/// Split a stored comma-separated skills string into trimmed, non-empty tokens.
///
/// Every read site goes through this function so that listing, filtering and
/// the detail view agree on what a record's skills are.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Case-insensitive exact match against one parsed skill token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillFilter {
    needle: String,
}

impl SkillFilter {
    /// Build a filter from the raw `skills` query value; blank means no filter.
    pub fn from_query(raw: Option<&str>) -> Option<Self> {
        let needle = raw?.trim().to_lowercase();
        (!needle.is_empty()).then_some(Self { needle })
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, skills: &[String]) -> bool {
        skills.iter().any(|s| s.to_lowercase() == self.needle)
    }
}
