//! Data handed to the templates. Everything here is fully prepared; the
//! templates only lay it out.

use crate::api::github_api::Project;
use crate::db::models::DbPortfolio;
use crate::service::icons::SkillIcons;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillBadge {
    pub name: String,
    pub icon: Option<String>,
}

impl SkillBadge {
    pub fn badges(skills: Vec<String>, icons: &SkillIcons) -> Vec<SkillBadge> {
        skills
            .into_iter()
            .map(|name| SkillBadge {
                icon: icons.icon_for(&name).map(str::to_string),
                name,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PortfolioCard {
    pub public_id: String,
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub skills: Vec<SkillBadge>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub portfolios: Vec<PortfolioCard>,
    pub tool_icons: BTreeMap<String, String>,
    /// Normalized filter value, empty when unfiltered.
    pub current_skills: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailPage {
    pub name: String,
    pub bio: String,
    pub github: String,
    pub telegram: String,
    pub avatar: String,
    pub skills: Vec<SkillBadge>,
    pub projects: Vec<Project>,
    pub tool_icons: BTreeMap<String, String>,
}

impl DetailPage {
    pub fn new(row: DbPortfolio, projects: Vec<Project>, icons: &SkillIcons) -> Self {
        let skills = SkillBadge::badges(row.skill_list(), icons);
        DetailPage {
            name: row.name,
            bio: row.bio,
            github: row.github.unwrap_or_default(),
            telegram: row.telegram.unwrap_or_default(),
            avatar: row.avatar.unwrap_or_default(),
            skills,
            projects,
            tool_icons: icons.as_map().clone(),
        }
    }
}
