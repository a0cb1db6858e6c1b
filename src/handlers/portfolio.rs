use axum::{
    extract::{Path, RawQuery, State},
    response::{Html, Redirect},
};
use tracing::info;
use uuid::Uuid;

use crate::db::models::DbPortfolio;
use crate::middleware::submission::SubmissionPreprocess;
use crate::render::{DETAIL_TEMPLATE, FORM_TEMPLATE, LISTING_TEMPLATE};
use crate::service::icons::SkillIcons;
use crate::service::skills::SkillFilter;
use crate::types::views::{DetailPage, ListingPage, PortfolioCard, SkillBadge};
use crate::{HubError, router::HubState};

const SKILLS_PARAM: &str = "skills";

/// First `skills` value of the query string. Repeated keys are not an error.
pub fn skills_param(query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(k, _)| k == SKILLS_PARAM)
        .map(|(_, v)| v.into_owned())
}

/// GET / -> all portfolios, optionally narrowed to one skill.
pub async fn list_portfolios(
    State(state): State<HubState>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, HubError> {
    let rows = state.storage.list_all().await?;
    let filter = SkillFilter::from_query(skills_param(query.as_deref()).as_deref());
    let page = ListingPage {
        portfolios: filter_portfolios(rows, filter.as_ref(), &state.icons),
        tool_icons: state.icons.as_map().clone(),
        current_skills: filter.map(|f| f.as_str().to_string()).unwrap_or_default(),
    };
    state.renderer.render(LISTING_TEMPLATE, &page)
}

/// Keep rows whose parsed skills match `filter`, in storage order.
pub fn filter_portfolios(
    rows: Vec<DbPortfolio>,
    filter: Option<&SkillFilter>,
    icons: &SkillIcons,
) -> Vec<PortfolioCard> {
    rows.into_iter()
        .filter_map(|row| {
            let skills = row.skill_list();
            if let Some(filter) = filter {
                if !filter.matches(&skills) {
                    return None;
                }
            }
            Some(PortfolioCard {
                public_id: row.public_id,
                name: row.name,
                avatar: row.avatar.unwrap_or_default(),
                bio: row.bio,
                skills: SkillBadge::badges(skills, icons),
            })
        })
        .collect()
}

/// GET /form
pub async fn submission_form(State(state): State<HubState>) -> Result<Html<String>, HubError> {
    state.renderer.render_empty(FORM_TEMPLATE)
}

/// POST /generate -> store the submission (and avatar) then go back to the listing.
pub async fn create_portfolio(
    State(state): State<HubState>,
    SubmissionPreprocess(submission, avatar): SubmissionPreprocess,
) -> Result<Redirect, HubError> {
    let public_id = Uuid::new_v4();

    let avatar_path = match avatar {
        Some(upload) => state.uploads.save(&public_id, &upload).await?,
        None => String::new(),
    };

    let new = submission.into_new_portfolio(public_id, avatar_path);
    let id = state.storage.insert(&new).await?;
    info!(id, public_id = %public_id, "portfolio created");

    Ok(Redirect::to("/"))
}

/// GET /portfolio/{id}
pub async fn portfolio_detail(
    State(state): State<HubState>,
    Path(public_id): Path<String>,
) -> Result<Html<String>, HubError> {
    let row = state
        .storage
        .find_by_public_id(&public_id)
        .await?
        .ok_or(HubError::NotFound)?;

    let projects = match row.github_username() {
        Some(username) => state.github.fetch_projects(username).await.into_projects(),
        None => Vec::new(),
    };

    let page = DetailPage::new(row, projects, &state.icons);
    state.renderer.render(DETAIL_TEMPLATE, &page)
}
