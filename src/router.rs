use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

use crate::api::github_api::GithubApi;
use crate::config::Config;
use crate::db::sqlite::PortfolioStorage;
use crate::error::HubError;
use crate::handlers::portfolio::{
    create_portfolio, list_portfolios, portfolio_detail, submission_form,
};
use crate::render::Renderer;
use crate::service::icons::SkillIcons;
use crate::service::uploads::UploadStore;

/// Shared handles for request handlers. Nothing here carries per-request state.
#[derive(Clone)]
pub struct HubState {
    pub storage: PortfolioStorage,
    pub uploads: UploadStore,
    pub github: GithubApi,
    pub icons: Arc<SkillIcons>,
    pub renderer: Arc<Renderer>,
    pub max_upload_bytes: usize,
}

impl HubState {
    /// Open storage, prepare the upload directory and build the collaborators
    /// described by `cfg`.
    pub async fn from_config(cfg: &Config) -> Result<Self, HubError> {
        let storage = PortfolioStorage::connect(&cfg.database_url).await?;
        storage.init_schema().await?;
        if cfg.seed_demo {
            storage.seed_demo().await?;
        }

        let uploads = UploadStore::new(&cfg.static_dir);
        uploads.ensure_dir().await?;

        let github = GithubApi::new(cfg.github_api_base.clone(), cfg.github_timeout())?;
        let icons = SkillIcons::load(cfg.skill_icons_path.as_deref())?;
        let renderer = Renderer::new()?;

        info!(
            database_url = %cfg.database_url,
            static_dir = %cfg.static_dir.display(),
            icons = icons.len(),
            "portfolio state ready"
        );

        Ok(Self {
            storage,
            uploads,
            github,
            icons: Arc::new(icons),
            renderer: Arc::new(renderer),
            max_upload_bytes: cfg.max_upload_bytes,
        })
    }
}

pub fn hub_router(state: HubState) -> Router {
    let static_files = ServeDir::new(state.uploads.static_dir());

    Router::new()
        .route("/", get(list_portfolios))
        .route("/form", get(submission_form))
        .route("/generate", post(create_portfolio))
        .route("/portfolio/{id}", get(portfolio_detail))
        .nest_service("/static", static_files)
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
