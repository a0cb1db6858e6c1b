use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use portfolio_hub::{Config, HubState, hub_router};
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;
use url::Url;

pub const BOUNDARY: &str = "portfolio-test-boundary";

/// Router plus the state it was built from, backed by a throwaway directory.
#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: HubState,
    pub static_dir: PathBuf,
    _dir: TempDir,
}

/// Build an app whose GitHub calls go to `github_base`.
#[allow(dead_code)]
pub async fn spawn_app(github_base: &str) -> TestApp {
    spawn_app_with(github_base, |_| {}).await
}

#[allow(dead_code)]
pub async fn spawn_app_with(github_base: &str, tweak: impl FnOnce(&mut Config)) -> TestApp {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let static_dir = dir.path().join("static");

    let mut cfg = Config::default();
    cfg.database_url = format!("sqlite:{}", dir.path().join("portfolios.db").display());
    cfg.static_dir = static_dir.clone();
    cfg.github_api_base = Url::parse(github_base).expect("invalid github base");
    cfg.github_timeout_ms = 300;
    tweak(&mut cfg);

    let state = HubState::from_config(&cfg)
        .await
        .expect("failed to build state");
    let router = hub_router(state.clone());

    TestApp {
        router,
        state,
        static_dir,
        _dir: dir,
    }
}

/// Base URL that refuses connections.
#[allow(dead_code)]
pub const UNREACHABLE_GITHUB: &str = "http://127.0.0.1:9";

impl TestApp {
    #[allow(dead_code)]
    pub async fn send(&self, req: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(req)
            .await
            .expect("request failed")
    }

    #[allow(dead_code)]
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let resp = self
            .send(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("failed to build request"),
            )
            .await;
        let status = resp.status();
        (status, body_string(resp).await)
    }

    #[allow(dead_code)]
    pub async fn submit(
        &self,
        fields: &[(&str, &str)],
        avatar: Option<(&str, &[u8])>,
    ) -> Response {
        let body = multipart_body(fields, avatar);
        self.send(
            Request::builder()
                .method("POST")
                .uri("/generate")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .expect("failed to build request"),
        )
        .await
    }
}

#[allow(dead_code)]
pub async fn body_string(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}

pub fn multipart_body(fields: &[(&str, &str)], avatar: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = avatar {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"avatar\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}
