//! Page routes and the mapping from guard decisions to HTTP responses.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};

use crate::guard::{BearerHeaderStore, Decision, JwtCodec, Role, RouteGuard};
use crate::state::AppState;

pub mod views;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login))
        .route("/register", get(register))
        .route("/admin/dashboard", get(admin_dashboard))
        .route("/client/dashboard", get(client_dashboard))
        .route("/freelancer/dashboard", get(freelancer_dashboard))
        .route("/me", get(me))
}

/// Catch-all for unknown paths.
pub async fn no_page() -> Response {
    (StatusCode::NOT_FOUND, views::pending_verification()).into_response()
}

impl<T: IntoResponse> IntoResponse for Decision<T> {
    fn into_response(self) -> Response {
        match self {
            Decision::Render(page) => page.into_response(),
            Decision::Redirect(path) => Redirect::to(path).into_response(),
            Decision::Fallback => {
                (StatusCode::FORBIDDEN, views::pending_verification()).into_response()
            }
        }
    }
}

fn route_guard<'a>(
    state: &'a AppState,
    headers: &'a HeaderMap,
) -> RouteGuard<BearerHeaderStore<'a>, &'a JwtCodec> {
    RouteGuard::new(BearerHeaderStore::new(headers), state.codec.as_ref())
        .with_token_key(state.config.token_key.as_str())
}

async fn home() -> Response {
    views::home().into_response()
}

async fn login() -> Response {
    views::login().into_response()
}

async fn register() -> Response {
    views::register().into_response()
}

async fn admin_dashboard(State(state): State<AppState>, headers: HeaderMap) -> Response {
    route_guard(&state, &headers)
        .evaluate(Some(Role::Admin), views::admin_dashboard())
        .into_response()
}

async fn client_dashboard(State(state): State<AppState>, headers: HeaderMap) -> Response {
    route_guard(&state, &headers)
        .evaluate(Some(Role::Client), views::client_dashboard())
        .into_response()
}

async fn freelancer_dashboard(State(state): State<AppState>, headers: HeaderMap) -> Response {
    route_guard(&state, &headers)
        .evaluate(Some(Role::Freelancer), views::freelancer_dashboard())
        .into_response()
}

/// Who the presented token says the viewer is. Any verified principal may
/// ask, regardless of role.
async fn me(State(state): State<AppState>, headers: HeaderMap) -> Response {
    route_guard(&state, &headers)
        .evaluate_with(None, |claims| Json(claims.clone()))
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;
    use tower::ServiceExt;

    fn app() -> Router {
        router().with_state(AppState::fake())
    }

    fn token(sub: &str, role: &str, verified: bool) -> String {
        let exp = time::OffsetDateTime::now_utc().unix_timestamp() as usize + 3600;
        encode(
            &Header::default(),
            &json!({"sub": sub, "role": role, "isVerified": verified, "exp": exp}),
            &EncodingKey::from_secret(b"test"),
        )
        .expect("sign token")
    }

    fn get_with_token(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(t) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
        }
        builder.body(Body::empty()).expect("request")
    }

    fn location(res: &axum::http::Response<Body>) -> &str {
        res.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .expect("location header")
    }

    #[tokio::test]
    async fn public_pages_need_no_token() {
        for uri in ["/", "/login", "/register"] {
            let res = app().oneshot(get_with_token(uri, None)).await.unwrap();
            assert_eq!(res.status(), StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn protected_page_without_token_redirects_to_login() {
        let res = app()
            .oneshot(get_with_token("/client/dashboard", None))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/login");
    }

    #[tokio::test]
    async fn garbage_token_redirects_to_login() {
        let res = app()
            .oneshot(get_with_token("/admin/dashboard", Some("not-a-jwt")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/login");
    }

    #[tokio::test]
    async fn matching_role_sees_the_dashboard() {
        let t = token("alice", "CLIENT", true);
        let res = app()
            .oneshot(get_with_token("/client/dashboard", Some(&t)))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn wrong_role_is_sent_home() {
        let t = token("alice", "CLIENT", true);
        let res = app()
            .oneshot(get_with_token("/admin/dashboard", Some(&t)))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/");
    }

    #[tokio::test]
    async fn unverified_viewer_gets_pending_page() {
        let t = token("bob", "FREELANCER", false);
        let res = app()
            .oneshot(get_with_token("/freelancer/dashboard", Some(&t)))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn me_returns_claims_for_any_verified_role() {
        let t = token("alice", "CLIENT", true);
        let res = app().oneshot(get_with_token("/me", Some(&t))).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body = res.into_body().collect().await.unwrap().to_bytes();
        let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload["sub"], "alice");
        assert_eq!(payload["role"], "CLIENT");
        assert_eq!(payload["isVerified"], true);
    }

    #[tokio::test]
    async fn me_without_token_redirects_to_login() {
        let res = app().oneshot(get_with_token("/me", None)).await.unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/login");
    }
}
