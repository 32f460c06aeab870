//! Axum route definitions for the dice API.

use crate::api::handlers::{self, DiceApiState};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Create all dice routes.
///
/// # Routes
///
/// - `GET /rolldice?player=<name>` - Roll the dice, returns "1".."6"
pub fn dice_routes(state: Arc<DiceApiState>) -> Router {
    Router::new()
        .route("/rolldice", get(handlers::roll_dice))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let router = dice_routes(Arc::new(DiceApiState::new("test")));
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
