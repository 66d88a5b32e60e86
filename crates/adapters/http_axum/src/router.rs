//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use innkeep_app::ports::HotelRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes and their `OpenAPI` document under `/api/v1` next to
/// a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: HotelRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use innkeep_app::services::hotel_service::HotelService;
    use innkeep_domain::error::InnkeepError;
    use innkeep_domain::hotel::{Hotel, HotelPatch, NewHotel, Rating};
    use innkeep_domain::id::HotelId;
    use tower::ServiceExt;

    /// Knows a single hotel with id 1; fails every listing.
    struct StubHotelRepo;

    fn stored() -> Hotel {
        Hotel {
            id: HotelId::new(1),
            city: "Paris".to_string(),
            description: "Nice".to_string(),
            name: "Hotel A".to_string(),
            rating: Rating::new(4).unwrap(),
        }
    }

    impl HotelRepository for StubHotelRepo {
        async fn create(&self, hotel: NewHotel) -> Result<Hotel, InnkeepError> {
            Ok(hotel.into_hotel(HotelId::new(2)))
        }
        async fn get_by_id(&self, id: HotelId) -> Result<Option<Hotel>, InnkeepError> {
            Ok((id == HotelId::new(1)).then(stored))
        }
        async fn get_all(&self) -> Result<Vec<Hotel>, InnkeepError> {
            Err(InnkeepError::Storage("unavailable".into()))
        }
        async fn update(
            &self,
            id: HotelId,
            patch: HotelPatch,
        ) -> Result<Option<Hotel>, InnkeepError> {
            Ok((id == HotelId::new(1)).then(|| {
                let mut hotel = stored();
                patch.apply(&mut hotel);
                hotel
            }))
        }
        async fn delete(&self, id: HotelId) -> Result<bool, InnkeepError> {
            Ok(id == HotelId::new(1))
        }
    }

    fn app() -> Router {
        build(AppState::new(HotelService::new(StubHotelRepo)))
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_with_detail_when_hotel_missing() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/v1/hotels/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Hotel with id 99 not found");
    }

    #[tokio::test]
    async fn should_reject_non_integer_id() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/v1/hotels/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "invalid hotel id: abc");
    }

    #[tokio::test]
    async fn should_create_hotel_with_created_status() {
        let (status, body) = send(json_request(
            "POST",
            "/api/v1/hotels",
            r#"{"city":"Paris","description":"Nice","name":"Hotel A","rating":4}"#,
        ))
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 2);
        assert_eq!(body["rating"], 4);
    }

    #[tokio::test]
    async fn should_reject_create_when_rating_out_of_range() {
        for rating in [0, 6] {
            let (status, body) = send(json_request(
                "POST",
                "/api/v1/hotels",
                &format!(r#"{{"city":"Paris","description":"Nice","name":"A","rating":{rating}}}"#),
            ))
            .await;

            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert!(body["detail"].as_str().unwrap().contains("rating"));
        }
    }

    #[tokio::test]
    async fn should_reject_create_when_field_missing() {
        let (status, body) = send(json_request(
            "POST",
            "/api/v1/hotels",
            r#"{"city":"Paris","rating":3}"#,
        ))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn should_reject_create_when_body_is_not_json() {
        let (status, _) = send(json_request("POST", "/api/v1/hotels", "{not json")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn should_merge_partial_update() {
        let (status, body) = send(json_request("PUT", "/api/v1/hotels/1", r#"{"rating":5}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rating"], 5);
        assert_eq!(body["city"], "Paris");
    }

    #[tokio::test]
    async fn should_ignore_null_fields_in_partial_update() {
        let (status, body) =
            send(json_request("PUT", "/api/v1/hotels/1", r#"{"city":null,"name":"B"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["city"], "Paris");
        assert_eq!(body["name"], "B");
    }

    #[tokio::test]
    async fn should_reject_update_when_rating_out_of_range() {
        let (status, _) = send(json_request("PUT", "/api/v1/hotels/1", r#"{"rating":0}"#)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_hotel() {
        let (status, _) = send(json_request("PUT", "/api/v1/hotels/5", "{}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_no_content_on_delete() {
        let (status, body) = send(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/hotels/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_null());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_hotel() {
        let (status, _) = send(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/hotels/2")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_non_integer_page() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/v1/hotels?page=first")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn should_serve_openapi_document_with_every_operation() {
        let (status, doc) = send(
            Request::builder()
                .uri("/api/v1/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc["info"]["version"], "1.0");

        let collection = &doc["paths"]["/api/v1/hotels"];
        let item = &doc["paths"]["/api/v1/hotels/{id}"];
        for operation in [
            &collection["get"],
            &collection["post"],
            &item["get"],
            &item["put"],
            &item["delete"],
        ] {
            assert_eq!(operation["tags"][0], "Hotel Controller");
            assert!(operation["summary"].is_string());
        }
        assert_eq!(
            collection["get"]["summary"],
            "Get a paginated list of all hotels."
        );
        assert!(doc["components"]["schemas"]["Hotel"].is_object());
    }

    #[tokio::test]
    async fn should_hide_storage_failure_details() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/v1/hotels")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "internal server error");
    }
}
