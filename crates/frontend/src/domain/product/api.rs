//! Gateway client for the catalog API.
//!
//! Every operation returns an envelope, never an error. Structured backend
//! responses, successes and declared failures alike, pass through
//! verbatim; only when the backend cannot be reached or its body cannot be
//! decoded as the expected shape does this layer synthesize a
//! `ServiceUnavailable` envelope. Callers branch on the success flag and
//! never see the transport.

use contracts::domain::product::{Product, ProductDraft};
use contracts::shared::response::{BaseResponse, BaseResponseList};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Catalog operations as the controllers see them.
///
/// The app constructs exactly one [`HttpCatalogApi`] and hands it to the
/// controllers; tests substitute a double. Implementations live in the
/// reactive context, hence the thread-safety bounds.
#[allow(async_fn_in_trait)]
pub trait CatalogApi: Clone + Send + Sync + 'static {
    async fn list_products(&self) -> BaseResponseList<Product>;
    async fn get_product(&self, id: i64) -> BaseResponse<Product>;
    async fn create_product(&self, draft: &ProductDraft) -> BaseResponse<Product>;
    async fn update_product(&self, id: i64, draft: &ProductDraft) -> BaseResponse<Product>;
    async fn delete_product(&self, id: i64) -> BaseResponse<bool>;
}

/// HTTP implementation of [`CatalogApi`].
#[derive(Clone)]
pub struct HttpCatalogApi {
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client pointed at the environment-configured backend.
    pub fn from_env() -> Self {
        Self::new(api_url("/products"))
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

impl CatalogApi for HttpCatalogApi {
    async fn list_products(&self) -> BaseResponseList<Product> {
        // Cache buster: the list is always fetched fresh.
        let url = format!("{}?_ts={}", self.base_url, js_sys::Date::now() as u64);
        let request = Request::get(&url)
            .header("Content-Type", "application/json")
            .build();
        match round_trip(request).await {
            Ok(body) => decode_list(&body),
            Err(e) => {
                log::error!("Failed to fetch products: {e}");
                BaseResponseList::connection_failure()
            }
        }
    }

    async fn get_product(&self, id: i64) -> BaseResponse<Product> {
        let request = Request::get(&self.item_url(id))
            .header("Content-Type", "application/json")
            .build();
        match round_trip(request).await {
            Ok(body) => decode_single(&body),
            Err(e) => {
                log::error!("Failed to fetch product {id}: {e}");
                BaseResponse::connection_failure()
            }
        }
    }

    async fn create_product(&self, draft: &ProductDraft) -> BaseResponse<Product> {
        let request = Request::post(&self.base_url).json(draft);
        match round_trip(request).await {
            Ok(body) => decode_single(&body),
            Err(e) => {
                log::error!("Failed to create product: {e}");
                BaseResponse::connection_failure()
            }
        }
    }

    async fn update_product(&self, id: i64, draft: &ProductDraft) -> BaseResponse<Product> {
        let request = Request::put(&self.item_url(id)).json(draft);
        match round_trip(request).await {
            Ok(body) => decode_single(&body),
            Err(e) => {
                log::error!("Failed to update product {id}: {e}");
                BaseResponse::connection_failure()
            }
        }
    }

    async fn delete_product(&self, id: i64) -> BaseResponse<bool> {
        let request = Request::delete(&self.item_url(id))
            .header("Content-Type", "application/json")
            .build();
        match round_trip(request).await {
            Ok(body) => decode_delete(&body),
            Err(e) => {
                log::error!("Failed to delete product {id}: {e}");
                BaseResponse::delete_connection_failure()
            }
        }
    }
}

async fn round_trip(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<String, gloo_net::Error> {
    request?.send().await?.text().await
}

/// Decode a single-item envelope; an undecodable body counts as a
/// transport failure.
fn decode_single(body: &str) -> BaseResponse<Product> {
    match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            log::error!("Malformed catalog response: {e}");
            BaseResponse::connection_failure()
        }
    }
}

/// Decode a list envelope; an undecodable body counts as a transport
/// failure.
fn decode_list(body: &str) -> BaseResponseList<Product> {
    match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            log::error!("Malformed catalog response: {e}");
            BaseResponseList::connection_failure()
        }
    }
}

/// Decode a delete envelope; an undecodable body counts as a transport
/// failure with an explicit `false` outcome.
fn decode_delete(body: &str) -> BaseResponse<bool> {
    match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            log::error!("Malformed catalog response: {e}");
            BaseResponse::delete_connection_failure()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::response::{ErrorCode, CONNECTIVITY_MESSAGE};

    #[test]
    fn test_decode_single_passes_success_through() {
        let envelope = decode_single(
            r#"{
                "isSuccess": true,
                "data": {
                    "id": 101,
                    "title": "Backpack",
                    "price": 109.95,
                    "description": "Fits 15 inch laptops",
                    "category": "men's clothing",
                    "image": "https://example.com/backpack.jpg"
                },
                "message": "Product created",
                "errorCode": 0
            }"#,
        );

        assert!(envelope.is_success);
        assert_eq!(envelope.error_code, ErrorCode::None);
        assert_eq!(envelope.data.unwrap().id, 101);
        assert_eq!(envelope.message.as_deref(), Some("Product created"));
    }

    #[test]
    fn test_decode_single_passes_domain_failure_through() {
        let envelope =
            decode_single(r#"{"isSuccess": false, "message": "not found", "errorCode": 1}"#);

        assert!(!envelope.is_success);
        assert_eq!(envelope.error_code, ErrorCode::NotFound);
        assert_eq!(envelope.message.as_deref(), Some("not found"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_decode_single_synthesizes_on_malformed_body() {
        for body in ["", "<!DOCTYPE html><html></html>", "{\"isSuccess\":", "null"] {
            let envelope = decode_single(body);
            assert!(!envelope.is_success, "body {body:?} must not decode");
            assert_eq!(envelope.error_code, ErrorCode::ServiceUnavailable);
            assert_eq!(envelope.message.as_deref(), Some(CONNECTIVITY_MESSAGE));
            assert!(envelope.data.is_none());
        }
    }

    #[test]
    fn test_decode_single_rejects_out_of_set_error_code() {
        // Contract drift lands on the same path as a malformed body.
        let envelope = decode_single(r#"{"isSuccess": false, "errorCode": 99}"#);
        assert_eq!(envelope.error_code, ErrorCode::ServiceUnavailable);
    }

    #[test]
    fn test_decode_list_synthesizes_empty_payload_on_malformed_body() {
        let envelope = decode_list("backend exploded");

        assert!(!envelope.is_success);
        assert_eq!(envelope.error_code, ErrorCode::ServiceUnavailable);
        assert_eq!(envelope.data.unwrap().len(), 0);
        assert_eq!(envelope.total_records, 0);
    }

    #[test]
    fn test_decode_list_passes_payload_through() {
        let envelope = decode_list(
            r#"{
                "isSuccess": true,
                "data": [
                    {
                        "id": 1,
                        "title": "Backpack",
                        "price": 109.95,
                        "description": "Fits 15 inch laptops",
                        "category": "men's clothing",
                        "image": "https://example.com/backpack.jpg"
                    }
                ],
                "errorCode": 0,
                "totalRecords": 1
            }"#,
        );

        assert!(envelope.is_success);
        assert_eq!(envelope.total_records, 1);
        assert_eq!(envelope.data.unwrap()[0].title, "Backpack");
    }

    #[test]
    fn test_decode_delete_synthesizes_false_outcome() {
        let envelope = decode_delete("{malformed");

        assert!(!envelope.is_success);
        assert_eq!(envelope.data, Some(false));
        assert_eq!(envelope.error_code, ErrorCode::ServiceUnavailable);
    }

    #[test]
    fn test_decode_delete_passes_outcome_through() {
        let envelope =
            decode_delete(r#"{"isSuccess": true, "data": true, "message": "deleted", "errorCode": 0}"#);

        assert!(envelope.is_success);
        assert_eq!(envelope.data, Some(true));
    }

    #[test]
    fn test_item_url_shape() {
        let api = HttpCatalogApi::new("http://localhost:5127/api/products");
        assert_eq!(api.item_url(5), "http://localhost:5127/api/products/5");
    }
}
