use contracts::shared::ListQuery;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use super::error::ApiError;

/// HTTP verb of a write request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMethod {
    Post,
    Patch,
}

impl WriteMethod {
    fn request(self, url: &str) -> RequestBuilder {
        match self {
            WriteMethod::Post => Request::post(url),
            WriteMethod::Patch => Request::patch(url),
        }
    }
}

/// Authenticated HTTP client for the admin backend.
///
/// Provided once by `App` through context; screens get it with [`use_api`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn url(&self, path: &str, query: &ListQuery) -> Result<String, ApiError> {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let qs = query_string(query)?;
            url.push('?');
            url.push_str(&qs);
        }
        Ok(url)
    }

    fn auth_header(&self) -> Result<String, ApiError> {
        self.token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
            .ok_or(ApiError::Unauthenticated)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<T, ApiError> {
        let url = self.url(path, query)?;
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .header("Authorization", &self.auth_header()?)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body = read_body(response).await?;
        decode_body(&body)
    }

    pub async fn send_json<B: Serialize>(
        &self,
        method: WriteMethod,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.url(path, &ListQuery::all())?;
        log::debug!("{:?} {} (json)", method, url);

        let response = method
            .request(&url)
            .header("Authorization", &self.auth_header()?)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_body(response).await.map(|_| ())
    }

    pub async fn send_multipart(
        &self,
        method: WriteMethod,
        path: &str,
        form: FormData,
    ) -> Result<(), ApiError> {
        let url = self.url(path, &ListQuery::all())?;
        log::debug!("{:?} {} (multipart)", method, url);

        // The browser sets the multipart boundary itself, so no Content-Type here.
        let response = method
            .request(&url)
            .header("Authorization", &self.auth_header()?)
            .body(form)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_body(response).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path, &ListQuery::all())?;
        log::debug!("DELETE {}", url);

        let response = Request::delete(&url)
            .header("Authorization", &self.auth_header()?)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_body(response).await.map(|_| ())
    }
}

/// The client provided by `App`.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient context not found")
}

pub fn query_string(query: &ListQuery) -> Result<String, ApiError> {
    serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !(200..300).contains(&status) {
        log::warn!("{} returned {}: {}", response.url(), status, body);
        return Err(ApiError::from_status(status, &body));
    }
    Ok(body)
}

pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_object::Object;
    use contracts::shared::ListResponse;

    #[test]
    fn test_url_without_query() {
        let client = ApiClient::new("https://api.example.uz", Some("t".into()));
        assert_eq!(
            client.url("/obyekt/list/", &ListQuery::all()).unwrap(),
            "https://api.example.uz/obyekt/list/"
        );
    }

    #[test]
    fn test_url_with_paging() {
        let client = ApiClient::new("", Some("t".into()));
        let url = client.url("/unity/list/", &ListQuery::page(2, 150)).unwrap();
        assert_eq!(url, "/unity/list/?page=2&page_size=150");

        let url = client.url("/order/list/", &ListQuery::sized(1000)).unwrap();
        assert_eq!(url, "/order/list/?page_size=1000");
    }

    #[test]
    fn test_empty_token_is_unauthenticated() {
        let client = ApiClient::new("", Some(String::new()));
        assert!(!client.is_authenticated());
        assert_eq!(client.auth_header(), Err(ApiError::Unauthenticated));

        let client = ApiClient::new("", Some("abc".into()));
        assert_eq!(client.auth_header().unwrap(), "Bearer abc");
    }

    #[test]
    fn test_decode_list() {
        let page: ListResponse<Object> =
            decode_body(r#"{"results": [{"id": 1, "name": "Ombor"}], "total_pages": 1}"#)
                .unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name, "Ombor");
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let err = decode_body::<ListResponse<Object>>(r#"{"results": "nope"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let err = decode_body::<ListResponse<Object>>("<html></html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
