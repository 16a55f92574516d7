use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    BadClientData,
    NotFound,
    InternalError,
    UnexpectedStatusCode,
}

#[derive(Debug, Clone)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    client: Client,
    address: String,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address: address.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.address, path)
    }

    /// Url of the address followed by `segments`, each one percent-encoded
    /// as a single path segment
    pub fn segments_url(&self, segments: &[&str]) -> APIResponse<Url> {
        let mut url = Url::parse(&self.address).map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        })?;
        url.path_segments_mut()
            .map_err(|_| APIError {
                variant: APIErrorVariant::Network,
                message: format!("{} can not be used as a base url", self.address),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = req.send().await.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        })?;

        let status = res.status();
        if status != expected_status_code {
            let variant = match status {
                StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
                StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
                StatusCode::INTERNAL_SERVER_ERROR => APIErrorVariant::InternalError,
                _ => APIErrorVariant::UnexpectedStatusCode,
            };
            let message = res.text().await.unwrap_or_default();
            return Err(APIError { variant, message });
        }

        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.client.get(&self.url(&path)), expected_status_code)
            .await
    }

    pub async fn get_url<T: DeserializeOwned>(
        &self,
        url: Url,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.client.get(url), expected_status_code).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.client.delete(&self.url(&path)), expected_status_code)
            .await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(
            self.client.post(&self.url(&path)).json(&body),
            expected_status_code,
        )
        .await
    }

    pub async fn put<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(
            self.client.put(&self.url(&path)).json(&body),
            expected_status_code,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_each_segment() {
        let base = BaseClient::new("http://localhost:5000/".into());
        let url = base
            .segments_url(&["reminders", "ops/night shift?#1"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/reminders/ops%2Fnight%20shift%3F%231"
        );
    }

    #[test]
    fn rejects_invalid_address() {
        let base = BaseClient::new("not an address".into());
        let err = base.segments_url(&["reminders"]).unwrap_err();
        assert_eq!(err.variant, APIErrorVariant::Network);
    }
}
