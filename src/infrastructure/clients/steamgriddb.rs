use crate::domain::{Catalog, CatalogGame, CatalogImage, ImageQuery, ImageResource};
use crate::error::{CoverupError, Result};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://www.steamgriddb.com/api/v2";

/// Envelope around every SteamGridDB v2 response.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    #[serde(default)]
    data: Option<T>,
}

pub struct SteamGridDbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SteamGridDbClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    async fn get_json<T: serde::de::DeserializeOwned + Default>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CoverupError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let envelope: ApiResponse<T> = serde_json::from_slice(&bytes)?;
        Ok(envelope.data.unwrap_or_default())
    }
}

fn resource_path(resource: ImageResource) -> &'static str {
    match resource {
        ImageResource::Grid => "grids",
        ImageResource::Hero => "heroes",
        ImageResource::Logo => "logos",
        ImageResource::Icon => "icons",
    }
}

fn build_params(query: &ImageQuery) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    if !query.styles.is_empty() {
        let styles: Vec<&str> = query.styles.iter().map(|s| s.as_str()).collect();
        params.push(("styles", styles.join(",")));
    }
    if !query.mimes.is_empty() {
        let mimes: Vec<&str> = query.mimes.iter().map(|m| m.as_str()).collect();
        params.push(("mimes", mimes.join(",")));
    }

    params
}

impl Catalog for SteamGridDbClient {
    async fn search(&self, term: &str) -> Result<Vec<CatalogGame>> {
        let encoded = utf8_percent_encode(term, NON_ALPHANUMERIC).to_string();
        self.get_json(&format!("/search/autocomplete/{encoded}"), &[])
            .await
    }

    async fn images(&self, game_id: u64, query: &ImageQuery) -> Result<Vec<CatalogImage>> {
        let endpoint = format!("/{}/game/{}", resource_path(query.resource), game_id);
        self.get_json(&endpoint, &build_params(query)).await
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoverupError::Api {
                status: status.as_u16(),
                body: format!("download of {url} failed"),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssetKind;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves a single response and hands back the raw request it received.
    async fn mock_server(
        status: u16,
        body: &str,
    ) -> (String, oneshot::Receiver<String>, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{port}");
        let body = body.to_string();
        let (tx, rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = vec![0u8; 8192];
                let n = stream.read(&mut buf).await.unwrap_or(0);
                let _ = tx.send(String::from_utf8_lossy(&buf[..n]).to_string());

                let resp = format!(
                    "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(resp.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        (url, rx, handle)
    }

    fn client(url: String) -> SteamGridDbClient {
        SteamGridDbClient::new(Client::new(), "test-key".to_string()).with_base_url(url)
    }

    #[tokio::test]
    async fn search_returns_candidates_in_order() {
        let json = r#"{"success":true,"data":[
            {"id":1,"name":"Portal 2","types":["steam"],"verified":true},
            {"id":2,"name":"Portal 2: Desolation"}
        ]}"#;
        let (url, request, handle) = mock_server(200, json).await;

        let results = client(url).search("portal-2").await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 1);
        assert_eq!(results[0].name, "Portal 2");

        let request = request.await.unwrap();
        assert!(request.starts_with("GET /search/autocomplete/portal%2D2 "));
        assert!(request.contains("authorization: Bearer test-key"));

        handle.abort();
    }

    #[tokio::test]
    async fn banner_query_hits_heroes_with_filters() {
        let json = r#"{"success":true,"data":[
            {"id":200,"url":"https://example.com/hero.jpg","width":1920,"height":620}
        ]}"#;
        let (url, request, handle) = mock_server(200, json).await;

        let query = ImageQuery::for_asset(AssetKind::Banner);
        let heroes = client(url).images(42, &query).await.unwrap();

        assert_eq!(heroes.len(), 1);
        assert_eq!(heroes[0].url, "https://example.com/hero.jpg");

        let request = request.await.unwrap();
        assert!(request.starts_with("GET /heroes/game/42?"));
        assert!(request.contains("styles=alternate"));
        assert!(request.contains("mimes=image%2Fjpeg"));

        handle.abort();
    }

    #[tokio::test]
    async fn icon_query_has_no_filters() {
        let json = r#"{"success":true,"data":[{"id":400,"url":"https://example.com/icon.png"}]}"#;
        let (url, request, handle) = mock_server(200, json).await;

        let icons = client(url)
            .images(7, &ImageQuery::for_asset(AssetKind::Icon))
            .await
            .unwrap();
        assert_eq!(icons[0].id, 400);

        let request = request.await.unwrap();
        assert!(request.starts_with("GET /icons/game/7 "));

        handle.abort();
    }

    #[tokio::test]
    async fn missing_data_is_an_empty_list() {
        let (url, _request, handle) = mock_server(200, r#"{"success":true}"#).await;

        let logos = client(url).images(1, &ImageQuery::logos()).await.unwrap();
        assert!(logos.is_empty());

        handle.abort();
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let (url, _request, handle) =
            mock_server(401, r#"{"success":false,"errors":["Unauthorized"]}"#).await;

        let err = client(url).search("halo").await.unwrap_err();
        match err {
            CoverupError::Api { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("Unauthorized"));
            }
            other => panic!("unexpected error: {other}"),
        }

        handle.abort();
    }

    #[tokio::test]
    async fn download_returns_raw_bytes() {
        let (url, _request, handle) = mock_server(200, "not really a jpeg").await;

        let bytes = client(String::new())
            .download(&format!("{url}/file.jpg"))
            .await
            .unwrap();
        assert_eq!(bytes, b"not really a jpeg");

        handle.abort();
    }

    #[test]
    fn params_only_carry_set_filters() {
        let query = ImageQuery::for_asset(AssetKind::Cover);
        assert_eq!(build_params(&query), vec![("mimes", "image/jpeg".to_string())]);
        assert!(build_params(&ImageQuery::logos()).is_empty());
    }
}
