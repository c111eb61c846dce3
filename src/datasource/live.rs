use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use super::DataSource;
use crate::errors::{EduConnectError, Result};
use crate::models::ResourceKind;

// 错误信息中保留的响应体长度
const BODY_EXCERPT: usize = 200;

/// 通过 HTTP 访问 EduConnect 后端
///
/// 不重试、不缓存，超时使用传输层默认值。
pub struct LiveDataSource {
    http: Client,
    base_url: String,
}

impl LiveDataSource {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| EduConnectError::config(format!("Invalid backend URL {base_url}: {e}")))?;

        let http = Client::builder()
            .build()
            .map_err(|e| EduConnectError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!("{} {} failed: {}", method, url, e);
            EduConnectError::from(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let excerpt: String = String::from_utf8_lossy(&bytes)
                .chars()
                .take(BODY_EXCERPT)
                .collect();
            warn!("{} {} returned {}: {}", method, url, status, excerpt);
            return Err(classify_status(status, &method, path, &excerpt));
        }

        // DELETE 等请求可能没有响应体
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// 按 HTTP 状态码分类错误
pub fn classify_status(
    status: StatusCode,
    method: &Method,
    path: &str,
    body: &str,
) -> EduConnectError {
    let message = if body.is_empty() {
        format!("{method} {path}: HTTP {status}")
    } else {
        format!("{method} {path}: HTTP {status} {body}")
    };

    if status == StatusCode::NOT_FOUND {
        EduConnectError::not_found(message)
    } else if status == StatusCode::REQUEST_TIMEOUT || status == StatusCode::GATEWAY_TIMEOUT {
        EduConnectError::timeout(message)
    } else if status.is_server_error() {
        EduConnectError::server_status(message)
    } else {
        EduConnectError::client_status(message)
    }
}

#[async_trait::async_trait]
impl DataSource for LiveDataSource {
    fn mode(&self) -> &'static str {
        "live"
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }

    async fn list(&self, resource: ResourceKind) -> Result<Vec<Value>> {
        match self.send(Method::GET, &resource.path(), None).await? {
            Value::Array(items) => Ok(items),
            // 空响应体视为空列表
            Value::Null => Ok(Vec::new()),
            other => Err(EduConnectError::serialization(format!(
                "Expected a JSON array from {}, got {}",
                resource.path(),
                json_kind(&other)
            ))),
        }
    }

    async fn get(&self, resource: ResourceKind, id: i64) -> Result<Value> {
        let path = resource.item_path(id);
        match self.send(Method::GET, &path, None).await? {
            Value::Null => Err(EduConnectError::not_found(format!("GET {path}: empty body"))),
            value => Ok(value),
        }
    }

    async fn create(&self, resource: ResourceKind, payload: Value) -> Result<Value> {
        self.send(Method::POST, &resource.path(), Some(&payload))
            .await
    }

    async fn update(&self, resource: ResourceKind, id: i64, payload: Value) -> Result<Value> {
        self.send(Method::PATCH, &resource.item_path(id), Some(&payload))
            .await
    }

    async fn delete(&self, resource: ResourceKind, id: i64) -> Result<()> {
        self.send(Method::DELETE, &resource.item_path(id), None)
            .await?;
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let get = Method::GET;
        assert!(matches!(
            classify_status(StatusCode::NOT_FOUND, &get, "/notes/9", ""),
            EduConnectError::NotFound(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::BAD_REQUEST, &get, "/notes", "bad"),
            EduConnectError::ClientStatus(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN, &get, "/notes", ""),
            EduConnectError::ClientStatus(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR, &get, "/notes", ""),
            EduConnectError::ServerStatus(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::GATEWAY_TIMEOUT, &get, "/notes", ""),
            EduConnectError::Timeout(_)
        ));
    }

    #[test]
    fn test_status_message_includes_request() {
        let err = classify_status(StatusCode::BAD_REQUEST, &Method::POST, "/notes", "eleveId");
        assert_eq!(err.message(), "POST /notes: HTTP 400 Bad Request eleveId");
    }

    #[test]
    fn test_base_url_is_normalized() {
        let source = LiveDataSource::new("http://localhost:8080/api/").unwrap();
        assert_eq!(source.url("/notes"), "http://localhost:8080/api/notes");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // 端口 9 (discard) 通常没有监听
        let source = LiveDataSource::new("http://127.0.0.1:9/api").unwrap();
        let err = source.list(ResourceKind::Users).await.unwrap_err();
        assert!(matches!(err, EduConnectError::NetworkUnreachable(_)));
    }
}
