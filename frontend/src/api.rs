//! 后端 API 客户端
//!
//! 每个端点一个方法，全部经由泛型的 [`KosmosApi::send`] 走
//! `kosmos-shared` 的 [`ApiRequest`] 协议。月球订单是唯一的
//! multipart 端点，单独处理。

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use kosmos_shared::protocol::{
    ApiRequest, BookFlightRequest, DeleteMissionRequest, GagarinRequest, GetMissionRequest,
    HttpMethod, ListFlightsRequest, ListMissionsRequest, LoginRequest, RegisterRequest,
    SearchRequest, UpdateMissionRequest,
};
use kosmos_shared::{
    ApiMessage, BEARER_PREFIX, Flight, FlightPayload, GagarinInfo, HEADER_AUTHORIZATION,
    LoginResponse, Mission, MissionPayload, MoonOrderResponse, SearchResult,
};

use crate::config;

// =========================================================
// 错误类型
// =========================================================

/// API 调用错误
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 网络层失败（连接不通、CORS 等）
    Network(String),
    /// 响应体解析失败
    Decode(String),
    /// 后端返回非 2xx，`message` 取自响应体（若有）
    Api { status: u16, message: Option<String> },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "网络错误: {}", msg),
            ApiError::Decode(msg) => write!(f, "响应解析失败: {}", msg),
            ApiError::Api { status, message } => match message {
                Some(m) => write!(f, "HTTP {}: {}", status, m),
                None => write!(f, "HTTP {}", status),
            },
        }
    }
}

impl ApiError {
    /// 转为面向用户的文案：优先后端的 message，
    /// 网络层失败统一显示服务器错误，其余用调用方给的兜底文案。
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Api {
                message: Some(m), ..
            } => m.clone(),
            ApiError::Network(_) => "Ошибка сервера".to_string(),
            _ => fallback.to_string(),
        }
    }
}

// =========================================================
// 客户端
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct KosmosApi {
    base_url: String,
    token: Option<String>,
}

impl KosmosApi {
    /// 携带会话令牌的客户端
    pub fn new(token: String) -> Self {
        Self {
            base_url: config::API_BASE_URL.trim_end_matches('/').to_string(),
            token: Some(token),
        }
    }

    /// 未登录客户端，仅用于登录/注册
    pub fn unauthenticated() -> Self {
        Self {
            base_url: config::API_BASE_URL.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 给受保护的请求附加 Bearer 令牌。
    /// 令牌缺失直接按 401 处理，不发请求。
    fn authorize(&self, builder: RequestBuilder, requires_auth: bool) -> Result<RequestBuilder, ApiError> {
        if !requires_auth {
            return Ok(builder);
        }
        let token = self.token.as_ref().ok_or(ApiError::Api {
            status: 401,
            message: None,
        })?;
        Ok(builder.header(
            HEADER_AUTHORIZATION,
            &format!("{}{}", BEARER_PREFIX, token),
        ))
    }

    /// 泛型发送入口：方法、路径、请求体、鉴权全部由 `R` 描述
    pub async fn send<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let url = self.url(&req.path());
        let builder = match R::METHOD {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        let builder = self.authorize(builder, R::REQUIRES_AUTH)?;

        let request = if R::has_body() {
            let body =
                serde_json::to_string(req).map_err(|e| ApiError::Decode(e.to_string()))?;
            builder
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
        } else {
            builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// 统一解码：非 2xx 时尽量提取后端的 message，
    /// 空的成功响应按 JSON null 解析（DELETE 等端点返回 `()`）。
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let ok = response.ok();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !ok {
            let message = serde_json::from_str::<ApiMessage>(&text)
                .ok()
                .and_then(|m| m.message);
            return Err(ApiError::Api { status, message });
        }

        let body = if text.is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ---------------------------------------------------------
    // 端点方法
    // ---------------------------------------------------------

    pub async fn login(&self, email: String, password: String) -> Result<LoginResponse, ApiError> {
        self.send(&LoginRequest { email, password }).await
    }

    pub async fn register(&self, email: String, password: String) -> Result<ApiMessage, ApiError> {
        self.send(&RegisterRequest { email, password }).await
    }

    pub async fn gagarin(&self) -> Result<GagarinInfo, ApiError> {
        self.send(&GagarinRequest).await
    }

    pub async fn missions(&self) -> Result<Vec<Mission>, ApiError> {
        self.send(&ListMissionsRequest).await
    }

    pub async fn mission(&self, id: u32) -> Result<Mission, ApiError> {
        self.send(&GetMissionRequest { id }).await
    }

    pub async fn create_mission(&self, payload: MissionPayload) -> Result<Mission, ApiError> {
        self.send(&payload).await
    }

    pub async fn update_mission(
        &self,
        id: u32,
        mission: MissionPayload,
    ) -> Result<Mission, ApiError> {
        self.send(&UpdateMissionRequest { id, mission }).await
    }

    pub async fn delete_mission(&self, id: u32) -> Result<(), ApiError> {
        self.send(&DeleteMissionRequest { id }).await
    }

    pub async fn flights(&self) -> Result<Vec<Flight>, ApiError> {
        self.send(&ListFlightsRequest).await
    }

    pub async fn create_flight(&self, payload: FlightPayload) -> Result<Flight, ApiError> {
        self.send(&payload).await
    }

    pub async fn book_flight(&self, id: u32) -> Result<ApiMessage, ApiError> {
        self.send(&BookFlightRequest { id }).await
    }

    pub async fn search(&self, query: String) -> Result<Vec<SearchResult>, ApiError> {
        self.send(&SearchRequest { query }).await
    }

    /// 月球订单：multipart 上传图片与文字，由浏览器自行设置 boundary
    pub async fn moon_order(
        &self,
        image: &web_sys::File,
        message: &str,
    ) -> Result<MoonOrderResponse, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        form.append_with_blob("image", image)
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        form.append_with_str("message", message)
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let builder = self.authorize(Request::post(&self.url("/moon-order")), true)?;
        let request = builder
            .body(JsValue::from(form))
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> KosmosApi {
        KosmosApi {
            base_url: base.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    #[test]
    fn url_joins_with_exactly_one_slash() {
        let api = client("http://backend/api-kosmos/");
        assert_eq!(api.url("/missions"), "http://backend/api-kosmos/missions");
        assert_eq!(api.url("missions"), "http://backend/api-kosmos/missions");
    }

    #[test]
    fn user_message_prefers_backend_text() {
        let with_msg = ApiError::Api {
            status: 409,
            message: Some("Превышен лимит".to_string()),
        };
        assert_eq!(with_msg.user_message("Ошибка входа"), "Превышен лимит");

        let bare = ApiError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(bare.user_message("Ошибка входа"), "Ошибка входа");

        let network = ApiError::Network("failed to fetch".to_string());
        assert_eq!(network.user_message("Ошибка входа"), "Ошибка сервера");
    }
}
