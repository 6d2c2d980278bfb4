//! API 协议定义
//!
//! 通过 [`ApiRequest`] trait 把每个端点的请求体、响应类型、
//! HTTP 方法和路径绑定在一起，前端客户端据此提供一个泛型的发送入口。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{
    ApiMessage, Flight, FlightPayload, GagarinInfo, LoginResponse, Mission, MissionPayload,
    SearchResult,
};

/// HTTP 请求方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// 描述一个 API 端点的请求-响应关系与元数据
pub trait ApiRequest: Serialize {
    /// 该请求的响应类型
    type Response: DeserializeOwned;
    /// HTTP 方法
    const METHOD: HttpMethod;
    /// 是否需要携带 Bearer 令牌（登录/注册除外）
    const REQUIRES_AUTH: bool = true;

    /// 请求路径。路径参数（如任务 id）在此拼接
    fn path(&self) -> String;

    /// 是否把请求体序列化为 JSON 发送。
    /// 默认 POST/PUT 携带请求体，个别端点（预订航班）覆盖为 false。
    fn has_body() -> bool {
        matches!(Self::METHOD, HttpMethod::Post | HttpMethod::Put)
    }
}

// =========================================================
// 认证 (Auth)
// =========================================================

/// 登录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = false;

    fn path(&self) -> String {
        "/login".to_string()
    }
}

/// 注册新用户
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for RegisterRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = false;

    fn path(&self) -> String {
        "/register".to_string()
    }
}

// =========================================================
// 加加林页 (Gagarin)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GagarinRequest;

impl ApiRequest for GagarinRequest {
    type Response = GagarinInfo;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/gagarin".to_string()
    }
}

// =========================================================
// 任务 (Missions)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMissionsRequest;

impl ApiRequest for ListMissionsRequest {
    type Response = Vec<Mission>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/missions".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetMissionRequest {
    pub id: u32,
}

impl ApiRequest for GetMissionRequest {
    type Response = Mission;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/missions/{}", self.id)
    }
}

/// 创建任务：请求体即任务内容
impl ApiRequest for MissionPayload {
    type Response = Mission;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/missions".to_string()
    }
}

/// 更新任务：id 走路径，内容走请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMissionRequest {
    #[serde(skip)]
    pub id: u32,
    #[serde(flatten)]
    pub mission: MissionPayload,
}

impl ApiRequest for UpdateMissionRequest {
    type Response = Mission;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/missions/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteMissionRequest {
    pub id: u32,
}

impl ApiRequest for DeleteMissionRequest {
    // 成功即 204/200 空响应
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/missions/{}", self.id)
    }
}

// =========================================================
// 航班 (Flights)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFlightsRequest;

impl ApiRequest for ListFlightsRequest {
    type Response = Vec<Flight>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/flights".to_string()
    }
}

/// 创建航班：请求体即航班内容
impl ApiRequest for FlightPayload {
    type Response = Flight;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/flights".to_string()
    }
}

/// 预订航班。id 走路径，无请求体，余量由后端扣减
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookFlightRequest {
    pub id: u32,
}

impl ApiRequest for BookFlightRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/flights/{}/book", self.id)
    }

    fn has_body() -> bool {
        false
    }
}

// =========================================================
// 搜索 (Search)
// =========================================================

/// 全文搜索任务与机组成员
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

impl ApiRequest for SearchRequest {
    type Response = Vec<SearchResult>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/search?q={}", urlencoding::encode(&self.query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_endpoints_skip_bearer_token() {
        assert!(!LoginRequest::REQUIRES_AUTH);
        assert!(!RegisterRequest::REQUIRES_AUTH);
        assert!(GagarinRequest::REQUIRES_AUTH);
        assert!(ListMissionsRequest::REQUIRES_AUTH);
    }

    #[test]
    fn mission_paths_carry_the_id() {
        assert_eq!(GetMissionRequest { id: 7 }.path(), "/missions/7");
        assert_eq!(DeleteMissionRequest { id: 7 }.path(), "/missions/7");
        let update = UpdateMissionRequest {
            id: 7,
            mission: MissionPayload::default(),
        };
        assert_eq!(update.path(), "/missions/7");
        assert_eq!(UpdateMissionRequest::METHOD, HttpMethod::Put);
    }

    #[test]
    fn update_body_flattens_payload_without_id() {
        let update = UpdateMissionRequest {
            id: 7,
            mission: MissionPayload {
                name: "Луна-9".to_string(),
                ..Default::default()
            },
        };
        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains("\"name\":\"Луна-9\""));
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn booking_goes_through_the_flight_subresource() {
        let book = BookFlightRequest { id: 3 };
        assert_eq!(book.path(), "/flights/3/book");
        assert_eq!(BookFlightRequest::METHOD, HttpMethod::Post);
        // 预订没有请求体
        assert!(!BookFlightRequest::has_body());
        assert!(<MissionPayload as ApiRequest>::has_body());
        assert!(!ListFlightsRequest::has_body());
    }

    #[test]
    fn search_query_is_url_encoded() {
        let req = SearchRequest {
            query: "луна 1969".to_string(),
        };
        assert_eq!(
            req.path(),
            "/search?q=%D0%BB%D1%83%D0%BD%D0%B0%201969"
        );
    }

    #[test]
    fn methods_map_to_wire_names() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }
}
