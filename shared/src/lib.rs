//! KOSMOS 共享协议层
//!
//! 定义前端与后端之间往返的所有数据结构。
//! 线上字段统一使用 camelCase，与后端 JSON 保持一致。

use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 太空任务
///
/// 发射/着陆的日期以 `YYYY-MM-DD` 字符串传输，见 [`date`]。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: u32,
    pub name: String,
    pub launch_date: String,
    pub landing_date: String,
    pub launch_site: String,
    pub launch_latitude: f64,
    pub launch_longitude: f64,
    pub landing_site: String,
    pub landing_latitude: f64,
    pub landing_longitude: f64,
    pub lunar_module: String,
    pub command_module: String,
    pub crew_members: Vec<String>,
}

/// 任务的创建/更新请求体（无 id，由后端分配）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionPayload {
    pub name: String,
    pub launch_date: String,
    pub landing_date: String,
    pub launch_site: String,
    pub launch_latitude: f64,
    pub launch_longitude: f64,
    pub landing_site: String,
    pub landing_latitude: f64,
    pub landing_longitude: f64,
    pub lunar_module: String,
    pub command_module: String,
    pub crew_members: Vec<String>,
}

impl From<Mission> for MissionPayload {
    fn from(m: Mission) -> Self {
        Self {
            name: m.name,
            launch_date: m.launch_date,
            landing_date: m.landing_date,
            launch_site: m.launch_site,
            launch_latitude: m.launch_latitude,
            launch_longitude: m.launch_longitude,
            landing_site: m.landing_site,
            landing_latitude: m.landing_latitude,
            landing_longitude: m.landing_longitude,
            lunar_module: m.lunar_module,
            command_module: m.command_module,
            crew_members: m.crew_members,
        }
    }
}

/// 可预订的航班
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: u32,
    pub flight_number: String,
    pub destination: String,
    pub launch_date: String,
    pub seats: u32,
    pub available_seats: u32,
}

impl Flight {
    /// 座位是否已满（满员时前端禁用预订按钮）
    pub fn is_full(&self) -> bool {
        self.available_seats == 0
    }
}

/// 航班的创建请求体，座位余量由后端初始化
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPayload {
    pub flight_number: String,
    pub destination: String,
    pub launch_date: String,
    pub seats: u32,
}

/// 搜索结果：任务的只读投影
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: u32,
    pub name: String,
    pub launch_date: String,
    pub landing_date: String,
    pub launch_site: String,
    pub landing_site: String,
    pub crew_members: Vec<String>,
}

// =========================================================
// 响应模型 (Response Models)
// =========================================================

/// 登录成功后返回的会话令牌
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// 后端的通用响应体，`message` 可能缺失
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// 加加林介绍页的内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GagarinInfo {
    pub info: String,
}

/// 水印处理后的图片地址
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonOrderResponse {
    pub signed_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mission() -> Mission {
        Mission {
            id: 11,
            name: "Аполлон-11".to_string(),
            launch_date: "1969-07-16".to_string(),
            landing_date: "1969-07-24".to_string(),
            launch_site: "Мыс Канаверал".to_string(),
            launch_latitude: 28.573255,
            launch_longitude: -80.646895,
            landing_site: "Тихий океан".to_string(),
            landing_latitude: 13.3,
            landing_longitude: -169.15,
            lunar_module: "Eagle".to_string(),
            command_module: "Columbia".to_string(),
            crew_members: vec!["Армстронг".to_string(), "Олдрин".to_string()],
        }
    }

    #[test]
    fn mission_serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&sample_mission()).unwrap();
        assert!(json.contains("\"launchDate\""));
        assert!(json.contains("\"crewMembers\""));
        assert!(json.contains("\"commandModule\""));
        assert!(!json.contains("launch_date"));
    }

    #[test]
    fn mission_payload_drops_id() {
        let payload = MissionPayload::from(sample_mission());
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("\"id\""));
        assert_eq!(payload.crew_members.len(), 2);
    }

    #[test]
    fn flight_roundtrips_and_reports_fullness() {
        let json = r#"{"id":1,"flightNumber":"KS-042","destination":"Луна","launchDate":"2026-09-01","seats":10,"availableSeats":0}"#;
        let flight: Flight = serde_json::from_str(json).unwrap();
        assert_eq!(flight.flight_number, "KS-042");
        assert!(flight.is_full());
    }

    #[test]
    fn api_message_tolerates_missing_field() {
        let empty: ApiMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.message, None);

        let with_msg: ApiMessage = serde_json::from_str(r#"{"message":"Нет мест"}"#).unwrap();
        assert_eq!(with_msg.message.as_deref(), Some("Нет мест"));
    }

    #[test]
    fn moon_order_response_uses_camel_case() {
        let resp: MoonOrderResponse =
            serde_json::from_str(r#"{"signedImage":"https://cdn/kosmos/42.png"}"#).unwrap();
        assert_eq!(resp.signed_image, "https://cdn/kosmos/42.png");
    }
}
