//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有页面及其守卫属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面（默认路由）
    #[default]
    Login,
    /// 注册页面
    Register,
    /// 加加林介绍页（认证后的首页）
    Gagarin,
    /// 任务列表
    Missions,
    /// 创建任务
    MissionCreate,
    /// 编辑任务，携带任务 id
    MissionEdit(u32),
    /// 航班列表
    Flights,
    /// 创建航班
    FlightCreate,
    /// 搜索
    Search,
    /// 月球订单（图片水印）
    MoonOrder,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/register" => Self::Register,
            "/gagarin" => Self::Gagarin,
            "/missions" => Self::Missions,
            "/missions/create" => Self::MissionCreate,
            "/flights" => Self::Flights,
            "/flights/create" => Self::FlightCreate,
            "/search" => Self::Search,
            "/moon-order" => Self::MoonOrder,
            other => other
                .strip_prefix("/missions/edit/")
                .and_then(|id| id.parse().ok())
                .map(Self::MissionEdit)
                .unwrap_or(Self::NotFound),
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Gagarin => "/gagarin".to_string(),
            Self::Missions => "/missions".to_string(),
            Self::MissionCreate => "/missions/create".to_string(),
            Self::MissionEdit(id) => format!("/missions/edit/{}", id),
            Self::Flights => "/flights".to_string(),
            Self::FlightCreate => "/flights/create".to_string(),
            Self::Search => "/search".to_string(),
            Self::MoonOrder => "/moon-order".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::Register | Self::NotFound)
    }

    /// 已认证用户是否应该离开此路由（登录/注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 认证成功时的重定向目标（从登录/注册页）
    pub fn auth_success_redirect() -> Self {
        Self::Gagarin
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve_to_screens() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
        assert_eq!(AppRoute::from_path("/gagarin"), AppRoute::Gagarin);
        assert_eq!(AppRoute::from_path("/missions"), AppRoute::Missions);
        assert_eq!(AppRoute::from_path("/missions/create"), AppRoute::MissionCreate);
        assert_eq!(AppRoute::from_path("/flights"), AppRoute::Flights);
        assert_eq!(AppRoute::from_path("/flights/create"), AppRoute::FlightCreate);
        assert_eq!(AppRoute::from_path("/search"), AppRoute::Search);
        assert_eq!(AppRoute::from_path("/moon-order"), AppRoute::MoonOrder);
    }

    #[test]
    fn edit_route_parses_its_id() {
        assert_eq!(
            AppRoute::from_path("/missions/edit/42"),
            AppRoute::MissionEdit(42)
        );
        assert_eq!(AppRoute::MissionEdit(42).to_path(), "/missions/edit/42");
        // 非数字 id 落到 404
        assert_eq!(AppRoute::from_path("/missions/edit/apollo"), AppRoute::NotFound);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(AppRoute::from_path("/nonexistent"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/missions/"), AppRoute::NotFound);
    }

    #[test]
    fn guards_protect_everything_but_auth_screens() {
        for route in [
            AppRoute::Gagarin,
            AppRoute::Missions,
            AppRoute::MissionCreate,
            AppRoute::MissionEdit(1),
            AppRoute::Flights,
            AppRoute::FlightCreate,
            AppRoute::Search,
            AppRoute::MoonOrder,
        ] {
            assert!(route.requires_auth(), "{route} must require auth");
            assert!(!route.should_redirect_when_authenticated());
        }
        for route in [AppRoute::Login, AppRoute::Register] {
            assert!(!route.requires_auth());
            assert!(route.should_redirect_when_authenticated());
        }
    }

    #[test]
    fn redirect_targets() {
        assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
        assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Gagarin);
    }
}
