//! KOSMOS 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎，含认证守卫）
//! - `auth`: 认证状态管理（令牌持久化在 LocalStorage）
//! - `api`: 类型化的后端客户端
//! - `components`: UI 组件层，每个页面一个组件

mod api;
mod auth;
mod components {
    pub mod create_flight;
    pub mod create_mission;
    pub mod edit_mission;
    pub mod flights;
    pub mod gagarin;
    mod icons;
    pub mod login;
    pub mod mission_form;
    pub mod missions;
    pub mod moon_order;
    pub mod navbar;
    pub mod register;
    pub mod search;
}
mod config;

// 原生 Web API 封装模块
// 路由建立在 History API 之上，文件读取建立在 FileReader 之上。
pub(crate) mod web {
    mod file;
    pub mod route;
    pub mod router;

    pub use file::read_as_data_url;
}

use leptos::prelude::*;

use crate::auth::{AuthContext, init_auth};
use crate::components::create_flight::CreateFlightPage;
use crate::components::create_mission::CreateMissionPage;
use crate::components::edit_mission::EditMissionPage;
use crate::components::flights::FlightsPage;
use crate::components::gagarin::GagarinPage;
use crate::components::login::LoginPage;
use crate::components::missions::MissionsPage;
use crate::components::moon_order::MoonOrderPage;
use crate::components::navbar::Navbar;
use crate::components::register::RegisterPage;
use crate::components::search::SearchPage;
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Gagarin => view! { <GagarinPage /> }.into_any(),
        AppRoute::Missions => view! { <MissionsPage /> }.into_any(),
        AppRoute::MissionCreate => view! { <CreateMissionPage /> }.into_any(),
        AppRoute::MissionEdit(id) => view! { <EditMissionPage id=id /> }.into_any(),
        AppRoute::Flights => view! { <FlightsPage /> }.into_any(),
        AppRoute::FlightCreate => view! { <CreateFlightPage /> }.into_any(),
        AppRoute::Search => view! { <SearchPage /> }.into_any(),
        AppRoute::MoonOrder => view! { <MoonOrderPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[50vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-red-600">"404"</h1>
                    <p class="text-xl mt-4 text-gray-700">"Страница не найдена"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 初始化认证状态（从 LocalStorage 恢复令牌）
    init_auth(&auth_ctx);

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <div class="min-h-screen bg-gray-100">
                <Navbar />
                <main class="container mx-auto p-4">
                    <RouterOutlet matcher=route_matcher />
                </main>
            </div>
        </Router>
    }
}
