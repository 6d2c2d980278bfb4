//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都集中在此。
//! 导航流程：请求 -> 验证(Guard) -> 写入 History -> 更新信号。
//! 认证状态通过注入的 Signal 检查，与认证模块解耦。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 写入 History 状态；重定向用 replaceState，避免污染后退栈
fn write_history(path: &str, push: bool) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let result = if push {
                history.push_state_with_url(&JsValue::NULL, "", Some(path))
            } else {
                history.replace_state_with_url(&JsValue::NULL, "", Some(path))
            };
            if let Err(err) = result {
                log::warn!("history write failed: {:?}", err);
            }
        }
    }
}

/// 路由器服务
///
/// 所有路由操作的唯一入口，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        // 初始路由从当前 URL 解析
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    /// 导航到指定路由
    ///
    /// # Arguments
    /// * `target_route` - 目标路由
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();

        // --- Step 1: 验证目标路由 ---
        // 未认证访问受保护页面 -> 登录页
        if target_route.requires_auth() && !is_auth {
            log::info!("[Router] access denied, redirecting to login");
            let redirect = AppRoute::auth_failure_redirect();
            write_history(&redirect.to_path(), use_push);
            self.set_route.set(redirect);
            return;
        }

        // 已认证访问登录/注册页 -> 首页
        if target_route.should_redirect_when_authenticated() && is_auth {
            log::info!("[Router] already authenticated, redirecting to gagarin");
            let redirect = AppRoute::auth_success_redirect();
            write_history(&redirect.to_path(), use_push);
            self.set_route.set(redirect);
            return;
        }

        // --- Step 2: 加载页面 (更新状态) ---
        write_history(&target_route.to_path(), use_push);
        self.set_route.set(target_route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            let is_auth = is_authenticated.get_untracked();

            // popstate 时也执行守卫逻辑
            if target_route.requires_auth() && !is_auth {
                let redirect = AppRoute::auth_failure_redirect();
                write_history(&redirect.to_path(), false);
                set_route.set(redirect);
            } else {
                set_route.set(target_route);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时的自动重定向：
    /// 登录后离开登录/注册页，登出后离开受保护页面。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if is_auth && route.should_redirect_when_authenticated() {
                log::info!("[Router] logged in, redirecting to gagarin");
                let redirect = AppRoute::auth_success_redirect();
                write_history(&redirect.to_path(), true);
                set_route.set(redirect);
            } else if !is_auth && route.requires_auth() {
                log::info!("[Router] logged out, redirecting to login");
                let redirect = AppRoute::auth_failure_redirect();
                write_history(&redirect.to_path(), true);
                set_route.set(redirect);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化监听器
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 应用内链接：拦截点击事件，走 pushState 而非整页跳转
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    /// 附加的 class
    #[prop(into, optional)]
    class: Option<String>,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let href = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&to);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
