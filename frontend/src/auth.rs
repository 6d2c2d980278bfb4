//! 认证模块
//!
//! 管理用户会话状态，与路由系统解耦：
//! 路由服务通过注入的认证信号执行守卫，这里只负责令牌的生命周期。

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

use crate::api::{ApiError, KosmosApi};

const STORAGE_TOKEN_KEY: &str = "kosmos_token";

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// API 客户端实例（仅在持有令牌时存在）
    pub api: Option<KosmosApi>,
    /// 是否已认证
    pub is_authenticated: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态：从 LocalStorage 恢复令牌。
/// 令牌存在即视为已认证，客户端不做过期判断。
pub fn init_auth(ctx: &AuthContext) {
    let token: Option<String> = LocalStorage::get(STORAGE_TOKEN_KEY).ok();
    ctx.set_state.update(|state| {
        if let Some(token) = token {
            log::info!("[Auth] session restored from storage");
            state.api = Some(KosmosApi::new(token));
            state.is_authenticated = true;
        }
    });
}

/// 登录：成功后持久化令牌并更新内存状态。
/// 跳转由路由服务监听认证信号自动完成，调用方无需导航。
pub async fn login(ctx: &AuthContext, email: String, password: String) -> Result<(), ApiError> {
    let response = KosmosApi::unauthenticated().login(email, password).await?;

    if let Err(err) = LocalStorage::set(STORAGE_TOKEN_KEY, &response.token) {
        log::warn!("[Auth] failed to persist token: {:?}", err);
    }

    ctx.set_state.update(|state| {
        state.api = Some(KosmosApi::new(response.token));
        state.is_authenticated = true;
    });
    Ok(())
}

/// 注销：清除持久化令牌与内存状态。
/// 路由服务会监听到认证状态变化并重定向到登录页。
pub fn logout(ctx: &AuthContext) {
    LocalStorage::delete(STORAGE_TOKEN_KEY);
    ctx.set_state.update(|state| {
        state.api = None;
        state.is_authenticated = false;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_signed_out_with_no_client() {
        // 认证状态只有两个维度：客户端实例与标志位
        let state = AuthState::default();
        assert!(state.api.is_none());
        assert!(!state.is_authenticated);
    }
}
