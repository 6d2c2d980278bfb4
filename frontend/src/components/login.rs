//! 登录页

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{login, use_auth};

/// 登录表单草稿
#[derive(Clone, Default)]
struct LoginDraft {
    email: String,
    password: String,
}

impl LoginDraft {
    /// 必填校验，返回 字段 -> 文案 的错误表
    fn validate(&self) -> HashMap<&'static str, String> {
        let mut errors = HashMap::new();
        if self.email.is_empty() {
            errors.insert("email", "Email обязателен".to_string());
        }
        if self.password.is_empty() {
            errors.insert("password", "Пароль обязателен".to_string());
        }
        errors
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(HashMap::<&'static str, String>::new());
    let (is_loading, set_is_loading) = signal(false);

    let field_error = move |key: &'static str| errors.with(|e| e.get(key).cloned());
    let input_class = move |key: &'static str| {
        if errors.with(|e| e.contains_key(key)) {
            "mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-blue-500 focus:ring-blue-500 border-red-500"
        } else {
            "mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-blue-500 focus:ring-blue-500"
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = LoginDraft {
            email: email.get(),
            password: password.get(),
        };
        let field_errors = draft.validate();
        let valid = field_errors.is_empty();
        set_errors.set(field_errors);
        if !valid {
            return;
        }

        set_is_loading.set(true);
        spawn_local(async move {
            match login(&auth, draft.email, draft.password).await {
                // 跳转由路由服务的认证监听完成
                Ok(()) => {}
                Err(err) => {
                    let msg = err.user_message("Ошибка входа");
                    set_errors.update(|e| {
                        e.insert("email", msg);
                    });
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-10 bg-white p-8 rounded-lg shadow-md">
            <h2 class="text-2xl font-bold mb-6 text-center">"Вход в систему"</h2>
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Email"</label>
                    <input
                        type="email"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
                        class=move || input_class("email")
                    />
                    <Show when=move || field_error("email").is_some()>
                        <p class="mt-1 text-sm text-red-500">{move || field_error("email")}</p>
                    </Show>
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-700">"Пароль"</label>
                    <input
                        type="password"
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:value=password
                        class=move || input_class("password")
                    />
                    <Show when=move || field_error("password").is_some()>
                        <p class="mt-1 text-sm text-red-500">{move || field_error("password")}</p>
                    </Show>
                </div>

                <button
                    type="submit"
                    disabled=move || is_loading.get()
                    class="w-full bg-blue-600 text-white py-2 px-4 rounded-md hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 disabled:opacity-50"
                >
                    {move || if is_loading.get() { "Вход..." } else { "Войти" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_rejected() {
        let errors = LoginDraft::default().validate();
        assert_eq!(errors.get("email").map(String::as_str), Some("Email обязателен"));
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("Пароль обязателен")
        );
    }

    #[test]
    fn complete_draft_passes() {
        let draft = LoginDraft {
            email: "gagarin@kosmos.ru".to_string(),
            password: "vostok1".to_string(),
        };
        assert!(draft.validate().is_empty());
    }
}
