//! 注册页

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::KosmosApi;
use crate::web::router::use_router;

/// 注册表单草稿
#[derive(Clone, Default)]
struct RegisterDraft {
    email: String,
    password: String,
    confirm_password: String,
}

impl RegisterDraft {
    fn validate(&self) -> HashMap<&'static str, String> {
        let mut errors = HashMap::new();
        if self.email.is_empty() {
            errors.insert("email", "Email обязателен".to_string());
        }
        if self.password.is_empty() {
            errors.insert("password", "Пароль обязателен".to_string());
        }
        if self.password != self.confirm_password {
            errors.insert("confirm_password", "Пароли не совпадают".to_string());
        }
        errors
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
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

        let draft = RegisterDraft {
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };
        let field_errors = draft.validate();
        let valid = field_errors.is_empty();
        set_errors.set(field_errors);
        if !valid {
            return;
        }

        set_is_loading.set(true);
        spawn_local(async move {
            match KosmosApi::unauthenticated()
                .register(draft.email, draft.password)
                .await
            {
                Ok(_) => router.navigate("/login"),
                Err(err) => {
                    let msg = err.user_message("Ошибка регистрации");
                    set_errors.update(|e| {
                        e.insert("submit", msg);
                    });
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-10 bg-white p-8 rounded-lg shadow-md">
            <h2 class="text-2xl font-bold mb-6 text-center">"Регистрация"</h2>
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

                <div>
                    <label class="block text-sm font-medium text-gray-700">
                        "Подтверждение пароля"
                    </label>
                    <input
                        type="password"
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                        prop:value=confirm_password
                        class=move || input_class("confirm_password")
                    />
                    <Show when=move || field_error("confirm_password").is_some()>
                        <p class="mt-1 text-sm text-red-500">
                            {move || field_error("confirm_password")}
                        </p>
                    </Show>
                </div>

                <Show when=move || field_error("submit").is_some()>
                    <div class="p-3 bg-red-100 text-red-700 rounded-md">
                        {move || field_error("submit")}
                    </div>
                </Show>

                <button
                    type="submit"
                    disabled=move || is_loading.get()
                    class="w-full bg-blue-600 text-white py-2 px-4 rounded-md hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 disabled:opacity-50"
                >
                    {move || if is_loading.get() { "Регистрация..." } else { "Зарегистрироваться" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_passwords_are_rejected() {
        let draft = RegisterDraft {
            email: "titov@kosmos.ru".to_string(),
            password: "vostok2".to_string(),
            confirm_password: "vostok3".to_string(),
        };
        let errors = draft.validate();
        assert_eq!(
            errors.get("confirm_password").map(String::as_str),
            Some("Пароли не совпадают")
        );
    }

    #[test]
    fn empty_draft_collects_all_required_errors() {
        let errors = RegisterDraft::default().validate();
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("password"));
        // 两个空密码相等，不报不匹配
        assert!(!errors.contains_key("confirm_password"));
    }

    #[test]
    fn matching_draft_passes() {
        let draft = RegisterDraft {
            email: "titov@kosmos.ru".to_string(),
            password: "vostok2".to_string(),
            confirm_password: "vostok2".to_string(),
        };
        assert!(draft.validate().is_empty());
    }
}
