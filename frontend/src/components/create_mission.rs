//! 创建任务页：提交成功后提示并在 2 秒后回到列表页。

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use kosmos_shared::MissionPayload;

use super::mission_form::{MissionDraft, MissionForm};
use crate::auth::use_auth;
use crate::web::router::use_router;

#[component]
pub fn CreateMissionPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let draft = RwSignal::new(MissionDraft::new());
    let errors = RwSignal::new(HashMap::<&'static str, String>::new());
    let (is_saving, set_is_saving) = signal(false);
    let (success, set_success) = signal(false);

    let on_submit = Callback::new(move |payload: MissionPayload| {
        let state = auth.state.get_untracked();
        let Some(api) = state.api else {
            return;
        };

        set_is_saving.set(true);
        spawn_local(async move {
            match api.create_mission(payload).await {
                Ok(_) => {
                    set_success.set(true);
                    // 提示两秒后回列表
                    set_timeout(
                        move || router.navigate("/missions"),
                        std::time::Duration::from_secs(2),
                    );
                }
                Err(err) => {
                    let msg = err.user_message("Ошибка при создании миссии");
                    errors.update(|e| {
                        e.insert("submit", msg);
                    });
                }
            }
            set_is_saving.set(false);
        });
    });

    view! {
        <div class="max-w-4xl mx-auto mt-8">
            <Show when=move || success.get()>
                <div class="mb-4 p-4 bg-green-100 text-green-700 rounded-md">
                    "Миссия успешно создана! Перенаправление..."
                </div>
            </Show>
            <MissionForm
                title="Создание миссии"
                draft=draft
                errors=errors
                is_saving=is_saving
                on_submit=on_submit
            />
        </div>
    }
}
