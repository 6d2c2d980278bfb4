//! 编辑任务页：先拉取任务填充表单，保存成功后回到列表页。

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use kosmos_shared::MissionPayload;

use super::mission_form::{MissionDraft, MissionForm};
use crate::auth::use_auth;
use crate::web::router::use_router;

#[component]
pub fn EditMissionPage(id: u32) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let draft = RwSignal::new(MissionDraft::new());
    let errors = RwSignal::new(HashMap::<&'static str, String>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (is_saving, set_is_saving) = signal(false);
    let (success, set_success) = signal(false);
    let (load_error, set_load_error) = signal(Option::<String>::None);

    // 初始加载
    Effect::new(move |_| {
        let state = auth.state.get();
        if let Some(api) = state.api {
            spawn_local(async move {
                match api.mission(id).await {
                    Ok(mission) => draft.set(MissionDraft::from_mission(&mission)),
                    Err(_) => {
                        set_load_error.set(Some("Ошибка при загрузке миссии".to_string()))
                    }
                }
                set_is_loading.set(false);
            });
        }
    });

    let on_submit = Callback::new(move |payload: MissionPayload| {
        let state = auth.state.get_untracked();
        let Some(api) = state.api else {
            return;
        };

        set_is_saving.set(true);
        spawn_local(async move {
            match api.update_mission(id, payload).await {
                Ok(_) => {
                    set_success.set(true);
                    set_timeout(
                        move || router.navigate("/missions"),
                        std::time::Duration::from_secs(2),
                    );
                }
                Err(err) => {
                    let msg = err.user_message("Ошибка при обновлении миссии");
                    errors.update(|e| {
                        e.insert("submit", msg);
                    });
                }
            }
            set_is_saving.set(false);
        });
    });

    view! {
        <Show
            when=move || !is_loading.get()
            fallback=|| {
                view! {
                    <div class="flex justify-center items-center min-h-[50vh]">
                        <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600"></div>
                    </div>
                }
            }
        >
            {move || match load_error.get() {
                Some(message) => view! {
                    <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative" role="alert">
                        <strong class="font-bold">"Ошибка!"</strong>
                        <span class="block sm:inline">" " {message}</span>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="max-w-4xl mx-auto mt-8">
                        <Show when=move || success.get()>
                            <div class="mb-4 p-4 bg-green-100 text-green-700 rounded-md">
                                "Миссия успешно обновлена! Перенаправление..."
                            </div>
                        </Show>
                        <MissionForm
                            title="Редактирование миссии"
                            draft=draft
                            errors=errors
                            is_saving=is_saving
                            on_submit=on_submit
                        />
                    </div>
                }
                .into_any(),
            }}
        </Show>
    }
}
