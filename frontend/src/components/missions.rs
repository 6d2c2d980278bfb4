//! 任务列表页：手风琴式展开详情，支持编辑跳转与删除。

use leptos::prelude::*;
use leptos::task::spawn_local;

use kosmos_shared::date::format_display;

use super::icons::{ChevronDown, ChevronUp, Edit, Trash2};
use crate::auth::use_auth;
use crate::web::router::use_router;

/// 删除前的浏览器原生确认框
fn confirm_delete() -> bool {
    web_sys::window()
        .map(|w| {
            w.confirm_with_message("Вы уверены, что хотите удалить эту миссию?")
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[component]
pub fn MissionsPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (missions, set_missions) = signal(Vec::<kosmos_shared::Mission>::new());
    let (open_mission_id, set_open_mission_id) = signal(Option::<u32>::None);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let load_missions = move || {
        let state = auth.state.get_untracked();
        if let Some(api) = state.api {
            spawn_local(async move {
                match api.missions().await {
                    Ok(data) => set_missions.set(data),
                    Err(_) => set_error.set(Some("Ошибка при загрузке миссий".to_string())),
                }
                set_is_loading.set(false);
            });
        }
    };

    // 初始加载
    Effect::new(move |_| {
        if auth.state.get().is_authenticated {
            load_missions();
        }
    });

    let handle_delete = move |id: u32| {
        if !confirm_delete() {
            return;
        }
        let state = auth.state.get_untracked();
        if let Some(api) = state.api {
            spawn_local(async move {
                match api.delete_mission(id).await {
                    // 删除后重新拉取列表，保持与后端一致
                    Ok(()) => load_missions(),
                    Err(_) => set_error.set(Some("Ошибка при удалении миссии".to_string())),
                }
            });
        }
    };

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
            {move || match error.get() {
                Some(message) => view! {
                    <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative" role="alert">
                        <strong class="font-bold">"Ошибка!"</strong>
                        <span class="block sm:inline">" " {message}</span>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="max-w-4xl mx-auto mt-8">
                        <div class="flex justify-between items-center mb-6">
                            <h1 class="text-3xl font-bold text-gray-800">"Миссии"</h1>
                            <button
                                on:click=move |_| router.navigate("/missions/create")
                                class="bg-blue-600 text-white px-4 py-2 rounded-md hover:bg-blue-700 transition-colors duration-200"
                            >
                                "Добавить миссию"
                            </button>
                        </div>

                        <div class="space-y-4">
                            <For
                                each=move || missions.get()
                                key=|mission| mission.id
                                children=move |mission| {
                                    let id = mission.id;
                                    let is_open = move || open_mission_id.get() == Some(id);
                                    view! {
                                        <div class="bg-white shadow-lg rounded-lg overflow-hidden">
                                            <div
                                                class="p-4 flex justify-between items-center cursor-pointer hover:bg-gray-50"
                                                on:click=move |_| set_open_mission_id.update(|open| {
                                                    *open = if *open == Some(id) { None } else { Some(id) };
                                                })
                                            >
                                                <h2 class="text-xl font-semibold text-gray-800">
                                                    {mission.name.clone()}
                                                </h2>
                                                <div class="flex items-center space-x-4">
                                                    <button
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            router.navigate(&format!("/missions/edit/{}", id));
                                                        }
                                                        class="text-blue-600 hover:text-blue-800"
                                                    >
                                                        <Edit />
                                                    </button>
                                                    <button
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            handle_delete(id);
                                                        }
                                                        class="text-red-600 hover:text-red-800"
                                                    >
                                                        <Trash2 />
                                                    </button>
                                                    <Show
                                                        when=is_open
                                                        fallback=|| view! { <ChevronDown /> }
                                                    >
                                                        <ChevronUp />
                                                    </Show>
                                                </div>
                                            </div>

                                            <Show when=is_open>
                                                <div class="p-4 border-t border-gray-200 bg-gray-50">
                                                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                                        <div>
                                                            <h3 class="font-semibold text-gray-700 mb-2">
                                                                "Информация о запуске"
                                                            </h3>
                                                            <p>"Дата запуска: " {format_display(&mission.launch_date)}</p>
                                                            <p>"Место запуска: " {mission.launch_site.clone()}</p>
                                                            <p>
                                                                "Координаты: " {mission.launch_latitude} ", "
                                                                {mission.launch_longitude}
                                                            </p>
                                                        </div>
                                                        <div>
                                                            <h3 class="font-semibold text-gray-700 mb-2">
                                                                "Информация о посадке"
                                                            </h3>
                                                            <p>"Дата посадки: " {format_display(&mission.landing_date)}</p>
                                                            <p>"Место посадки: " {mission.landing_site.clone()}</p>
                                                            <p>
                                                                "Координаты: " {mission.landing_latitude} ", "
                                                                {mission.landing_longitude}
                                                            </p>
                                                        </div>
                                                    </div>
                                                    <div class="mt-4">
                                                        <h3 class="font-semibold text-gray-700 mb-2">
                                                            "Космический корабль"
                                                        </h3>
                                                        <p>"Лунный модуль: " {mission.lunar_module.clone()}</p>
                                                        <p>"Управляющий модуль: " {mission.command_module.clone()}</p>
                                                        <div class="mt-2">
                                                            <h4 class="font-semibold text-gray-700">
                                                                "Участники миссии:"
                                                            </h4>
                                                            <ul class="list-disc list-inside">
                                                                {mission
                                                                    .crew_members
                                                                    .iter()
                                                                    .map(|member| view! { <li>{member.clone()}</li> })
                                                                    .collect_view()}
                                                            </ul>
                                                        </div>
                                                    </div>
                                                </div>
                                            </Show>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </Show>
    }
}
