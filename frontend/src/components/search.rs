//! 搜索页：按关键字查询任务与机组成员。

use leptos::prelude::*;
use leptos::task::spawn_local;

use kosmos_shared::date::format_display;

use crate::auth::use_auth;

#[component]
pub fn SearchPage() -> impl IntoView {
    let auth = use_auth();

    let (query, set_query) = signal(String::new());
    let (results, set_results) = signal(Vec::<kosmos_shared::SearchResult>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    // 是否已执行过一次搜索，空结果提示只在搜索后出现
    let (searched, set_searched) = signal(false);

    let handle_search = move |_| {
        let term = query.get_untracked();
        if term.trim().is_empty() {
            return;
        }
        let state = auth.state.get_untracked();
        let Some(api) = state.api else {
            return;
        };

        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api.search(term).await {
                Ok(data) => {
                    set_results.set(data);
                    set_searched.set(true);
                }
                Err(_) => {
                    set_error.set(Some("Ошибка при выполнении поиска".to_string()))
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="max-w-4xl mx-auto mt-8">
            <div class="bg-white shadow-lg rounded-lg overflow-hidden">
                <div class="p-6">
                    <h1 class="text-3xl font-bold mb-6 text-gray-800">
                        "Поиск миссий и пилотов"
                    </h1>

                    <div class="flex gap-4 mb-8">
                        <input
                            type="text"
                            placeholder="Введите поисковый запрос..."
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                            prop:value=query
                            class="flex-1 rounded-md border-gray-300 shadow-sm focus:border-blue-500 focus:ring-blue-500"
                        />
                        <button
                            on:click=handle_search
                            disabled=move || is_loading.get()
                            class="bg-blue-600 text-white px-6 py-2 rounded-md hover:bg-blue-700 transition-colors duration-200 disabled:opacity-50"
                        >
                            {move || if is_loading.get() { "Поиск..." } else { "Найти" }}
                        </button>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <div class="mb-6 p-4 bg-red-100 text-red-700 rounded-md">
                            {move || error.get()}
                        </div>
                    </Show>

                    <div class="space-y-4">
                        <For
                            each=move || results.get()
                            key=|result| result.id
                            children=move |result| {
                                view! {
                                    <div class="bg-gray-50 p-4 rounded-lg">
                                        <h2 class="text-xl font-semibold text-gray-800 mb-2">
                                            {result.name.clone()}
                                        </h2>
                                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                            <div>
                                                <p class="text-gray-600">
                                                    "Дата запуска: " {format_display(&result.launch_date)}
                                                </p>
                                                <p class="text-gray-600">
                                                    "Место запуска: " {result.launch_site.clone()}
                                                </p>
                                            </div>
                                            <div>
                                                <p class="text-gray-600">
                                                    "Дата посадки: " {format_display(&result.landing_date)}
                                                </p>
                                                <p class="text-gray-600">
                                                    "Место посадки: " {result.landing_site.clone()}
                                                </p>
                                            </div>
                                        </div>
                                        <div class="mt-2">
                                            <h3 class="font-semibold text-gray-700">"Экипаж:"</h3>
                                            <ul class="list-disc list-inside">
                                                {result
                                                    .crew_members
                                                    .iter()
                                                    .map(|member| {
                                                        view! { <li class="text-gray-600">{member.clone()}</li> }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </div>
                                }
                            }
                        />
                        <Show when=move || {
                            searched.get() && results.with(|r| r.is_empty()) && !is_loading.get()
                        }>
                            <p class="text-gray-600 text-center py-4">"Ничего не найдено"</p>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
