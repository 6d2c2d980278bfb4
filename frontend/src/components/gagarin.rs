//! 加加林介绍页：认证后的首页，挂载时拉取一段介绍文字。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::web::router::use_router;

#[component]
pub fn GagarinPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (info, set_info) = signal(String::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    // 初始加载
    Effect::new(move |_| {
        let state = auth.state.get();
        if let Some(api) = state.api {
            spawn_local(async move {
                match api.gagarin().await {
                    Ok(data) => set_info.set(data.info),
                    Err(_) => set_error.set(Some(
                        "Ошибка при загрузке информации о Гагарине".to_string(),
                    )),
                }
                set_is_loading.set(false);
            });
        }
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
                        <div class="bg-white shadow-lg rounded-lg overflow-hidden">
                            <div class="p-6">
                                <h1 class="text-3xl font-bold mb-6 text-gray-800">"Юрий Гагарин"</h1>
                                <div class="prose max-w-none">
                                    <p class="text-gray-600 leading-relaxed">{info}</p>
                                </div>
                                <button
                                    on:click=move |_| router.navigate("/missions")
                                    class="mt-8 bg-blue-600 text-white px-6 py-2 rounded-md hover:bg-blue-700 transition-colors duration-200"
                                >
                                    "К списку миссий"
                                </button>
                            </div>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </Show>
    }
}
