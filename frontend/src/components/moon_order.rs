//! 月面签名页：拖拽或选择图片，附上留言后由后端加水印返回。

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::web::read_as_data_url;
use crate::web::router::use_router;

#[component]
pub fn MoonOrderPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    // web_sys::File 不是 Send，只能放本地信号
    let (image, set_image) = signal_local(Option::<web_sys::File>::None);
    let (preview, set_preview) = signal(Option::<String>::None);
    let (message, set_message) = signal(String::new());
    let (signed_image, set_signed_image) = signal(Option::<String>::None);
    let (is_dragging, set_is_dragging) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let file_input = NodeRef::<html::Input>::new();

    // 接收文件：只认图片类型，同时生成预览
    let accept_file = move |file: Option<web_sys::File>| {
        match file {
            Some(file) if file.type_().starts_with("image/") => {
                set_error.set(None);
                read_as_data_url(&file, move |data_url| {
                    set_preview.set(Some(data_url));
                });
                set_image.set(Some(file));
            }
            _ => set_error.set(Some("Пожалуйста, загрузите изображение".to_string())),
        }
    };

    let on_drag_over = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };
    let on_drag_leave = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
    };
    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        let file = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0));
        accept_file(file);
    };

    let on_file_input = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        accept_file(file);
    };

    let clear_image = move |_| {
        set_image.set(None);
        set_preview.set(None);
    };

    let handle_submit = move |_| {
        let file = image.get_untracked();
        let text = message.get_untracked();
        let (Some(file), false) = (file, text.is_empty()) else {
            set_error.set(Some(
                "Пожалуйста, загрузите изображение и введите сообщение".to_string(),
            ));
            return;
        };
        let state = auth.state.get_untracked();
        let Some(api) = state.api else {
            return;
        };

        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api.moon_order(&file, &text).await {
                Ok(data) => set_signed_image.set(Some(data.signed_image)),
                Err(_) => set_error.set(Some("Ошибка при создании заказа".to_string())),
            }
            set_is_loading.set(false);
        });
    };

    let can_submit = move || {
        !is_loading.get() && image.with(|i| i.is_some()) && !message.with(|m| m.is_empty())
    };

    view! {
        <div class="max-w-4xl mx-auto mt-8">
            <div class="bg-white shadow-lg rounded-lg overflow-hidden">
                <div class="p-6">
                    <h1 class="text-3xl font-bold mb-6 text-gray-800">"Заказ на Луне"</h1>

                    <div class="space-y-6">
                        <div
                            class=move || {
                                if is_dragging.get() {
                                    "border-2 border-dashed rounded-lg p-8 text-center border-blue-500 bg-blue-50"
                                } else {
                                    "border-2 border-dashed rounded-lg p-8 text-center border-gray-300"
                                }
                            }
                            on:dragover=on_drag_over
                            on:dragleave=on_drag_leave
                            on:drop=on_drop
                        >
                            <Show
                                when=move || preview.get().is_some()
                                fallback=move || {
                                    view! {
                                        <div>
                                            <p class="text-gray-600 mb-4">
                                                "Перетащите изображение сюда или"
                                            </p>
                                            <button
                                                on:click=move |_| {
                                                    if let Some(input) = file_input.get() {
                                                        input.click();
                                                    }
                                                }
                                                class="bg-blue-600 text-white px-4 py-2 rounded-md hover:bg-blue-700 transition-colors duration-200"
                                            >
                                                "Выберите файл"
                                            </button>
                                            <input
                                                type="file"
                                                node_ref=file_input
                                                on:change=on_file_input
                                                accept="image/*"
                                                class="hidden"
                                            />
                                        </div>
                                    }
                                }
                            >
                                <div class="relative">
                                    <img
                                        src=move || preview.get().unwrap_or_default()
                                        alt="Preview"
                                        class="max-h-64 mx-auto rounded-lg"
                                    />
                                    <button
                                        on:click=clear_image
                                        class="absolute top-2 right-2 bg-red-600 text-white p-2 rounded-full hover:bg-red-700"
                                    >
                                        "✕"
                                    </button>
                                </div>
                            </Show>
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-2">
                                "Текстовое сообщение"
                            </label>
                            <textarea
                                rows="4"
                                placeholder="Введите ваше сообщение..."
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                                prop:value=message
                                class="w-full rounded-md border-gray-300 shadow-sm focus:border-blue-500 focus:ring-blue-500"
                            ></textarea>
                        </div>

                        <Show when=move || error.get().is_some()>
                            <div class="p-3 bg-red-100 text-red-700 rounded-md">
                                {move || error.get()}
                            </div>
                        </Show>

                        <Show when=move || signed_image.get().is_some()>
                            <div class="text-center">
                                <h2 class="text-xl font-semibold mb-4">
                                    "Ваш заказ с водяным знаком"
                                </h2>
                                <img
                                    src=move || signed_image.get().unwrap_or_default()
                                    alt="Signed"
                                    class="max-h-64 mx-auto rounded-lg"
                                />
                            </div>
                        </Show>

                        <div class="flex justify-between">
                            <button
                                on:click=move |_| router.navigate("/gagarin")
                                class="bg-gray-600 text-white px-6 py-2 rounded-md hover:bg-gray-700 transition-colors duration-200"
                            >
                                "На главную"
                            </button>
                            <button
                                on:click=handle_submit
                                disabled=move || !can_submit()
                                class="bg-blue-600 text-white px-6 py-2 rounded-md hover:bg-blue-700 transition-colors duration-200 disabled:opacity-50"
                            >
                                {move || if is_loading.get() { "Обработка..." } else { "Сделать подпись" }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
