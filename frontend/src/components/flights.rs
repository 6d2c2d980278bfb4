//! 航班列表页：卡片展示余座并支持预订，结果用模态框提示。

use leptos::prelude::*;
use leptos::task::spawn_local;

use kosmos_shared::date::format_display;

use crate::api::ApiError;
use crate::auth::use_auth;
use crate::web::router::use_router;

/// 预订失败时展示给用户的文案
fn booking_failure_message(err: ApiError) -> String {
    match err {
        // 后端带了业务文案就原样展示，否则按满员处理
        ApiError::Api {
            message: Some(message),
            ..
        } => message,
        ApiError::Api { message: None, .. } => {
            "Превышен лимит на запись рейса".to_string()
        }
        ApiError::Network(_) | ApiError::Decode(_) => {
            "Ошибка при записи на рейс".to_string()
        }
    }
}

#[component]
pub fn FlightsPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (flights, set_flights) = signal(Vec::<kosmos_shared::Flight>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (modal_message, set_modal_message) = signal(Option::<String>::None);

    let load_flights = move || {
        let state = auth.state.get_untracked();
        if let Some(api) = state.api {
            spawn_local(async move {
                match api.flights().await {
                    Ok(data) => set_flights.set(data),
                    Err(_) => set_error.set(Some("Ошибка при загрузке рейсов".to_string())),
                }
                set_is_loading.set(false);
            });
        }
    };

    // 初始加载
    Effect::new(move |_| {
        if auth.state.get().is_authenticated {
            load_flights();
        }
    });

    let handle_book = move |id: u32| {
        let state = auth.state.get_untracked();
        if let Some(api) = state.api {
            spawn_local(async move {
                match api.book_flight(id).await {
                    Ok(_) => {
                        set_modal_message
                            .set(Some("Вы успешно записались на рейс!".to_string()));
                        // 预订成功后刷新余座
                        load_flights();
                    }
                    Err(err) => set_modal_message.set(Some(booking_failure_message(err))),
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
                            <h1 class="text-3xl font-bold text-gray-800">"Космические рейсы"</h1>
                            <div class="space-x-4">
                                <button
                                    on:click=move |_| router.navigate("/flights/create")
                                    class="bg-blue-600 text-white px-4 py-2 rounded-md hover:bg-blue-700 transition-colors duration-200"
                                >
                                    "Добавить рейс"
                                </button>
                                <button
                                    on:click=move |_| router.navigate("/gagarin")
                                    class="bg-gray-600 text-white px-4 py-2 rounded-md hover:bg-gray-700 transition-colors duration-200"
                                >
                                    "На главную страницу"
                                </button>
                            </div>
                        </div>

                        <div class="grid gap-4">
                            <For
                                each=move || flights.get()
                                key=|flight| flight.id
                                children=move |flight| {
                                    let id = flight.id;
                                    let full = flight.is_full();
                                    view! {
                                        <div class="bg-white shadow-lg rounded-lg p-6">
                                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                                                <div>
                                                    <h3 class="text-lg font-semibold text-gray-800">
                                                        "Рейс #" {flight.flight_number.clone()}
                                                    </h3>
                                                    <p class="text-gray-600">
                                                        "Место прибытия: " {flight.destination.clone()}
                                                    </p>
                                                </div>
                                                <div>
                                                    <p class="text-gray-600">
                                                        "Дата запуска: " {format_display(&flight.launch_date)}
                                                    </p>
                                                    <p class="text-gray-600">
                                                        "Доступно мест: " {flight.available_seats}
                                                        " из " {flight.seats}
                                                    </p>
                                                </div>
                                                <div class="flex items-center justify-end">
                                                    <button
                                                        on:click=move |_| handle_book(id)
                                                        disabled=full
                                                        class=if full {
                                                            "px-4 py-2 rounded-md bg-gray-400 cursor-not-allowed text-white transition-colors duration-200"
                                                        } else {
                                                            "px-4 py-2 rounded-md bg-blue-600 hover:bg-blue-700 text-white transition-colors duration-200"
                                                        }
                                                    >
                                                        {if full { "Нет мест" } else { "Записаться" }}
                                                    </button>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>

                        // 预订结果模态框
                        <Show when=move || modal_message.get().is_some()>
                            <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4">
                                <div class="bg-white rounded-lg p-6 max-w-sm w-full">
                                    <h3 class="text-lg font-semibold mb-4">
                                        {move || modal_message.get()}
                                    </h3>
                                    <button
                                        on:click=move |_| set_modal_message.set(None)
                                        class="w-full bg-blue-600 text-white px-4 py-2 rounded-md hover:bg-blue-700 transition-colors duration-200"
                                    >
                                        "Закрыть"
                                    </button>
                                </div>
                            </div>
                        </Show>
                    </div>
                }
                .into_any(),
            }}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ApiError::Api {
            status: 409,
            message: Some("Вы уже записаны на этот рейс".to_string()),
        };
        assert_eq!(booking_failure_message(err), "Вы уже записаны на этот рейс");
    }

    #[test]
    fn silent_api_error_means_seat_limit() {
        let err = ApiError::Api {
            status: 400,
            message: None,
        };
        assert_eq!(
            booking_failure_message(err),
            "Превышен лимит на запись рейса"
        );
    }

    #[test]
    fn network_failure_has_its_own_message() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(booking_failure_message(err), "Ошибка при записи на рейс");
    }
}
