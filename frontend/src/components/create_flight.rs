//! 创建航班页

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use kosmos_shared::FlightPayload;

use crate::auth::use_auth;
use crate::web::router::use_router;

/// 航班表单草稿：座位数以字符串持有，提交时再解析
#[derive(Clone, Default)]
struct FlightDraft {
    flight_number: String,
    destination: String,
    launch_date: String,
    seats: String,
}

impl FlightDraft {
    fn validate(&self) -> HashMap<&'static str, String> {
        let mut errors = HashMap::new();
        if self.flight_number.is_empty() {
            errors.insert("flight_number", "Номер рейса обязателен".to_string());
        }
        if self.destination.is_empty() {
            errors.insert("destination", "Место назначения обязательно".to_string());
        }
        if self.launch_date.is_empty() {
            errors.insert("launch_date", "Дата запуска обязательна".to_string());
        }
        if self.seats.is_empty() {
            errors.insert("seats", "Количество мест обязательно".to_string());
        }
        errors
    }

    fn to_payload(&self) -> FlightPayload {
        FlightPayload {
            flight_number: self.flight_number.clone(),
            destination: self.destination.clone(),
            launch_date: self.launch_date.clone(),
            seats: self.seats.trim().parse().unwrap_or(0),
        }
    }
}

#[component]
pub fn CreateFlightPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (flight_number, set_flight_number) = signal(String::new());
    let (destination, set_destination) = signal(String::new());
    let (launch_date, set_launch_date) = signal(String::new());
    let (seats, set_seats) = signal(String::new());
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

        let draft = FlightDraft {
            flight_number: flight_number.get(),
            destination: destination.get(),
            launch_date: launch_date.get(),
            seats: seats.get(),
        };
        let field_errors = draft.validate();
        let valid = field_errors.is_empty();
        set_errors.set(field_errors);
        if !valid {
            return;
        }

        let state = auth.state.get_untracked();
        let Some(api) = state.api else {
            return;
        };

        set_is_loading.set(true);
        spawn_local(async move {
            match api.create_flight(draft.to_payload()).await {
                Ok(_) => router.navigate("/flights"),
                Err(_) => {
                    set_errors.update(|e| {
                        e.insert("submit", "Ошибка при создании рейса".to_string());
                    });
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto mt-8">
            <div class="bg-white shadow-lg rounded-lg overflow-hidden">
                <div class="p-6">
                    <h1 class="text-3xl font-bold mb-6 text-gray-800">
                        "Создание космического рейса"
                    </h1>

                    <form on:submit=on_submit class="space-y-6">
                        <div>
                            <label class="block text-sm font-medium text-gray-700">
                                "Номер рейса"
                            </label>
                            <input
                                type="text"
                                on:input=move |ev| set_flight_number.set(event_target_value(&ev))
                                prop:value=flight_number
                                class=move || input_class("flight_number")
                            />
                            <Show when=move || field_error("flight_number").is_some()>
                                <p class="mt-1 text-sm text-red-500">
                                    {move || field_error("flight_number")}
                                </p>
                            </Show>
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700">
                                "Место назначения"
                            </label>
                            <input
                                type="text"
                                on:input=move |ev| set_destination.set(event_target_value(&ev))
                                prop:value=destination
                                class=move || input_class("destination")
                            />
                            <Show when=move || field_error("destination").is_some()>
                                <p class="mt-1 text-sm text-red-500">
                                    {move || field_error("destination")}
                                </p>
                            </Show>
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700">
                                "Дата запуска"
                            </label>
                            <input
                                type="date"
                                on:input=move |ev| set_launch_date.set(event_target_value(&ev))
                                prop:value=launch_date
                                class=move || input_class("launch_date")
                            />
                            <Show when=move || field_error("launch_date").is_some()>
                                <p class="mt-1 text-sm text-red-500">
                                    {move || field_error("launch_date")}
                                </p>
                            </Show>
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700">
                                "Количество мест"
                            </label>
                            <input
                                type="number"
                                min="1"
                                on:input=move |ev| set_seats.set(event_target_value(&ev))
                                prop:value=seats
                                class=move || input_class("seats")
                            />
                            <Show when=move || field_error("seats").is_some()>
                                <p class="mt-1 text-sm text-red-500">
                                    {move || field_error("seats")}
                                </p>
                            </Show>
                        </div>

                        <Show when=move || field_error("submit").is_some()>
                            <div class="p-3 bg-red-100 text-red-700 rounded-md">
                                {move || field_error("submit")}
                            </div>
                        </Show>

                        <div class="flex justify-between">
                            <button
                                type="button"
                                on:click=move |_| router.navigate("/flights")
                                class="bg-gray-600 text-white px-6 py-2 rounded-md hover:bg-gray-700 transition-colors duration-200"
                            >
                                "К списку рейсов"
                            </button>
                            <button
                                type="submit"
                                disabled=move || is_loading.get()
                                class="bg-blue-600 text-white px-6 py-2 rounded-md hover:bg-blue-700 transition-colors duration-200 disabled:opacity-50"
                            >
                                {move || if is_loading.get() { "Сохранение..." } else { "Сохранить" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_reports_every_field() {
        let errors = FlightDraft::default().validate();
        assert_eq!(
            errors.get("flight_number").map(String::as_str),
            Some("Номер рейса обязателен")
        );
        assert!(errors.contains_key("destination"));
        assert!(errors.contains_key("launch_date"));
        assert!(errors.contains_key("seats"));
    }

    #[test]
    fn payload_parses_seat_count() {
        let draft = FlightDraft {
            flight_number: "ЛК-42".to_string(),
            destination: "Море Спокойствия".to_string(),
            launch_date: "2026-09-12".to_string(),
            seats: " 12 ".to_string(),
        };
        assert!(draft.validate().is_empty());
        let payload = draft.to_payload();
        assert_eq!(payload.seats, 12);
        assert_eq!(payload.flight_number, "ЛК-42");
    }

    #[test]
    fn unparsable_seats_fall_back_to_zero() {
        let draft = FlightDraft {
            seats: "много".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.to_payload().seats, 0);
    }
}
