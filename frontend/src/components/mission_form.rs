//! 任务表单模块（创建/编辑共用）
//!
//! 把零散的输入整合为 `MissionDraft` 草稿结构体，负责：
//! - 表单数据的持有与校验
//! - 草稿到请求体的转换（坐标字符串 -> f64）
//! - 机组成员动态行的增删

use std::collections::HashMap;

use leptos::prelude::*;

use kosmos_shared::{Mission, MissionPayload};

use crate::web::router::use_router;

/// 任务表单草稿：所有字段以字符串持有，提交时再做类型转换
#[derive(Clone, Default, PartialEq)]
pub struct MissionDraft {
    pub name: String,
    pub launch_date: String,
    pub landing_date: String,
    pub launch_site: String,
    pub launch_latitude: String,
    pub launch_longitude: String,
    pub landing_site: String,
    pub landing_latitude: String,
    pub landing_longitude: String,
    pub lunar_module: String,
    pub command_module: String,
    pub crew_members: Vec<String>,
}

impl MissionDraft {
    /// 空草稿，机组列表始终保留至少一行输入
    pub fn new() -> Self {
        Self {
            crew_members: vec![String::new()],
            ..Default::default()
        }
    }

    /// 编辑页：用已有任务填充草稿
    pub fn from_mission(mission: &Mission) -> Self {
        let crew_members = if mission.crew_members.is_empty() {
            vec![String::new()]
        } else {
            mission.crew_members.clone()
        };
        Self {
            name: mission.name.clone(),
            launch_date: mission.launch_date.clone(),
            landing_date: mission.landing_date.clone(),
            launch_site: mission.launch_site.clone(),
            launch_latitude: mission.launch_latitude.to_string(),
            launch_longitude: mission.launch_longitude.to_string(),
            landing_site: mission.landing_site.clone(),
            landing_latitude: mission.landing_latitude.to_string(),
            landing_longitude: mission.landing_longitude.to_string(),
            lunar_module: mission.lunar_module.clone(),
            command_module: mission.command_module.clone(),
            crew_members,
        }
    }

    /// 必填校验，返回 字段 -> 文案 的错误表。
    /// 坐标与模块名可以为空。
    pub fn validate(&self) -> HashMap<&'static str, String> {
        let mut errors = HashMap::new();
        if self.name.is_empty() {
            errors.insert("name", "Название миссии обязательно".to_string());
        }
        if self.launch_date.is_empty() {
            errors.insert("launch_date", "Дата запуска обязательна".to_string());
        }
        if self.landing_date.is_empty() {
            errors.insert("landing_date", "Дата посадки обязательна".to_string());
        }
        if self.launch_site.is_empty() {
            errors.insert("launch_site", "Место запуска обязательно".to_string());
        }
        if self.landing_site.is_empty() {
            errors.insert("landing_site", "Место посадки обязательно".to_string());
        }
        errors
    }

    /// 转为请求体：空白或非法坐标按 0 处理，空白机组行被丢弃
    pub fn to_payload(&self) -> MissionPayload {
        fn coord(value: &str) -> f64 {
            value.trim().parse().unwrap_or(0.0)
        }

        MissionPayload {
            name: self.name.clone(),
            launch_date: self.launch_date.clone(),
            landing_date: self.landing_date.clone(),
            launch_site: self.launch_site.clone(),
            launch_latitude: coord(&self.launch_latitude),
            launch_longitude: coord(&self.launch_longitude),
            landing_site: self.landing_site.clone(),
            landing_latitude: coord(&self.landing_latitude),
            landing_longitude: coord(&self.landing_longitude),
            lunar_module: self.lunar_module.clone(),
            command_module: self.command_module.clone(),
            crew_members: self
                .crew_members
                .iter()
                .filter(|member| !member.trim().is_empty())
                .cloned()
                .collect(),
        }
    }
}

/// 单个表单字段：label + input + 错误文案
#[component]
fn FormField(
    #[prop(into)] label: String,
    /// input 的 type，默认 text
    #[prop(into, optional)] input_type: Option<String>,
    /// number 输入的步长
    #[prop(into, optional)] step: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, optional)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let has_error = move || error.map(|e| e.get().is_some()).unwrap_or(false);
    let input_class = move || {
        if has_error() {
            "mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-blue-500 focus:ring-blue-500 border-red-500"
        } else {
            "mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-blue-500 focus:ring-blue-500"
        }
    };

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700">{label}</label>
            <input
                type=input_type.unwrap_or_else(|| "text".to_string())
                step=step
                on:input=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
                class=input_class
            />
            <Show when=has_error>
                <p class="mt-1 text-sm text-red-500">
                    {move || error.and_then(|e| e.get())}
                </p>
            </Show>
        </div>
    }
}

/// 任务表单组件
///
/// 校验在表单内完成，通过校验后把请求体交给 `on_submit`；
/// 提交失败的文案由父组件写进 `errors["submit"]`。
#[component]
pub fn MissionForm(
    #[prop(into)] title: String,
    draft: RwSignal<MissionDraft>,
    errors: RwSignal<HashMap<&'static str, String>>,
    #[prop(into)] is_saving: Signal<bool>,
    #[prop(into)] on_submit: Callback<MissionPayload>,
) -> impl IntoView {
    let router = use_router();

    let field_error = move |key: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(key).cloned()))
    };

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let current = draft.get_untracked();
        let field_errors = current.validate();
        let valid = field_errors.is_empty();
        errors.set(field_errors);
        if valid {
            on_submit.run(current.to_payload());
        }
    };

    let add_crew_member = move |_| {
        draft.update(|d| d.crew_members.push(String::new()));
    };
    let remove_crew_member = move |index: usize| {
        draft.update(|d| {
            if d.crew_members.len() > 1 {
                d.crew_members.remove(index);
            }
        });
    };

    view! {
        <div class="bg-white shadow-lg rounded-lg overflow-hidden">
            <div class="p-6">
                <h1 class="text-3xl font-bold mb-6 text-gray-800">{title}</h1>

                <form on:submit=on_form_submit class="space-y-6">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <FormField
                            label="Название миссии"
                            value=Signal::derive(move || draft.with(|d| d.name.clone()))
                            on_change=Callback::new(move |v| draft.update(|d| d.name = v))
                            error=field_error("name")
                        />
                        <FormField
                            label="Дата запуска"
                            input_type="date"
                            value=Signal::derive(move || draft.with(|d| d.launch_date.clone()))
                            on_change=Callback::new(move |v| draft.update(|d| d.launch_date = v))
                            error=field_error("launch_date")
                        />
                        <FormField
                            label="Дата посадки"
                            input_type="date"
                            value=Signal::derive(move || draft.with(|d| d.landing_date.clone()))
                            on_change=Callback::new(move |v| draft.update(|d| d.landing_date = v))
                            error=field_error("landing_date")
                        />
                        <FormField
                            label="Место запуска"
                            value=Signal::derive(move || draft.with(|d| d.launch_site.clone()))
                            on_change=Callback::new(move |v| draft.update(|d| d.launch_site = v))
                            error=field_error("launch_site")
                        />
                        <FormField
                            label="Широта запуска"
                            input_type="number"
                            step="0.000001"
                            value=Signal::derive(move || draft.with(|d| d.launch_latitude.clone()))
                            on_change=Callback::new(move |v| draft.update(|d| d.launch_latitude = v))
                        />
                        <FormField
                            label="Долгота запуска"
                            input_type="number"
                            step="0.000001"
                            value=Signal::derive(move || draft.with(|d| d.launch_longitude.clone()))
                            on_change=Callback::new(move |v| draft.update(|d| d.launch_longitude = v))
                        />
                        <FormField
                            label="Место посадки"
                            value=Signal::derive(move || draft.with(|d| d.landing_site.clone()))
                            on_change=Callback::new(move |v| draft.update(|d| d.landing_site = v))
                            error=field_error("landing_site")
                        />
                        <FormField
                            label="Широта посадки"
                            input_type="number"
                            step="0.000001"
                            value=Signal::derive(move || draft.with(|d| d.landing_latitude.clone()))
                            on_change=Callback::new(move |v| draft.update(|d| d.landing_latitude = v))
                        />
                        <FormField
                            label="Долгота посадки"
                            input_type="number"
                            step="0.000001"
                            value=Signal::derive(move || draft.with(|d| d.landing_longitude.clone()))
                            on_change=Callback::new(move |v| draft.update(|d| d.landing_longitude = v))
                        />
                        <FormField
                            label="Лунный модуль"
                            value=Signal::derive(move || draft.with(|d| d.lunar_module.clone()))
                            on_change=Callback::new(move |v| draft.update(|d| d.lunar_module = v))
                        />
                        <FormField
                            label="Управляющий модуль"
                            value=Signal::derive(move || draft.with(|d| d.command_module.clone()))
                            on_change=Callback::new(move |v| draft.update(|d| d.command_module = v))
                        />
                    </div>

                    // 机组成员动态列表
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">
                            "Участники миссии"
                        </label>
                        <For
                            each=move || 0..draft.with(|d| d.crew_members.len())
                            key=|index| *index
                            children=move |index| {
                                view! {
                                    <div class="flex gap-2 mb-2">
                                        <input
                                            type="text"
                                            placeholder="Имя участника"
                                            prop:value=move || {
                                                draft.with(|d| {
                                                    d.crew_members.get(index).cloned().unwrap_or_default()
                                                })
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                draft.update(|d| {
                                                    if let Some(member) = d.crew_members.get_mut(index) {
                                                        *member = value;
                                                    }
                                                });
                                            }
                                            class="flex-1 rounded-md border-gray-300 shadow-sm focus:border-blue-500 focus:ring-blue-500"
                                        />
                                        <Show when=move || draft.with(|d| d.crew_members.len() > 1)>
                                            <button
                                                type="button"
                                                on:click=move |_| remove_crew_member(index)
                                                class="px-3 py-2 bg-red-600 text-white rounded-md hover:bg-red-700"
                                            >
                                                "Удалить"
                                            </button>
                                        </Show>
                                    </div>
                                }
                            }
                        />
                        <button
                            type="button"
                            on:click=add_crew_member
                            class="mt-2 px-4 py-2 bg-gray-600 text-white rounded-md hover:bg-gray-700"
                        >
                            "Добавить участника"
                        </button>
                    </div>

                    <Show when=move || errors.with(|e| e.contains_key("submit"))>
                        <div class="p-3 bg-red-100 text-red-700 rounded-md">
                            {move || errors.with(|e| e.get("submit").cloned())}
                        </div>
                    </Show>

                    <div class="flex justify-between">
                        <button
                            type="button"
                            on:click=move |_| router.navigate("/missions")
                            class="bg-gray-600 text-white px-6 py-2 rounded-md hover:bg-gray-700 transition-colors duration-200"
                        >
                            "К списку миссий"
                        </button>
                        <button
                            type="submit"
                            disabled=move || is_saving.get()
                            class="bg-blue-600 text-white px-6 py-2 rounded-md hover:bg-blue-700 transition-colors duration-200 disabled:opacity-50"
                        >
                            {move || if is_saving.get() { "Сохранение..." } else { "Сохранить" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> MissionDraft {
        MissionDraft {
            name: "Аполлон-11".to_string(),
            launch_date: "1969-07-16".to_string(),
            landing_date: "1969-07-24".to_string(),
            launch_site: "Мыс Канаверал".to_string(),
            launch_latitude: "28.573255".to_string(),
            launch_longitude: "-80.646895".to_string(),
            landing_site: "Тихий океан".to_string(),
            landing_latitude: "".to_string(),
            landing_longitude: "не число".to_string(),
            lunar_module: "Eagle".to_string(),
            command_module: "Columbia".to_string(),
            crew_members: vec![
                "Армстронг".to_string(),
                "  ".to_string(),
                "Олдрин".to_string(),
            ],
        }
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = MissionDraft::new().validate();
        assert_eq!(
            errors.get("name").map(String::as_str),
            Some("Название миссии обязательно")
        );
        assert!(errors.contains_key("launch_date"));
        assert!(errors.contains_key("landing_date"));
        assert!(errors.contains_key("launch_site"));
        assert!(errors.contains_key("landing_site"));
        // 坐标与模块名非必填
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn filled_draft_passes_validation() {
        assert!(filled_draft().validate().is_empty());
    }

    #[test]
    fn payload_parses_coordinates_and_drops_blank_crew_rows() {
        let payload = filled_draft().to_payload();
        assert_eq!(payload.launch_latitude, 28.573255);
        assert_eq!(payload.launch_longitude, -80.646895);
        // 空白与非法输入按 0 处理
        assert_eq!(payload.landing_latitude, 0.0);
        assert_eq!(payload.landing_longitude, 0.0);
        assert_eq!(payload.crew_members, vec!["Армстронг", "Олдрин"]);
    }

    #[test]
    fn new_draft_always_keeps_one_crew_row() {
        assert_eq!(MissionDraft::new().crew_members.len(), 1);
    }

    #[test]
    fn draft_from_mission_fills_every_field() {
        let mission = kosmos_shared::Mission {
            id: 11,
            name: "Аполлон-11".to_string(),
            launch_date: "1969-07-16".to_string(),
            landing_date: "1969-07-24".to_string(),
            launch_site: "Мыс Канаверал".to_string(),
            launch_latitude: 28.5,
            launch_longitude: -80.6,
            landing_site: "Тихий океан".to_string(),
            landing_latitude: 13.3,
            landing_longitude: -169.15,
            lunar_module: "Eagle".to_string(),
            command_module: "Columbia".to_string(),
            crew_members: vec![],
        };
        let draft = MissionDraft::from_mission(&mission);
        assert_eq!(draft.launch_latitude, "28.5");
        // 空机组补一行空输入
        assert_eq!(draft.crew_members, vec![String::new()]);
    }
}
