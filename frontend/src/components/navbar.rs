//! 顶部导航栏：认证前后展示不同的链接集合，窄屏下折叠为菜单按钮。

use leptos::prelude::*;

use super::icons::Menu;
use crate::auth::{logout, use_auth};
use crate::web::router::Link;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let (menu_open, set_menu_open) = signal(false);

    let is_authenticated = move || auth.state.get().is_authenticated;
    let on_logout = move |_| logout(&auth);

    view! {
        <nav class="bg-blue-600 text-white p-4">
            <div class="container mx-auto flex justify-between items-center">
                <div class="text-xl font-bold">"Космос"</div>
                <div class="md:hidden">
                    <button on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                        <Menu />
                    </button>
                </div>
                <div class=move || if menu_open.get() { "block" } else { "hidden md:block" }>
                    <div class="flex flex-col md:flex-row gap-4 mt-4 md:mt-0">
                        <Show
                            when=is_authenticated
                            fallback=|| {
                                view! {
                                    <Link to="/login" class="hover:text-blue-200">"Вход"</Link>
                                    <Link to="/register" class="hover:text-blue-200">"Регистрация"</Link>
                                }
                            }
                        >
                            <Link to="/gagarin" class="hover:text-blue-200">"Гагарин"</Link>
                            <Link to="/moon-order" class="hover:text-blue-200">"Заказ на Луне"</Link>
                            <Link to="/missions" class="hover:text-blue-200">"Миссии"</Link>
                            <Link to="/flights" class="hover:text-blue-200">"Космические рейсы"</Link>
                            <Link to="/search" class="hover:text-blue-200">"Поиск"</Link>
                            <button on:click=on_logout class="text-left hover:text-blue-200">
                                "Выход"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </nav>
    }
}
