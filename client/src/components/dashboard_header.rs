//! Sticky top bar: menu toggle, logo, search, notifications, account menu.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::SidebarState;
use crate::util::routes::AppRoute;

const COMPANY_SITE: &str = "https://bereanstechnology.com/";

#[component]
pub fn DashboardHeader(sidebar: RwSignal<SidebarState>, on_logout: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu_open = RwSignal::new(false);
    let initials = move || auth.with(AuthState::initials);

    view! {
        <header class="header">
            <div class="header__left">
                <button
                    class="header__menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || sidebar.get().is_open().to_string()
                    on:click=move |_| sidebar.update(SidebarState::toggle)
                >
                    "☰"
                </button>
                <a href=COMPANY_SITE rel="external">
                    <img class="header__logo" src="/logo.svg" alt="Bereans Technology Logo"/>
                </a>
                <div class="header__search">
                    <span aria-hidden="true">"⌕"</span>
                    <input class="header__search-input" type="search" placeholder="Search..."/>
                </div>
            </div>
            <div class="header__right">
                <button class="header__bell" title="Notifications">
                    "🔔"
                    <span class="header__bell-dot"></span>
                </button>
                <div class="header__account">
                    <button
                        class="avatar"
                        aria-haspopup="menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {initials}
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="menu glass-card" role="menu">
                            <div class="menu__label">"My Account"</div>
                            <hr class="menu__separator"/>
                            <a
                                class="menu__item"
                                role="menuitem"
                                href=AppRoute::Settings.path()
                                on:click=move |_| menu_open.set(false)
                            >
                                "Settings"
                            </a>
                            <button
                                class="menu__item"
                                role="menuitem"
                                on:click=move |_| {
                                    menu_open.set(false);
                                    on_logout.run(());
                                }
                            >
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
