//! Collapsible side navigation with its mobile overlay.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::SidebarState;
use crate::util::routes::NAV_ENTRIES;

/// Navigation links plus a Logout button. On narrow screens the panel slides
/// in over a dimmed overlay; clicking the overlay, the close button or any
/// link closes it.
#[component]
pub fn DashboardSidebar(sidebar: RwSignal<SidebarState>, on_logout: Callback<()>) -> impl IntoView {
    let location = use_location();
    let close = move || {
        sidebar.maybe_update(SidebarState::close);
    };

    let links = NAV_ENTRIES
        .iter()
        .map(|entry| {
            let active = move || location.pathname.with(|path| entry.is_active(path));
            view! {
                <a
                    href=entry.route.path()
                    class="sidebar__link"
                    class:sidebar__link--active=active
                    on:click=move |_| close()
                >
                    <span class="sidebar__icon" aria-hidden="true">{entry.icon}</span>
                    <span class="sidebar__title">{entry.title}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <Show when=move || sidebar.get().is_open()>
            <div class="sidebar-overlay" on:click=move |_| close()></div>
        </Show>
        <aside class="sidebar glass-card" class:sidebar--open=move || sidebar.get().is_open()>
            <button class="sidebar__close" aria-label="Close menu" on:click=move |_| close()>
                "✕"
            </button>
            <nav class="sidebar__nav">
                {links}
                <button
                    class="sidebar__link sidebar__logout"
                    on:click=move |_| {
                        on_logout.run(());
                        close();
                    }
                >
                    <span class="sidebar__icon" aria-hidden="true">"⎋"</span>
                    <span class="sidebar__title">"Logout"</span>
                </button>
            </nav>
        </aside>
    }
}
