//! Dashboard frame: header, side navigation and the nested route outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Parent route for every `/dashboard/*` page. It is the single writer of the
//! sidebar-open flag; the header toggles it, the sidebar and its overlay close
//! it, Escape closes it, and any route change closes it. Escape dismisses the
//! logout dialog first when it is open.
//!
//! DESIGN
//! ======
//! The body scroll lock follows the flag through an effect and is released on
//! teardown. The logout dialog lives here so both entry points share one
//! instance.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::components::dashboard_header::DashboardHeader;
use crate::components::dashboard_sidebar::DashboardSidebar;
use crate::components::logout_modal::LogoutModal;
use crate::state::ui::SidebarState;
use crate::util::scroll_lock;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let sidebar = RwSignal::new(SidebarState::default());
    let logout_open = RwSignal::new(false);
    let on_logout = Callback::new(move |()| logout_open.set(true));

    Effect::new(move || scroll_lock::apply(sidebar.get().locks_body_scroll()));
    on_cleanup(|| scroll_lock::apply(false));

    let location = use_location();
    Effect::new(move |prev: Option<String>| {
        let path = location.pathname.get();
        if prev.is_some_and(|p| p != path) {
            sidebar.maybe_update(SidebarState::close);
        }
        path
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::state::ui::{EscapeTarget, escape_target};

        let handle = leptos::leptos_dom::helpers::window_event_listener(leptos::ev::keydown, move |ev| {
            match escape_target(&ev.key(), logout_open.get_untracked(), sidebar.get_untracked()) {
                Some(EscapeTarget::LogoutDialog) => logout_open.set(false),
                Some(EscapeTarget::Sidebar) => {
                    sidebar.maybe_update(SidebarState::close);
                }
                None => {}
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="dashboard">
            <DashboardHeader sidebar=sidebar on_logout=on_logout/>
            <div class="dashboard__body">
                <DashboardSidebar sidebar=sidebar on_logout=on_logout/>
                <main class="dashboard__content">
                    <Outlet/>
                </main>
            </div>
            <LogoutModal open=logout_open/>
        </div>
    }
}
