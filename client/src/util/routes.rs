//! Client route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` registers these paths with `leptos_router`; this module is the
//! single source for the path strings, the side-navigation entries and a pure
//! resolver used for active-link highlighting. No route requires a session.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Every screen the router can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `/`, which redirects to the login page.
    Root,
    Login,
    Signup,
    Overview,
    Features,
    Auditing,
    Verification,
    Realtime,
    Regulatory,
    Reports,
    Integrations,
    Settings,
    Support,
}

const DASHBOARD_CHILDREN: &[(&str, AppRoute)] = &[
    ("features", AppRoute::Features),
    ("auditing", AppRoute::Auditing),
    ("verification", AppRoute::Verification),
    ("realtime", AppRoute::Realtime),
    ("regulatory", AppRoute::Regulatory),
    ("reports", AppRoute::Reports),
    ("integrations", AppRoute::Integrations),
    ("settings", AppRoute::Settings),
    ("support", AppRoute::Support),
];

impl AppRoute {
    /// Canonical URL path.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Overview => "/dashboard",
            Self::Features => "/dashboard/features",
            Self::Auditing => "/dashboard/auditing",
            Self::Verification => "/dashboard/verification",
            Self::Realtime => "/dashboard/realtime",
            Self::Regulatory => "/dashboard/regulatory",
            Self::Reports => "/dashboard/reports",
            Self::Integrations => "/dashboard/integrations",
            Self::Settings => "/dashboard/settings",
            Self::Support => "/dashboard/support",
        }
    }

    /// Map a location (optionally with query/fragment) to its screen.
    /// Unmapped paths give `None`, independent of session state; the router
    /// renders the not-found page for them.
    #[must_use]
    pub fn resolve(location: &str) -> Option<Self> {
        let path = location.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Self::Root),
            "/login" => Some(Self::Login),
            "/signup" => Some(Self::Signup),
            "/dashboard" => Some(Self::Overview),
            _ => trimmed.strip_prefix("/dashboard/").and_then(|child| {
                DASHBOARD_CHILDREN
                    .iter()
                    .find(|(segment, _)| *segment == child)
                    .map(|(_, route)| *route)
            }),
        }
    }

    /// Whether the route renders inside the dashboard frame.
    #[must_use]
    pub fn in_dashboard(self) -> bool {
        self == Self::Overview || DASHBOARD_CHILDREN.iter().any(|(_, route)| *route == self)
    }
}

/// One side-navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub title: &'static str,
    pub route: AppRoute,
    pub icon: &'static str,
}

impl NavEntry {
    /// Active-link test. The overview entry only matches exactly; the others
    /// match their own path.
    #[must_use]
    pub fn is_active(&self, location: &str) -> bool {
        AppRoute::resolve(location) == Some(self.route)
    }
}

/// Side navigation, top to bottom.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { title: "Dashboard Overview", route: AppRoute::Overview, icon: "▦" },
    NavEntry { title: "Automated Data Auditing", route: AppRoute::Auditing, icon: "✔" },
    NavEntry { title: "AI-Powered Verification", route: AppRoute::Verification, icon: "⛨" },
    NavEntry { title: "Real-Time Compliance", route: AppRoute::Realtime, icon: "↗" },
    NavEntry { title: "Regulatory Alignment", route: AppRoute::Regulatory, icon: "◎" },
    NavEntry { title: "Exportable Reports", route: AppRoute::Reports, icon: "▤" },
    NavEntry { title: "Integrations", route: AppRoute::Integrations, icon: "⚡" },
    NavEntry { title: "Admin Settings", route: AppRoute::Settings, icon: "⚙" },
    NavEntry { title: "Support / Help", route: AppRoute::Support, icon: "?" },
];
