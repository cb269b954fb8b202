//! Dashboard navigation tables and active-link matching.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar renders one of two fixed menus depending on the signed-in
//! role and highlights the entry for the current path. Matching is by whole
//! path segments. Dashboard roots are matched exactly so they do not stay
//! highlighted while a child page is open.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::auth::Role;

/// Glyph shown next to a navigation label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Gauge,
    MapPin,
    Users,
    Chart,
    Bell,
    Settings,
    Bolt,
    Receipt,
    LifeBuoy,
    Home,
    Back,
}

impl NavIcon {
    /// Unicode symbol rendered beside the entry label.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Gauge => "\u{25D4}",
            Self::MapPin => "\u{2316}",
            Self::Users => "\u{263A}",
            Self::Chart => "\u{2197}",
            Self::Bell => "\u{2691}",
            Self::Settings => "\u{2699}",
            Self::Bolt => "\u{26A1}",
            Self::Receipt => "\u{2637}",
            Self::LifeBuoy => "\u{271A}",
            Self::Home => "\u{2302}",
            Self::Back => "\u{2190}",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
}

pub const ADMIN_NAV: &[NavEntry] = &[
    NavEntry { label: "Dashboard", href: "/admin/dashboard", icon: NavIcon::Gauge },
    NavEntry { label: "Sites", href: "/admin/sites", icon: NavIcon::MapPin },
    NavEntry { label: "Customers", href: "/admin/customers", icon: NavIcon::Users },
    NavEntry { label: "Analytics", href: "/admin/analytics", icon: NavIcon::Chart },
    NavEntry { label: "Alerts", href: "/admin/alerts", icon: NavIcon::Bell },
    NavEntry { label: "Settings", href: "/admin/settings", icon: NavIcon::Settings },
];

pub const CUSTOMER_NAV: &[NavEntry] = &[
    NavEntry { label: "Overview", href: "/customer", icon: NavIcon::Home },
    NavEntry { label: "Energy", href: "/customer/energy", icon: NavIcon::Bolt },
    NavEntry { label: "Sites", href: "/customer/sites", icon: NavIcon::MapPin },
    NavEntry { label: "Billing", href: "/customer/billing", icon: NavIcon::Receipt },
    NavEntry { label: "Support", href: "/customer/support", icon: NavIcon::LifeBuoy },
    NavEntry { label: "Settings", href: "/customer/settings", icon: NavIcon::Settings },
];

/// Footer link shown under both menus.
pub const SITE_HOME: NavEntry = NavEntry { label: "Back to site", href: "/", icon: NavIcon::Back };

/// Menu for `role`; empty when nobody is signed in.
pub fn entries_for(role: Option<Role>) -> &'static [NavEntry] {
    match role {
        Some(Role::Admin) => ADMIN_NAV,
        Some(Role::Customer) => CUSTOMER_NAV,
        None => &[],
    }
}

/// Whether the entry at `href` is the current page when viewing `path`.
///
/// Rules are tried in order and the first applicable one decides:
/// the site root matches only itself; the role's dashboard root matches
/// itself with or without a trailing slash; any other entry matches itself
/// and every path below it.
pub fn is_active(path: &str, href: &str, role: Option<Role>) -> bool {
    if href == "/" {
        return path == "/";
    }
    let rest = path.strip_prefix(href);
    if role.is_some_and(|r| r.dashboard_root() == href) {
        return rest.is_some_and(|r| r.is_empty() || r == "/");
    }
    rest.is_some_and(|r| r.is_empty() || r.starts_with('/'))
}

/// One rendered menu row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub entry: &'static NavEntry,
    pub active: bool,
}

/// Menu for `role` with the entry matching `path` flagged.
pub fn compose(role: Option<Role>, path: &str) -> Vec<NavItem> {
    entries_for(role)
        .iter()
        .map(|entry| NavItem { entry, active: is_active(path, entry.href, role) })
        .collect()
}
