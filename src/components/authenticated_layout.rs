//! Staff layout: `AuthGate` plus the venue navigation shell.
//!
//! Navigation is client-side only; the API must still enforce access control.

#[cfg(test)]
#[path = "authenticated_layout_test.rs"]
mod authenticated_layout_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::auth_gate::AuthGate;
use crate::gate::provider::require_provider;
use crate::state::auth::AuthState;

/// One entry in the staff navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/", label: "Dashboard" },
    NavItem { href: "/stations", label: "Stations" },
    NavItem { href: "/customers", label: "Customers" },
    NavItem { href: "/expenses", label: "Expenses" },
    NavItem { href: "/loyalty", label: "Loyalty" },
];

/// Whether the nav entry `href` should be highlighted for `pathname`.
///
/// The root entry only matches exactly; others also match nested paths.
pub fn is_nav_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

fn nav_class(pathname: &str, href: &str) -> &'static str {
    if is_nav_active(pathname, href) { "app-nav__link app-nav__link--active" } else { "app-nav__link" }
}

/// Gated staff shell with navigation around `children`.
#[component]
pub fn AuthenticatedLayout(children: ChildrenFn) -> impl IntoView {
    let auth = require_provider::<RwSignal<AuthState>>("AuthState").unwrap_or_else(|err| panic!("{err}"));
    let pathname = use_location().pathname;
    let user_name = move || auth.get().user.map(|user| user.name).unwrap_or_default();

    view! {
        <AuthGate>
            <div class="app-shell">
                <header class="app-shell__header">
                    <nav class="app-nav">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let href = item.href;
                                view! {
                                    <A href={href} {..} class=move || nav_class(&pathname.get(), href)>
                                        {item.label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <span class="app-shell__user">{user_name}</span>
                </header>
                <main class="app-shell__main">{children()}</main>
            </div>
        </AuthGate>
    }
}
