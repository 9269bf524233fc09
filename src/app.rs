//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::authenticated_layout::AuthenticatedLayout;
use crate::components::customer_auth_gate::CustomerAuthGate;
use crate::config::GateConfig;
use crate::pages::landing::{CustomerHomePage, SectionLanding};
use crate::pages::login::{CustomerLoginPage, StaffLoginPage};
use crate::state::{auth::AuthState, customer_auth::CustomerAuthState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth state signals the session providers write into, the
/// gate configuration, and the route tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let customer_auth = RwSignal::new(CustomerAuthState::default());

    provide_context(auth);
    provide_context(customer_auth);
    provide_context(GateConfig::load());

    view! {
        <Stylesheet id="leptos" href="/pkg/venue-console.css"/>
        <Title text="Venue Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=StaffLoginPage/>
                <Route path=(StaticSegment("customer"), StaticSegment("login")) view=CustomerLoginPage/>
                <ParentRoute
                    path=StaticSegment("customer")
                    view=|| view! { <CustomerAuthGate><Outlet/></CustomerAuthGate> }
                >
                    <Route path=StaticSegment("") view=CustomerHomePage/>
                </ParentRoute>
                <ParentRoute
                    path=StaticSegment("")
                    view=|| view! { <AuthenticatedLayout><Outlet/></AuthenticatedLayout> }
                >
                    <Route path=StaticSegment("") view=|| view! { <SectionLanding title="Dashboard"/> }/>
                    <Route path=StaticSegment("stations") view=|| view! { <SectionLanding title="Stations"/> }/>
                    <Route path=StaticSegment("customers") view=|| view! { <SectionLanding title="Customers"/> }/>
                    <Route path=StaticSegment("expenses") view=|| view! { <SectionLanding title="Expenses"/> }/>
                    <Route path=StaticSegment("loyalty") view=|| view! { <SectionLanding title="Loyalty"/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
