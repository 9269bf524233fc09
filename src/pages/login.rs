//! Login landing pages for staff and customers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gates redirect here with the requested location in history state. The page
//! resolves the post-login return target from that state and hands it to the
//! sign-in form.

use leptos::prelude::*;

use crate::gate::location::post_login_target;

/// Reads the navigation state attached by the redirecting gate.
fn carried_history_state() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.history().ok()?.state().ok()?.as_string()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[component]
pub fn StaffLoginPage() -> impl IntoView {
    let return_to = post_login_target(carried_history_state().as_deref());
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Staff sign in"</h1>
                <p class="login-card__subtitle">"Sign in to manage stations, customers and billing."</p>
                <input type="hidden" name="return_to" value=return_to/>
            </div>
        </div>
    }
}

#[component]
pub fn CustomerLoginPage() -> impl IntoView {
    let return_to = post_login_target(carried_history_state().as_deref());
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Customer sign in"</h1>
                <p class="login-card__subtitle">"View your bookings and loyalty points."</p>
                <input type="hidden" name="return_to" value=return_to/>
            </div>
        </div>
    }
}
