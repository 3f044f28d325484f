//! Dashboard page — the fixed destination of a successful sign-in.

use leptos::prelude::*;

use crate::components::layout::Layout;

/// Authenticated landing screen.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Layout title="Dashboard">
            <div class="dashboard">
                <h1 class="dashboard__heading">"Signed in"</h1>
                <p class="dashboard__copy">"Your session with Gatehouse is active."</p>
                <a class="dashboard__back" href="/">
                    "Back to sign-in"
                </a>
            </div>
        </Layout>
    }
}
