//! Shared page shell: tab title, centered column, shield badge.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icons::IconShieldCheck;

/// Page wrapper used by every route-level screen.
#[component]
pub fn Layout(
    /// Browser tab title for this screen.
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <Title text=title/>
        <main class="layout">
            <div class="layout__badge">
                <IconShieldCheck/>
            </div>
            {children()}
        </main>
    }
}
