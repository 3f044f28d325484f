//! Filled alert bar for server-side rejections.

use leptos::prelude::*;

use crate::components::icons::IconExclamationCircle;

/// Error alert with a title row and the service's own message underneath.
#[component]
pub fn ErrorAlert(
    /// Heading shown next to the icon.
    title: &'static str,
    /// Body text, usually the service's message verbatim.
    #[prop(into)] message: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="alert alert--error" role="alert">
            <span class="alert__icon">
                <IconExclamationCircle/>
            </span>
            <div class="alert__body">
                <span class="alert__title">{title}</span>
                <span class="alert__message">{move || message.get()}</span>
            </div>
        </div>
    }
}
