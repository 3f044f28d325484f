//! Inline SVG icons for the auth screens.
//!
//! Stroke-based outlines that inherit `currentColor`, so CSS decides the
//! final color in both themes.

use leptos::prelude::*;

/// Shield-with-check badge shown above the auth card.
#[component]
pub fn IconShieldCheck() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="40"
            height="40"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M12 3l7 3v5c0 4.6-2.9 8.2-7 10-4.1-1.8-7-5.4-7-10V6z"/>
            <path d="M9 12l2 2 4-4"/>
        </svg>
    }
}

/// Exclamation-in-circle marker for the error alert.
#[component]
pub fn IconExclamationCircle() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="20"
            height="20"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <circle cx="12" cy="12" r="9"/>
            <line x1="12" y1="8" x2="12" y2="13"/>
            <line x1="12" y1="16" x2="12" y2="16.01"/>
        </svg>
    }
}

/// Database cylinder on the submit button.
#[component]
pub fn IconDatabase() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="20"
            height="20"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <ellipse cx="12" cy="6" rx="8" ry="3"/>
            <path d="M4 6v6c0 1.7 3.6 3 8 3s8-1.3 8-3V6"/>
            <path d="M4 12v6c0 1.7 3.6 3 8 3s8-1.3 8-3v-6"/>
        </svg>
    }
}
