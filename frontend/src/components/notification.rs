use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::form_state::{Notification, NotificationKind};

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notification: Notification,
    pub on_dismiss: Callback<()>,
}

/// Bottom-corner toast. Parents key it per notification so every new one
/// gets a fresh dismiss timer.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_timeout(move || on_dismiss.emit(()), config::TOAST_DISMISS_MS);
    }

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let variant = match props.notification.kind {
        NotificationKind::Success => "toast-success",
        NotificationKind::Error => "toast-destructive",
    };

    html! {
        <div class={classes!("toast", variant)} role="status" aria-live="polite" data-testid="toast">
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 100;
                        max-width: 380px;
                        padding: 1rem 2.5rem 1rem 1.25rem;
                        border-radius: 12px;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.2);
                        animation: toastIn 0.4s ease-out forwards;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .toast-success {
                        background: #ffffff;
                        border-left: 4px solid #16a34a;
                        color: #1f2937;
                    }
                    .toast-destructive {
                        background: #dc2626;
                        color: #ffffff;
                    }
                    .toast-title {
                        font-weight: 700;
                        margin-bottom: 0.25rem;
                    }
                    .toast-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 1rem;
                        cursor: pointer;
                        opacity: 0.7;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(40px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            <div class="toast-title">{ &props.notification.title }</div>
            <div class="toast-description">{ &props.notification.description }</div>
            <button class="toast-close" onclick={dismiss} aria-label="Dismiss">{ "✕" }</button>
        </div>
    }
}
