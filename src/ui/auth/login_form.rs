//! Login form component
//!
//! Inline username/password form shown in the header for anonymous visitors.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_session_context;

/// Login form component
#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session_context();

    // Form state
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    // Handle form submission. Blank fields are sent as-is; the server decides.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if pending.get_untracked() {
            return;
        }

        let session = session.clone();
        let username_val = username.get_untracked();
        let password_val = password.get_untracked();

        pending.set(true);
        error.set(None);

        spawn_local(async move {
            // On success the header swaps this form out, so the signals may
            // already be disposed here.
            if let Err(e) = session.login(&username_val, &password_val).await {
                let _ = error.try_set(Some(e.to_string()));
            }
            let _ = pending.try_set(false);
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <input
                type="text"
                name="username"
                autocomplete="username"
                placeholder="Логин"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                type="password"
                name="password"
                autocomplete="current-password"
                placeholder="Пароль"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Вход..." } else { "Войти" }}
            </button>

            {move || {
                error.get().map(|message| {
                    view! { <p class="form-error">{message}</p> }
                })
            }}
        </form>
    }
}
