//! User menu component
//!
//! Header area showing who is signed in, with logout and, for players who
//! still owe one, the second-factor code entry. Anonymous visitors get the
//! login form instead.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_session_context;
use super::login_form::LoginForm;
use crate::core::SessionInfo;

/// User menu component
#[component]
pub fn UserMenu() -> impl IntoView {
    let session = use_session_context();
    let info = ReadSignal::from(session.info());
    let leaving = RwSignal::new(false);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let session = session.clone();
        leaving.set(true);
        spawn_local(async move {
            session.logout().await;
            let _ = leaving.try_set(false);
        });
    };

    view! {
        <div class="user-menu">
            <Show
                when=move || info.with(|i| i.is_authenticated)
                fallback=|| view! { <LoginForm/> }
            >
                <span class="user-name">
                    {move || info.with(|i| i.username().unwrap_or_default().to_string())}
                </span>
                <Show when=move || info.with(SessionInfo::is_staff)>
                    <span class="badge">"Администратор"</span>
                </Show>
                <Show when=move || info.with(SessionInfo::needs_second_factor)>
                    <SecondFactorForm/>
                </Show>
                <button
                    class="logout"
                    on:click=on_logout.clone()
                    disabled=move || leaving.get()
                >
                    "Выйти"
                </button>
            </Show>
        </div>
    }
}

/// One-time code entry for the second login factor
#[component]
fn SecondFactorForm() -> impl IntoView {
    let session = use_session_context();
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let session = session.clone();
        let code_val = code.get_untracked();
        error.set(None);

        spawn_local(async move {
            if let Err(e) = session.confirm_second_factor(&code_val).await {
                let _ = error.try_set(Some(e.to_string()));
            }
        });
    };

    view! {
        <form class="second-factor" on:submit=on_submit>
            <input
                type="text"
                inputmode="numeric"
                autocomplete="one-time-code"
                placeholder="Код подтверждения"
                prop:value=move || code.get()
                on:input=move |ev| code.set(event_target_value(&ev))
            />
            <button type="submit">"Подтвердить"</button>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
        </form>
    }
}
