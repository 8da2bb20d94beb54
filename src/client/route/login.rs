use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, Page, TextField},
    constant::SITE_NAME,
    router::Route,
    store::user::UserState,
};

#[cfg(feature = "web")]
use crate::{client::api::auth::login, model::auth::LoginDto};

#[component]
pub fn Login() -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    let email = use_signal(String::new);
    let password = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    // Redirect users who already have a session
    use_effect(move || {
        if user_state.read().user.is_some() {
            nav.push(Route::Dashboard {});
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let payload = LoginDto {
                email: email().trim().to_string(),
                password: password(),
            };
            spawn(async move {
                is_submitting.set(true);
                match login(payload).await {
                    Ok(user) => {
                        error_message.set(None);
                        user_state.write().user = Some(user);
                    }
                    Err(err) => error_message.set(Some(err.message)),
                }
                is_submitting.set(false);
            });
        }
    };

    let state = user_state.read().clone();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if !state.fetched || state.user.is_some() {
            LoadingPage {}
        } else {
            Page {
                class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                p { class: "text-2xl", {SITE_NAME} }
                form {
                    class: "card bg-base-200 w-full max-w-sm",
                    onsubmit: on_submit,
                    div {
                        class: "card-body flex flex-col gap-4",
                        TextField { label: "Email", value: email, r#type: "email", required: true }
                        TextField { label: "Password", value: password, r#type: "password", required: true }
                        if let Some(err) = error_message() {
                            div { class: "alert alert-error", span { "{err}" } }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: is_submitting(),
                            if is_submitting() {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                                "Logging in..."
                            } else {
                                "Login"
                            }
                        }
                    }
                }
            }
        }
    }
}
