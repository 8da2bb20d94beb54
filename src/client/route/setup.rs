use dioxus::prelude::*;

use crate::client::{
    component::{Page, TextField},
    constant::SITE_NAME,
    router::Route,
    store::user::UserState,
};

#[cfg(feature = "web")]
use crate::{client::api::auth::setup, model::auth::SetupDto};

/// First-admin bootstrap, reached through the link printed at startup.
#[component]
pub fn Setup(code: String) -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    let company_name = use_signal(String::new);
    let admin_name = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    use_effect(move || {
        if user_state.read().user.is_some() {
            nav.push(Route::Dashboard {});
        }
    });

    #[allow(unused_variables)]
    let setup_code = code.clone();
    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let payload = SetupDto {
                code: setup_code.clone(),
                company_name: company_name().trim().to_string(),
                admin_name: admin_name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
            };
            spawn(async move {
                is_submitting.set(true);
                match setup(payload).await {
                    Ok(user) => user_state.write().user = Some(user),
                    Err(err) => error_message.set(Some(err.message)),
                }
                is_submitting.set(false);
            });
        }
    };

    rsx! {
        Title { "Setup | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 items-center justify-center w-full h-full",
            p { class: "text-2xl", "Set up {SITE_NAME}" }
            if code.is_empty() {
                div {
                    class: "alert alert-warning max-w-sm",
                    span { "Open the setup link printed in the server log to create the first admin." }
                }
            } else {
                form {
                    class: "card bg-base-200 w-full max-w-sm",
                    onsubmit: on_submit,
                    div {
                        class: "card-body flex flex-col gap-4",
                        TextField { label: "Company name", value: company_name, required: true }
                        TextField { label: "Your name", value: admin_name, required: true }
                        TextField { label: "Email", value: email, r#type: "email", required: true }
                        TextField { label: "Password (8+ characters)", value: password, r#type: "password", required: true }
                        if let Some(err) = error_message() {
                            div { class: "alert alert-error", span { "{err}" } }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: is_submitting(),
                            "Create company"
                        }
                    }
                }
            }
        }
    }
}
