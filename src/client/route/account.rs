use dioxus::prelude::*;

use crate::client::{
    component::{Page, TextField},
    constant::SITE_NAME,
    store::user::UserState,
};

#[cfg(feature = "web")]
use crate::{client::api::auth::change_password, model::auth::ChangePasswordDto};

#[component]
pub fn Account() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let user = user_state.read().user.clone();

    #[allow(unused_mut)]
    let mut current_password = use_signal(String::new);
    #[allow(unused_mut)]
    let mut new_password = use_signal(String::new);
    #[allow(unused_mut)]
    let mut confirm_password = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut saved_message = use_signal(|| false);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            if new_password() != confirm_password() {
                error_message.set(Some("The new passwords do not match".to_string()));
                return;
            }
            let payload = ChangePasswordDto {
                current_password: current_password(),
                new_password: new_password(),
            };
            spawn(async move {
                is_submitting.set(true);
                saved_message.set(false);
                match change_password(payload).await {
                    Ok(()) => {
                        error_message.set(None);
                        saved_message.set(true);
                        current_password.set(String::new());
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                    }
                    Err(err) => error_message.set(Some(err.message)),
                }
                is_submitting.set(false);
            });
        }
    };

    rsx! {
        Title { "Account | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-lg flex flex-col gap-6",
                h1 { class: "text-lg sm:text-2xl", "Account" }
                if let Some(user) = user {
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body",
                            p { span { class: "font-bold", "Name: " } "{user.name}" }
                            p { span { class: "font-bold", "Email: " } "{user.email}" }
                            p { span { class: "font-bold", "Role: " } {user.role.label()} }
                        }
                    }
                }
                div {
                    class: "card bg-base-200",
                    form {
                        class: "card-body flex flex-col gap-3",
                        onsubmit: on_submit,
                        h2 { class: "card-title", "Change password" }
                        TextField { label: "Current password", value: current_password, r#type: "password", required: true }
                        TextField { label: "New password (8+ characters)", value: new_password, r#type: "password", required: true }
                        TextField { label: "Repeat new password", value: confirm_password, r#type: "password", required: true }
                        if let Some(err) = error_message() {
                            div { class: "alert alert-error", span { "{err}" } }
                        }
                        if saved_message() {
                            div { class: "alert alert-success", span { "Password changed" } }
                        }
                        div {
                            class: "flex justify-end",
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: is_submitting(),
                                if is_submitting() { "Saving..." } else { "Change password" }
                            }
                        }
                    }
                }
            }
        }
    }
}
