use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route, store::user::UserState};

#[cfg(feature = "web")]
use crate::client::api::auth::logout;

#[component]
pub fn Header() -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context::<Signal<UserState>>();
    #[allow(unused_variables)]
    let nav = navigator();

    let state = user_state.read().clone();
    let user_name = state.user.as_ref().map(|u| u.name.clone());

    let on_logout = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            if let Err(err) = logout().await {
                dioxus_logger::tracing::error!("Failed to log out: {}", err);
            }
            user_state.write().user = None;
            nav.push(Route::Login {});
        });
    };

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center gap-6",
            Link {
                to: Route::Dashboard {},
                p {
                    class: "md:text-xl font-semibold",
                    {SITE_NAME}
                }
            }
            if state.fetched && state.user.is_some() {
                nav {
                    class: "hidden md:flex items-center gap-1",
                    Link { to: Route::Properties {}, class: "btn btn-ghost btn-sm", "Properties" }
                    Link { to: Route::Contracts {}, class: "btn btn-ghost btn-sm", "Contracts" }
                    Link { to: Route::Issues {}, class: "btn btn-ghost btn-sm", "Issues" }
                    Link { to: Route::Offers {}, class: "btn btn-ghost btn-sm", "Offers" }
                    if state.is_staff() {
                        Link { to: Route::Owners {}, class: "btn btn-ghost btn-sm", "Owners" }
                        Link { to: Route::Tenants {}, class: "btn btn-ghost btn-sm", "Tenants" }
                        Link { to: Route::Providers {}, class: "btn btn-ghost btn-sm", "Providers" }
                    }
                    Link { to: Route::Reports {}, class: "btn btn-ghost btn-sm", "Reports" }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if state.fetched {
                if let Some(name) = user_name {
                    if state.is_admin() {
                        Link {
                            to: Route::Users {},
                            class: "btn btn-outline",
                            "Admin"
                        }
                    }
                    Link {
                        to: Route::Account {},
                        class: "btn btn-ghost",
                        "{name}"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: on_logout,
                        "Logout"
                    }
                } else {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-outline",
                        "Login"
                    }
                }
            }
        }
    })
}
