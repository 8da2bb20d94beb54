use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route, store::user::UserState};

#[cfg(feature = "web")]
use crate::client::api::auth::get_user;

const TAILWIND_CDN: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";
const DAISYUI_CDN: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));

    // Fetch user on first load
    #[cfg(feature = "web")]
    {
        let future = use_resource(get_user);

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                let mut state = user_state.write();
                state.user = match result {
                    Ok(user) => user.clone(),
                    Err(err) => {
                        dioxus_logger::tracing::error!("Failed to fetch user: {}", err);
                        None
                    }
                };
                state.fetched = true;
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Property rental management for letting agencies"
        }
        document::Link { rel: "stylesheet", href: DAISYUI_CDN }
        document::Script { src: TAILWIND_CDN }
        Router::<Route> {}
    }
}
