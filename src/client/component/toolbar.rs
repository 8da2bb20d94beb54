use dioxus::prelude::*;

/// Title row of a list page with a search box, an optional export link and an add button.
#[component]
pub fn ListToolbar(
    title: String,
    search: Signal<String>,
    page: Signal<u64>,
    export_href: Option<String>,
    add_label: Option<String>,
    on_add: Option<EventHandler<()>>,
) -> Element {
    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between sm:items-center gap-4 mb-4",
            h1 { class: "text-lg sm:text-2xl", "{title}" }
            div {
                class: "flex flex-wrap items-center gap-2",
                input {
                    r#type: "search",
                    class: "input input-bordered input-sm w-56",
                    placeholder: "Search...",
                    value: "{search()}",
                    oninput: move |evt| {
                        search.set(evt.value());
                        page.set(0);
                    },
                }
                if let Some(href) = export_href {
                    a {
                        href,
                        class: "btn btn-outline btn-sm",
                        "Export"
                    }
                }
                if let (Some(label), Some(on_add)) = (add_label, on_add) {
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| on_add.call(()),
                        "{label}"
                    }
                }
            }
        }
    )
}
