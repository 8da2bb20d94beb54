use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            Attachments, ConfirmationModal, ListToolbar, Modal, Page, Pagination, PaginationData,
            TextAreaField, TextField,
        },
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::{api::PaginatedDto, file::FileEntityType, provider::ProviderDto},
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::provider::{create_provider, delete_provider, get_providers, update_provider},
        component::optional,
    },
    model::provider::ProviderFormDto,
};

#[component]
pub fn Providers() -> Element {
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);
    let search = use_signal(String::new);
    let refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut data = use_signal(|| None::<PaginatedDto<ProviderDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<ProviderDto>);

    // Re-runs whenever page, per_page, search or refetch_trigger change
    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_providers(page(), per_page(), search()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => {
                    data.set(Some(list.clone()));
                    error.set(None);
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to fetch providers: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Providers | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                ListToolbar {
                    title: "Providers",
                    search,
                    page,
                    export_href: "/api/export/providers".to_string(),
                    add_label: "Add Provider".to_string(),
                    on_add: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                }
                if let Some(err) = error() {
                    div { class: "alert alert-error mb-4", span { "{err.message}" } }
                }
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body",
                        if let Some(list) = data() {
                            ProvidersTable {
                                providers: list.items.clone(),
                                refetch_trigger,
                                on_edit: move |provider: ProviderDto| {
                                    editing.set(Some(provider));
                                    show_form.set(true);
                                },
                            }
                            Pagination { page, per_page, data: PaginationData::from(&list) }
                        } else {
                            span { class: "loading loading-spinner" }
                        }
                    }
                }
            }
        }
        if show_form() {
            ProviderFormModal { show: show_form, provider: editing(), refetch_trigger }
        }
    }
}

#[component]
fn ProvidersTable(
    providers: Vec<ProviderDto>,
    mut refetch_trigger: Signal<u32>,
    on_edit: EventHandler<ProviderDto>,
) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut provider_to_delete = use_signal(|| None::<(i32, String)>);
    #[allow(unused_mut)]
    let mut is_deleting = use_signal(|| false);
    #[allow(unused_mut)]
    let mut delete_error = use_signal(|| None::<String>);

    let on_confirm_delete = move |_| {
        #[cfg(feature = "web")]
        if let Some((id, _)) = provider_to_delete() {
            spawn(async move {
                is_deleting.set(true);
                match delete_provider(id).await {
                    Ok(()) => {
                        refetch_trigger.set(refetch_trigger() + 1);
                        show_delete_modal.set(false);
                        delete_error.set(None);
                    }
                    Err(err) => {
                        dioxus_logger::tracing::error!("Failed to delete provider: {}", err);
                        delete_error.set(Some(err.message));
                    }
                }
                is_deleting.set(false);
            });
        }
    };

    rsx! {
        if providers.is_empty() {
            div { class: "text-center py-8 opacity-50", "No providers found" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Phone" }
                            th { "Service" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for provider in providers {
                            {
                                let provider_id = provider.id;
                                let provider_name = provider.name.clone();
                                let edit_provider = provider.clone();
                                rsx! {
                                    tr {
                                        key: "{provider.id}",
                                        td { "{provider.name}" }
                                        td { {provider.email.clone().unwrap_or_default()} }
                                        td { {provider.phone.clone().unwrap_or_default()} }
                                        td { {provider.service_type.clone().unwrap_or_default()} }
                                        td {
                                            div {
                                                class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-sm btn-primary",
                                                    onclick: move |_| on_edit.call(edit_provider.clone()),
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn btn-sm btn-error",
                                                    onclick: move |_| {
                                                        provider_to_delete.set(Some((provider_id, provider_name.clone())));
                                                        delete_error.set(None);
                                                        show_delete_modal.set(true);
                                                    },
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Provider".to_string(),
            message: rsx!(
                if let Some((_, name)) = provider_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete "
                        span { class: "font-bold", "\"{name}\"" }
                        "? Issues and offers keep their history without the provider."
                    }
                }
                if let Some(err) = delete_error() {
                    div { class: "alert alert-error", span { "{err}" } }
                }
            ),
            confirm_text: "Delete".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: is_deleting(),
            processing_text: "Deleting...".to_string(),
            on_confirm: on_confirm_delete,
        }
    }
}

#[component]
fn ProviderFormModal(
    show: Signal<bool>,
    provider: Option<ProviderDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let initial = provider.clone();
    let name = use_signal(|| initial.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let email = use_signal(|| initial.as_ref().and_then(|p| p.email.clone()).unwrap_or_default());
    let phone = use_signal(|| initial.as_ref().and_then(|p| p.phone.clone()).unwrap_or_default());
    let service_type =
        use_signal(|| initial.as_ref().and_then(|p| p.service_type.clone()).unwrap_or_default());
    let notes = use_signal(|| initial.as_ref().and_then(|p| p.notes.clone()).unwrap_or_default());
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    let provider_id = provider.as_ref().map(|p| p.id);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let payload = ProviderFormDto {
                name: name().trim().to_string(),
                email: optional(email()),
                phone: optional(phone()),
                service_type: optional(service_type()),
                notes: optional(notes()),
            };
            spawn(async move {
                is_submitting.set(true);
                let result = match provider_id {
                    Some(id) => update_provider(id, payload).await.map(|_| ()),
                    None => create_provider(payload).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        refetch_trigger.set(refetch_trigger() + 1);
                        show.set(false);
                    }
                    Err(err) => error_message.set(Some(err.message)),
                }
                is_submitting.set(false);
            });
        }
    };

    let title = if provider_id.is_some() { "Edit Provider" } else { "Add Provider" };

    rsx! {
        Modal {
            show,
            title: title.to_string(),
            prevent_close: is_submitting(),
            class: "max-w-2xl",
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                TextField { label: "Name", value: name, required: true }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                    TextField { label: "Email", value: email, r#type: "email" }
                    TextField { label: "Phone", value: phone }
                }
                TextField { label: "Service type", value: service_type, placeholder: "Plumbing, electrical...".to_string() }
                TextAreaField { label: "Notes", value: notes }
                if let Some(err) = error_message() {
                    div { class: "alert alert-error", span { "{err}" } }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: is_submitting(),
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting(),
                        if is_submitting() { "Saving..." } else { "Save" }
                    }
                }
            }
            if let Some(id) = provider_id {
                Attachments { entity_type: FileEntityType::Provider, entity_id: id }
            }
        }
    }
}
