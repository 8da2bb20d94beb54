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
    model::{api::PaginatedDto, file::FileEntityType, owner::OwnerDto},
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::owner::{create_owner, delete_owner, get_owners, update_owner},
        component::optional,
    },
    model::owner::OwnerFormDto,
};

#[component]
pub fn Owners() -> Element {
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);
    let search = use_signal(String::new);
    let refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut data = use_signal(|| None::<PaginatedDto<OwnerDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<OwnerDto>);

    // Re-runs whenever page, per_page, search or refetch_trigger change
    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_owners(page(), per_page(), search()).await
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
                    dioxus_logger::tracing::error!("Failed to fetch owners: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Owners | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                ListToolbar {
                    title: "Owners",
                    search,
                    page,
                    export_href: "/api/export/owners".to_string(),
                    add_label: "Add Owner".to_string(),
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
                            OwnersTable {
                                owners: list.items.clone(),
                                refetch_trigger,
                                on_edit: move |owner: OwnerDto| {
                                    editing.set(Some(owner));
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
            OwnerFormModal { show: show_form, owner: editing(), refetch_trigger }
        }
    }
}

#[component]
fn OwnersTable(
    owners: Vec<OwnerDto>,
    mut refetch_trigger: Signal<u32>,
    on_edit: EventHandler<OwnerDto>,
) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut owner_to_delete = use_signal(|| None::<(i32, String)>);
    #[allow(unused_mut)]
    let mut is_deleting = use_signal(|| false);
    #[allow(unused_mut)]
    let mut delete_error = use_signal(|| None::<String>);

    let on_confirm_delete = move |_| {
        #[cfg(feature = "web")]
        if let Some((id, _)) = owner_to_delete() {
            spawn(async move {
                is_deleting.set(true);
                match delete_owner(id).await {
                    Ok(()) => {
                        refetch_trigger.set(refetch_trigger() + 1);
                        show_delete_modal.set(false);
                        delete_error.set(None);
                    }
                    Err(err) => {
                        dioxus_logger::tracing::error!("Failed to delete owner: {}", err);
                        delete_error.set(Some(err.message));
                    }
                }
                is_deleting.set(false);
            });
        }
    };

    rsx! {
        if owners.is_empty() {
            div { class: "text-center py-8 opacity-50", "No owners found" }
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
                            th { "IBAN" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for owner in owners {
                            {
                                let owner_id = owner.id;
                                let owner_name = owner.name.clone();
                                let edit_owner = owner.clone();
                                rsx! {
                                    tr {
                                        key: "{owner.id}",
                                        td { "{owner.name}" }
                                        td { {owner.email.clone().unwrap_or_default()} }
                                        td { {owner.phone.clone().unwrap_or_default()} }
                                        td { {owner.iban.clone().unwrap_or_default()} }
                                        td {
                                            div {
                                                class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-sm btn-primary",
                                                    onclick: move |_| on_edit.call(edit_owner.clone()),
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn btn-sm btn-error",
                                                    onclick: move |_| {
                                                        owner_to_delete.set(Some((owner_id, owner_name.clone())));
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
            title: "Delete Owner".to_string(),
            message: rsx!(
                if let Some((_, name)) = owner_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete "
                        span { class: "font-bold", "\"{name}\"" }
                        "? Owners with properties cannot be deleted."
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
fn OwnerFormModal(
    show: Signal<bool>,
    owner: Option<OwnerDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let initial = owner.clone();
    let name = use_signal(|| initial.as_ref().map(|o| o.name.clone()).unwrap_or_default());
    let email = use_signal(|| initial.as_ref().and_then(|o| o.email.clone()).unwrap_or_default());
    let phone = use_signal(|| initial.as_ref().and_then(|o| o.phone.clone()).unwrap_or_default());
    let address =
        use_signal(|| initial.as_ref().and_then(|o| o.address.clone()).unwrap_or_default());
    let iban = use_signal(|| initial.as_ref().and_then(|o| o.iban.clone()).unwrap_or_default());
    let notes = use_signal(|| initial.as_ref().and_then(|o| o.notes.clone()).unwrap_or_default());
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    let owner_id = owner.as_ref().map(|o| o.id);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let payload = OwnerFormDto {
                name: name().trim().to_string(),
                email: optional(email()),
                phone: optional(phone()),
                address: optional(address()),
                iban: optional(iban()),
                notes: optional(notes()),
            };
            spawn(async move {
                is_submitting.set(true);
                let result = match owner_id {
                    Some(id) => update_owner(id, payload).await.map(|_| ()),
                    None => create_owner(payload).await.map(|_| ()),
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

    let title = if owner_id.is_some() { "Edit Owner" } else { "Add Owner" };

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
                TextField { label: "Address", value: address }
                TextField { label: "IBAN", value: iban }
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
            if let Some(id) = owner_id {
                Attachments { entity_type: FileEntityType::Owner, entity_id: id }
            }
        }
    }
}
