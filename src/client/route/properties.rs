use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            cents_input, id_options, Attachments, ConfirmationModal, ListToolbar, Modal,
            NumberField, Page, Pagination, PaginationData, SelectField, TextAreaField, TextField,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        route::options::{option_name, use_owner_options, Options},
        store::user::UserState,
    },
    model::{
        api::{format_cents, PaginatedDto},
        file::FileEntityType,
        property::PropertyDto,
    },
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::property::{create_property, delete_property, get_properties, update_property},
        component::{optional, selected_id},
    },
    model::{api::parse_cents, property::PropertyFormDto},
};

const PROPERTY_TYPES: [&str; 5] = ["apartment", "house", "commercial", "parking", "other"];

#[component]
pub fn Properties() -> Element {
    let is_staff = use_context::<Signal<UserState>>().read().is_staff();

    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);
    let search = use_signal(String::new);
    #[allow(unused_variables)]
    let owner_filter = use_signal(String::new);
    let refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut data = use_signal(|| None::<PaginatedDto<PropertyDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<PropertyDto>);

    let owners = use_owner_options(is_staff);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_properties(page(), per_page(), search(), selected_id(&owner_filter())).await
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
                    dioxus_logger::tracing::error!("Failed to fetch properties: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Properties | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                if is_staff {
                    ListToolbar {
                        title: "Properties",
                        search,
                        page,
                        export_href: "/api/export/properties".to_string(),
                        add_label: "Add Property".to_string(),
                        on_add: move |_| {
                            editing.set(None);
                            show_form.set(true);
                        },
                    }
                    div {
                        class: "w-64 mb-4",
                        SelectField {
                            label: "Owner",
                            value: owner_filter,
                            options: id_options("All owners", &owners()),
                        }
                    }
                } else {
                    ListToolbar { title: "Properties", search, page }
                }
                if let Some(err) = error() {
                    div { class: "alert alert-error mb-4", span { "{err.message}" } }
                }
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body",
                        if let Some(list) = data() {
                            PropertiesTable {
                                properties: list.items.clone(),
                                owners,
                                is_staff,
                                refetch_trigger,
                                on_edit: move |property: PropertyDto| {
                                    editing.set(Some(property));
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
            PropertyFormModal { show: show_form, property: editing(), owners, refetch_trigger }
        }
    }
}

#[component]
fn PropertiesTable(
    properties: Vec<PropertyDto>,
    owners: Options,
    is_staff: bool,
    mut refetch_trigger: Signal<u32>,
    on_edit: EventHandler<PropertyDto>,
) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut property_to_delete = use_signal(|| None::<(i32, String)>);
    #[allow(unused_mut)]
    let mut is_deleting = use_signal(|| false);
    #[allow(unused_mut)]
    let mut delete_error = use_signal(|| None::<String>);

    let on_confirm_delete = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            let Some((id, _)) = property_to_delete() else {
                return;
            };
            is_deleting.set(true);
            match delete_property(id).await {
                Ok(()) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_delete_modal.set(false);
                    delete_error.set(None);
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to delete property: {}", err);
                    delete_error.set(Some(err.message));
                }
            }
            is_deleting.set(false);
        });
    };

    rsx! {
        if properties.is_empty() {
            div { class: "text-center py-8 opacity-50", "No properties found" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Address" }
                            th { "Type" }
                            if is_staff {
                                th { "Owner" }
                            }
                            th { class: "text-right", "Rent" }
                            if is_staff {
                                th { class: "text-right", "Actions" }
                            }
                        }
                    }
                    tbody {
                        for property in properties {
                            {
                                let property_id = property.id;
                                let property_name = property.name.clone();
                                let edit_property = property.clone();
                                let owner_name = option_name(&owners(), property.owner_id);
                                let postal_code = property.postal_code.clone().unwrap_or_default();
                                rsx! {
                                    tr {
                                        key: "{property.id}",
                                        td { "{property.name}" }
                                        td { "{property.address}, {postal_code} {property.city}" }
                                        td { "{property.property_type}" }
                                        if is_staff {
                                            td { "{owner_name}" }
                                        }
                                        td { class: "text-right", {format_cents(property.monthly_rent_cents)} }
                                        if is_staff {
                                            td {
                                                div {
                                                    class: "flex gap-2 justify-end",
                                                    button {
                                                        class: "btn btn-sm btn-primary",
                                                        onclick: move |_| on_edit.call(edit_property.clone()),
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-sm btn-error",
                                                        onclick: move |_| {
                                                            property_to_delete.set(Some((property_id, property_name.clone())));
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
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Property".to_string(),
            message: rsx!(
                if let Some((_, name)) = property_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete "
                        span { class: "font-bold", "\"{name}\"" }
                        "? Properties with contracts cannot be deleted."
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
fn PropertyFormModal(
    show: Signal<bool>,
    property: Option<PropertyDto>,
    owners: Options,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let initial = property.clone();
    let owner_id = use_signal(|| {
        initial
            .as_ref()
            .map(|p| p.owner_id.to_string())
            .unwrap_or_default()
    });
    let name = use_signal(|| initial.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let address = use_signal(|| initial.as_ref().map(|p| p.address.clone()).unwrap_or_default());
    let city = use_signal(|| initial.as_ref().map(|p| p.city.clone()).unwrap_or_default());
    let postal_code = use_signal(|| {
        initial
            .as_ref()
            .and_then(|p| p.postal_code.clone())
            .unwrap_or_default()
    });
    let property_type = use_signal(|| {
        initial
            .as_ref()
            .map(|p| p.property_type.clone())
            .unwrap_or_else(|| PROPERTY_TYPES[0].to_string())
    });
    let rent = use_signal(|| {
        initial
            .as_ref()
            .map(|p| cents_input(p.monthly_rent_cents))
            .unwrap_or_default()
    });
    let notes = use_signal(|| initial.as_ref().and_then(|p| p.notes.clone()).unwrap_or_default());
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    let property_id = property.as_ref().map(|p| p.id);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let Some(owner) = selected_id(&owner_id()) else {
                error_message.set(Some("Please select an owner".to_string()));
                return;
            };
            let Some(monthly_rent_cents) = parse_cents(&rent()) else {
                error_message.set(Some("Enter the monthly rent as an amount".to_string()));
                return;
            };
            let payload = PropertyFormDto {
                owner_id: owner,
                name: name().trim().to_string(),
                address: address().trim().to_string(),
                city: city().trim().to_string(),
                postal_code: optional(postal_code()),
                property_type: property_type(),
                monthly_rent_cents,
                notes: optional(notes()),
            };
            spawn(async move {
                is_submitting.set(true);
                let result = match property_id {
                    Some(id) => update_property(id, payload).await.map(|_| ()),
                    None => create_property(payload).await.map(|_| ()),
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

    let title = if property_id.is_some() { "Edit Property" } else { "Add Property" };
    let type_options = PROPERTY_TYPES
        .iter()
        .map(|t| (t.to_string(), t.to_string()))
        .collect::<Vec<_>>();

    rsx! {
        Modal {
            show,
            title: title.to_string(),
            prevent_close: is_submitting(),
            class: "max-w-2xl",
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                SelectField { label: "Owner", value: owner_id, options: id_options("Select an owner", &owners()) }
                TextField { label: "Name", value: name, required: true }
                TextField { label: "Address", value: address, required: true }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                    TextField { label: "Postal code", value: postal_code }
                    TextField { label: "City", value: city, required: true }
                }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                    SelectField { label: "Type", value: property_type, options: type_options }
                    NumberField { label: "Monthly rent", value: rent, step: "0.01", min: "0" }
                }
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
            if let Some(id) = property_id {
                Attachments { entity_type: FileEntityType::Property, entity_id: id }
            }
        }
    }
}
