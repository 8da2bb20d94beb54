use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            cents_input, id_options, Attachments, ConfirmationModal, ListToolbar, Modal,
            NumberField, Page, Pagination, PaginationData, SelectField, TextAreaField, TextField,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        route::options::{option_name, use_property_options, use_tenant_options, Options},
        store::user::UserState,
    },
    model::{
        api::{format_cents, PaginatedDto},
        contract::{ContractDto, ContractStatus},
        file::FileEntityType,
    },
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::contract::{
            create_contract, delete_contract, get_contracts, terminate_contract, update_contract,
        },
        component::{optional, parse_date, selected_id},
    },
    model::{api::parse_cents, contract::ContractFormDto},
};

fn status_badge(status: ContractStatus) -> &'static str {
    match status {
        ContractStatus::Draft => "badge-ghost",
        ContractStatus::Active => "badge-success",
        ContractStatus::Terminated => "badge-warning",
        ContractStatus::Expired => "badge-neutral",
    }
}

fn status_options(none_label: Option<&str>) -> Vec<(String, String)> {
    none_label
        .map(|label| (String::new(), label.to_string()))
        .into_iter()
        .chain(
            ContractStatus::ALL
                .iter()
                .map(|s| (s.as_str().to_string(), s.as_str().to_string())),
        )
        .collect()
}

#[component]
pub fn Contracts() -> Element {
    let is_staff = use_context::<Signal<UserState>>().read().is_staff();

    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);
    let search = use_signal(String::new);
    let status_filter = use_signal(String::new);
    let refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut data = use_signal(|| None::<PaginatedDto<ContractDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<ContractDto>);

    let properties = use_property_options(true);
    let tenants = use_tenant_options(is_staff);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        let status = status_filter().parse::<ContractStatus>().ok();
        get_contracts(page(), per_page(), search(), status).await
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
                    dioxus_logger::tracing::error!("Failed to fetch contracts: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Contracts | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                if is_staff {
                    ListToolbar {
                        title: "Contracts",
                        search,
                        page,
                        export_href: "/api/export/contracts".to_string(),
                        add_label: "Add Contract".to_string(),
                        on_add: move |_| {
                            editing.set(None);
                            show_form.set(true);
                        },
                    }
                } else {
                    ListToolbar { title: "Contracts", search, page }
                }
                div {
                    class: "w-64 mb-4",
                    SelectField { label: "Status", value: status_filter, options: status_options(Some("All statuses")) }
                }
                if let Some(err) = error() {
                    div { class: "alert alert-error mb-4", span { "{err.message}" } }
                }
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body",
                        if let Some(list) = data() {
                            ContractsTable {
                                contracts: list.items.clone(),
                                properties,
                                tenants,
                                is_staff,
                                refetch_trigger,
                                on_edit: move |contract: ContractDto| {
                                    editing.set(Some(contract));
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
            ContractFormModal { show: show_form, contract: editing(), properties, tenants, refetch_trigger }
        }
    }
}

/// Row action waiting for confirmation.
#[derive(Clone, PartialEq)]
enum PendingAction {
    Terminate(i32),
    Delete(i32),
}

#[component]
fn ContractsTable(
    contracts: Vec<ContractDto>,
    properties: Options,
    tenants: Options,
    is_staff: bool,
    mut refetch_trigger: Signal<u32>,
    on_edit: EventHandler<ContractDto>,
) -> Element {
    let mut show_confirm = use_signal(|| false);
    let mut pending = use_signal(|| None::<PendingAction>);
    #[allow(unused_mut)]
    let mut is_processing = use_signal(|| false);
    #[allow(unused_mut)]
    let mut action_error = use_signal(|| None::<String>);

    let on_confirm = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            let Some(action) = pending() else {
                return;
            };
            is_processing.set(true);
            let result = match action {
                PendingAction::Terminate(id) => terminate_contract(id, None).await.map(|_| ()),
                PendingAction::Delete(id) => delete_contract(id).await,
            };
            match result {
                Ok(()) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_confirm.set(false);
                    action_error.set(None);
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Contract action failed: {}", err);
                    action_error.set(Some(err.message));
                }
            }
            is_processing.set(false);
        });
    };

    let (confirm_title, confirm_text, confirm_message) = match pending() {
        Some(PendingAction::Terminate(_)) => (
            "Terminate Contract",
            "Terminate",
            "The contract ends today and stops counting towards rent income.",
        ),
        _ => (
            "Delete Contract",
            "Delete",
            "The contract and its history are removed permanently.",
        ),
    };

    rsx! {
        if contracts.is_empty() {
            div { class: "text-center py-8 opacity-50", "No contracts found" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Property" }
                            if is_staff {
                                th { "Tenant" }
                            }
                            th { "Period" }
                            th { class: "text-right", "Rent" }
                            th { "Status" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for contract in contracts {
                            {
                                let contract_id = contract.id;
                                let edit_contract = contract.clone();
                                let property_name = option_name(&properties(), contract.property_id);
                                let tenant_name = option_name(&tenants(), contract.tenant_id);
                                let end = contract
                                    .end_date
                                    .map(|d| d.to_string())
                                    .unwrap_or_else(|| "open-ended".to_string());
                                let can_terminate = contract.status == ContractStatus::Active;
                                rsx! {
                                    tr {
                                        key: "{contract.id}",
                                        td { "{property_name}" }
                                        if is_staff {
                                            td { "{tenant_name}" }
                                        }
                                        td { "{contract.start_date} to {end}" }
                                        td { class: "text-right", {format_cents(contract.monthly_rent_cents)} }
                                        td {
                                            span {
                                                class: "badge {status_badge(contract.status)}",
                                                "{contract.status}"
                                            }
                                        }
                                        td {
                                            div {
                                                class: "flex gap-2 justify-end",
                                                if is_staff {
                                                    a {
                                                        class: "btn btn-sm btn-outline",
                                                        href: "/api/contracts/{contract_id}/pdf",
                                                        "PDF"
                                                    }
                                                    button {
                                                        class: "btn btn-sm btn-primary",
                                                        onclick: move |_| on_edit.call(edit_contract.clone()),
                                                        "Edit"
                                                    }
                                                    if can_terminate {
                                                        button {
                                                            class: "btn btn-sm btn-warning",
                                                            onclick: move |_| {
                                                                pending.set(Some(PendingAction::Terminate(contract_id)));
                                                                action_error.set(None);
                                                                show_confirm.set(true);
                                                            },
                                                            "Terminate"
                                                        }
                                                    }
                                                    button {
                                                        class: "btn btn-sm btn-error",
                                                        onclick: move |_| {
                                                            pending.set(Some(PendingAction::Delete(contract_id)));
                                                            action_error.set(None);
                                                            show_confirm.set(true);
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
            show: show_confirm,
            title: confirm_title.to_string(),
            message: rsx!(
                p { class: "py-4", "{confirm_message}" }
                if let Some(err) = action_error() {
                    div { class: "alert alert-error", span { "{err}" } }
                }
            ),
            confirm_text: confirm_text.to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: is_processing(),
            processing_text: "Working...".to_string(),
            on_confirm,
        }
    }
}

#[component]
fn ContractFormModal(
    show: Signal<bool>,
    contract: Option<ContractDto>,
    properties: Options,
    tenants: Options,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let initial = contract.clone();
    let property_id = use_signal(|| {
        initial
            .as_ref()
            .map(|c| c.property_id.to_string())
            .unwrap_or_default()
    });
    let tenant_id = use_signal(|| {
        initial
            .as_ref()
            .map(|c| c.tenant_id.to_string())
            .unwrap_or_default()
    });
    let start_date = use_signal(|| {
        initial
            .as_ref()
            .map(|c| c.start_date.to_string())
            .unwrap_or_default()
    });
    let end_date = use_signal(|| {
        initial
            .as_ref()
            .and_then(|c| c.end_date)
            .map(|d| d.to_string())
            .unwrap_or_default()
    });
    let rent = use_signal(|| {
        initial
            .as_ref()
            .map(|c| cents_input(c.monthly_rent_cents))
            .unwrap_or_default()
    });
    let deposit = use_signal(|| {
        initial
            .as_ref()
            .map(|c| cents_input(c.deposit_cents))
            .unwrap_or_else(|| "0".to_string())
    });
    let payment_day = use_signal(|| {
        initial
            .as_ref()
            .map(|c| c.payment_day.to_string())
            .unwrap_or_else(|| "1".to_string())
    });
    let status = use_signal(|| {
        initial
            .as_ref()
            .map(|c| c.status)
            .unwrap_or(ContractStatus::Draft)
            .as_str()
            .to_string()
    });
    let notes = use_signal(|| initial.as_ref().and_then(|c| c.notes.clone()).unwrap_or_default());
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    let contract_id = contract.as_ref().map(|c| c.id);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let parsed = (|| {
                let property = selected_id(&property_id()).ok_or("Please select a property")?;
                let tenant = selected_id(&tenant_id()).ok_or("Please select a tenant")?;
                let start = parse_date(&start_date()).ok_or("Enter a start date")?;
                let end = match end_date().trim() {
                    "" => None,
                    value => Some(parse_date(value).ok_or("End date is not a valid date")?),
                };
                let monthly_rent_cents = parse_cents(&rent()).ok_or("Enter the monthly rent")?;
                let deposit_cents = parse_cents(&deposit()).ok_or("Enter the deposit")?;
                let day = payment_day()
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| "Payment day must be a number")?;
                let status = status()
                    .parse::<ContractStatus>()
                    .map_err(|_| "Select a status")?;

                Ok::<_, &'static str>(ContractFormDto {
                    property_id: property,
                    tenant_id: tenant,
                    start_date: start,
                    end_date: end,
                    monthly_rent_cents,
                    deposit_cents,
                    payment_day: day,
                    status,
                    notes: optional(notes()),
                })
            })();

            let payload = match parsed {
                Ok(payload) => payload,
                Err(message) => {
                    error_message.set(Some(message.to_string()));
                    return;
                }
            };

            spawn(async move {
                is_submitting.set(true);
                let result = match contract_id {
                    Some(id) => update_contract(id, payload).await.map(|_| ()),
                    None => create_contract(payload).await.map(|_| ()),
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

    let title = if contract_id.is_some() { "Edit Contract" } else { "Add Contract" };

    rsx! {
        Modal {
            show,
            title: title.to_string(),
            prevent_close: is_submitting(),
            class: "max-w-2xl",
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                    SelectField { label: "Property", value: property_id, options: id_options("Select a property", &properties()) }
                    SelectField { label: "Tenant", value: tenant_id, options: id_options("Select a tenant", &tenants()) }
                }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                    TextField { label: "Start date", value: start_date, r#type: "date", required: true }
                    TextField { label: "End date", value: end_date, r#type: "date" }
                }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-3 gap-3",
                    NumberField { label: "Monthly rent", value: rent, step: "0.01", min: "0" }
                    NumberField { label: "Deposit", value: deposit, step: "0.01", min: "0" }
                    NumberField { label: "Payment day", value: payment_day, step: "1", min: "1", max: "28" }
                }
                SelectField { label: "Status", value: status, options: status_options(None) }
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
            if let Some(id) = contract_id {
                Attachments { entity_type: FileEntityType::Contract, entity_id: id }
            }
        }
    }
}
