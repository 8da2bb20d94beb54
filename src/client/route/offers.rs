use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            cents_input, id_options, Attachments, ConfirmationModal, ListToolbar, Modal,
            NumberField, Page, Pagination, PaginationData, SelectField, TextAreaField, TextField,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        route::options::{
            option_name, use_issue_options, use_property_options, use_provider_options, Options,
        },
        store::user::UserState,
    },
    model::{
        api::{format_cents, PaginatedDto},
        file::FileEntityType,
        offer::{OfferDto, OfferStatus},
        user::UserRole,
    },
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::offer::{
            accept_offer, create_offer, delete_offer, get_offers, reject_offer, send_offer,
            update_offer,
        },
        component::{optional, parse_date, selected_id},
    },
    model::{api::parse_cents, offer::OfferFormDto},
};

/// Status change triggered from a table row.
#[derive(Clone, Copy, PartialEq)]
enum OfferAction {
    Send,
    Accept,
    Reject,
}

fn status_badge(status: OfferStatus) -> &'static str {
    match status {
        OfferStatus::Draft => "badge-ghost",
        OfferStatus::Sent => "badge-info",
        OfferStatus::Accepted => "badge-success",
        OfferStatus::Rejected => "badge-error",
        OfferStatus::Expired => "badge-neutral",
    }
}

#[component]
pub fn Offers() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let is_staff = user_state.read().is_staff();
    let is_provider = user_state
        .read()
        .user
        .as_ref()
        .is_some_and(|u| u.role == UserRole::Provider);

    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);
    let search = use_signal(String::new);
    let status_filter = use_signal(String::new);
    let refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut data = use_signal(|| None::<PaginatedDto<OfferDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<OfferDto>);

    let issues = use_issue_options(is_staff || is_provider);
    let properties = use_property_options(is_staff);
    let providers = use_provider_options(is_staff);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        let status = status_filter().parse::<OfferStatus>().ok();
        get_offers(page(), per_page(), search(), status).await
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
                    dioxus_logger::tracing::error!("Failed to fetch offers: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    let status_options = std::iter::once((String::new(), "All statuses".to_string()))
        .chain(OfferStatus::ALL.iter().map(|s| (s.to_string(), s.to_string())))
        .collect::<Vec<_>>();

    rsx! {
        Title { "Offers | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                if is_staff {
                    ListToolbar {
                        title: "Offers",
                        search,
                        page,
                        export_href: "/api/export/offers".to_string(),
                        add_label: "Add Offer".to_string(),
                        on_add: move |_| {
                            editing.set(None);
                            show_form.set(true);
                        },
                    }
                } else if is_provider {
                    ListToolbar {
                        title: "Offers",
                        search,
                        page,
                        add_label: "Submit Offer".to_string(),
                        on_add: move |_| {
                            editing.set(None);
                            show_form.set(true);
                        },
                    }
                } else {
                    ListToolbar { title: "Offers", search, page }
                }
                div {
                    class: "w-48 mb-4",
                    SelectField { label: "Status", value: status_filter, options: status_options }
                }
                if let Some(err) = error() {
                    div { class: "alert alert-error mb-4", span { "{err.message}" } }
                }
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body",
                        if let Some(list) = data() {
                            OffersTable {
                                offers: list.items.clone(),
                                providers,
                                is_staff,
                                refetch_trigger,
                                on_edit: move |offer: OfferDto| {
                                    editing.set(Some(offer));
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
            OfferFormModal {
                show: show_form,
                offer: editing(),
                issues,
                properties,
                providers,
                is_staff,
                refetch_trigger,
            }
        }
    }
}

#[component]
fn OffersTable(
    offers: Vec<OfferDto>,
    providers: Options,
    is_staff: bool,
    mut refetch_trigger: Signal<u32>,
    on_edit: EventHandler<OfferDto>,
) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut offer_to_delete = use_signal(|| None::<(i32, String)>);
    #[allow(unused_mut)]
    let mut is_deleting = use_signal(|| false);
    #[allow(unused_mut)]
    let mut table_error = use_signal(|| None::<String>);

    let on_confirm_delete = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            let Some((id, _)) = offer_to_delete() else {
                return;
            };
            is_deleting.set(true);
            match delete_offer(id).await {
                Ok(()) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_delete_modal.set(false);
                    table_error.set(None);
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to delete offer: {}", err);
                    table_error.set(Some(err.message));
                }
            }
            is_deleting.set(false);
        });
    };

    #[allow(unused_variables)]
    let decide = move |id: i32, action: OfferAction| {
        #[cfg(feature = "web")]
        spawn(async move {
            let result = match action {
                OfferAction::Send => send_offer(id).await,
                OfferAction::Accept => accept_offer(id).await,
                OfferAction::Reject => reject_offer(id).await,
            };
            match result {
                Ok(_) => {
                    table_error.set(None);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => table_error.set(Some(err.message)),
            }
        });
    };

    rsx! {
        if let Some(err) = table_error() {
            if !show_delete_modal() {
                div { class: "alert alert-error mb-2", span { "{err}" } }
            }
        }
        if offers.is_empty() {
            div { class: "text-center py-8 opacity-50", "No offers found" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Provider" }
                            th { class: "text-right", "Amount" }
                            th { "Valid until" }
                            th { "Status" }
                            if is_staff {
                                th { class: "text-right", "Actions" }
                            }
                        }
                    }
                    tbody {
                        for offer in offers {
                            {
                                let offer_id = offer.id;
                                let offer_title = offer.title.clone();
                                let edit_offer = offer.clone();
                                let provider_name = offer
                                    .provider_id
                                    .map(|id| option_name(&providers(), id))
                                    .unwrap_or_default();
                                let valid_until = offer
                                    .valid_until
                                    .map(|d| d.to_string())
                                    .unwrap_or_default();
                                let is_draft = offer.status == OfferStatus::Draft;
                                let is_pending = offer.status.is_pending();
                                rsx! {
                                    tr {
                                        key: "{offer.id}",
                                        td { "{offer.title}" }
                                        td { "{provider_name}" }
                                        td { class: "text-right", {format_cents(offer.amount_cents)} }
                                        td { "{valid_until}" }
                                        td {
                                            span { class: "badge {status_badge(offer.status)}", "{offer.status}" }
                                        }
                                        if is_staff {
                                            td {
                                                div {
                                                    class: "flex flex-wrap gap-2 justify-end",
                                                    a {
                                                        class: "btn btn-sm btn-outline",
                                                        href: "/api/offers/{offer_id}/pdf",
                                                        "PDF"
                                                    }
                                                    if is_draft {
                                                        button {
                                                            class: "btn btn-sm btn-info",
                                                            onclick: move |_| decide(offer_id, OfferAction::Send),
                                                            "Send"
                                                        }
                                                    }
                                                    if is_pending {
                                                        button {
                                                            class: "btn btn-sm btn-success",
                                                            onclick: move |_| decide(offer_id, OfferAction::Accept),
                                                            "Accept"
                                                        }
                                                        button {
                                                            class: "btn btn-sm btn-warning",
                                                            onclick: move |_| decide(offer_id, OfferAction::Reject),
                                                            "Reject"
                                                        }
                                                    }
                                                    button {
                                                        class: "btn btn-sm btn-primary",
                                                        onclick: move |_| on_edit.call(edit_offer.clone()),
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-sm btn-error",
                                                        onclick: move |_| {
                                                            offer_to_delete.set(Some((offer_id, offer_title.clone())));
                                                            table_error.set(None);
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
            title: "Delete Offer".to_string(),
            message: rsx!(
                if let Some((_, title)) = offer_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete "
                        span { class: "font-bold", "\"{title}\"" }
                        "?"
                    }
                }
                if let Some(err) = table_error() {
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
fn OfferFormModal(
    show: Signal<bool>,
    offer: Option<OfferDto>,
    issues: Options,
    properties: Options,
    providers: Options,
    is_staff: bool,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let initial = offer.clone();
    let id_value = |id: Option<i32>| id.map(|id| id.to_string()).unwrap_or_default();
    let issue_id = use_signal(|| id_value(initial.as_ref().and_then(|o| o.issue_id)));
    let property_id = use_signal(|| id_value(initial.as_ref().and_then(|o| o.property_id)));
    let provider_id = use_signal(|| id_value(initial.as_ref().and_then(|o| o.provider_id)));
    let title = use_signal(|| initial.as_ref().map(|o| o.title.clone()).unwrap_or_default());
    let description = use_signal(|| {
        initial
            .as_ref()
            .and_then(|o| o.description.clone())
            .unwrap_or_default()
    });
    let amount = use_signal(|| {
        initial
            .as_ref()
            .map(|o| cents_input(o.amount_cents))
            .unwrap_or_default()
    });
    let valid_until = use_signal(|| {
        initial
            .as_ref()
            .and_then(|o| o.valid_until)
            .map(|d| d.to_string())
            .unwrap_or_default()
    });
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    let offer_id = offer.as_ref().map(|o| o.id);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let Some(amount_cents) = parse_cents(&amount()) else {
                error_message.set(Some("Enter the offered amount".to_string()));
                return;
            };
            let valid_until = match valid_until().trim() {
                "" => None,
                value => match parse_date(value) {
                    Some(date) => Some(date),
                    None => {
                        error_message.set(Some("Valid until is not a valid date".to_string()));
                        return;
                    }
                },
            };
            let payload = OfferFormDto {
                issue_id: selected_id(&issue_id()),
                property_id: selected_id(&property_id()),
                provider_id: selected_id(&provider_id()),
                title: title().trim().to_string(),
                description: optional(description()),
                amount_cents,
                valid_until,
            };
            spawn(async move {
                is_submitting.set(true);
                let result = match offer_id {
                    Some(id) => update_offer(id, payload).await.map(|_| ()),
                    None => create_offer(payload).await.map(|_| ()),
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

    let modal_title = if offer_id.is_some() { "Edit Offer" } else { "Add Offer" };

    rsx! {
        Modal {
            show,
            title: modal_title.to_string(),
            prevent_close: is_submitting(),
            class: "max-w-2xl",
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                SelectField { label: "Issue", value: issue_id, options: id_options("No issue", &issues()) }
                if is_staff {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                        SelectField { label: "Property", value: property_id, options: id_options("From the issue", &properties()) }
                        SelectField { label: "Provider", value: provider_id, options: id_options("No provider", &providers()) }
                    }
                }
                TextField { label: "Title", value: title, required: true }
                TextAreaField { label: "Description", value: description }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                    NumberField { label: "Amount", value: amount, step: "0.01", min: "0" }
                    TextField { label: "Valid until", value: valid_until, r#type: "date" }
                }
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
            if let Some(id) = offer_id {
                if is_staff {
                    Attachments { entity_type: FileEntityType::Offer, entity_id: id }
                }
            }
        }
    }
}
