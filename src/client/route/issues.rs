use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            id_options, Attachments, ConfirmationModal, ListToolbar, Modal, Page, Pagination,
            PaginationData, SelectField, TextAreaField, TextField,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        route::options::{
            option_name, use_property_options, use_provider_options, use_tenant_options, Options,
        },
        store::user::UserState,
    },
    model::{
        api::PaginatedDto,
        file::FileEntityType,
        issue::{IssueDto, IssuePriority, IssueStatus},
        user::UserRole,
    },
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::issue::{create_issue, delete_issue, get_issues, update_issue, update_issue_status},
        component::selected_id,
    },
    model::issue::IssueFormDto,
};

fn priority_badge(priority: IssuePriority) -> &'static str {
    match priority {
        IssuePriority::Low => "badge-ghost",
        IssuePriority::Medium => "badge-info",
        IssuePriority::High => "badge-warning",
        IssuePriority::Urgent => "badge-error",
    }
}

fn enum_options<T: std::fmt::Display>(none_label: Option<&str>, all: &[T]) -> Vec<(String, String)> {
    none_label
        .map(|label| (String::new(), label.to_string()))
        .into_iter()
        .chain(all.iter().map(|v| (v.to_string(), v.to_string())))
        .collect()
}

#[component]
pub fn Issues() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let is_staff = user_state.read().is_staff();
    let can_report = is_staff
        || user_state
            .read()
            .user
            .as_ref()
            .is_some_and(|u| u.role == UserRole::Tenant);

    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);
    let search = use_signal(String::new);
    let status_filter = use_signal(String::new);
    let priority_filter = use_signal(String::new);
    let refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut data = use_signal(|| None::<PaginatedDto<IssueDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<IssueDto>);

    let properties = use_property_options(true);
    let tenants = use_tenant_options(is_staff);
    let providers = use_provider_options(is_staff);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        let status = status_filter().parse::<IssueStatus>().ok();
        let priority = priority_filter().parse::<IssuePriority>().ok();
        get_issues(page(), per_page(), search(), status, priority).await
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
                    dioxus_logger::tracing::error!("Failed to fetch issues: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Issues | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                if is_staff {
                    ListToolbar {
                        title: "Issues",
                        search,
                        page,
                        export_href: "/api/export/issues".to_string(),
                        add_label: "Report Issue".to_string(),
                        on_add: move |_| {
                            editing.set(None);
                            show_form.set(true);
                        },
                    }
                } else if can_report {
                    ListToolbar {
                        title: "Issues",
                        search,
                        page,
                        add_label: "Report Issue".to_string(),
                        on_add: move |_| {
                            editing.set(None);
                            show_form.set(true);
                        },
                    }
                } else {
                    ListToolbar { title: "Issues", search, page }
                }
                div {
                    class: "flex flex-wrap gap-4 mb-4",
                    div {
                        class: "w-48",
                        SelectField { label: "Status", value: status_filter, options: enum_options(Some("All statuses"), IssueStatus::ALL) }
                    }
                    div {
                        class: "w-48",
                        SelectField { label: "Priority", value: priority_filter, options: enum_options(Some("All priorities"), IssuePriority::ALL) }
                    }
                }
                if let Some(err) = error() {
                    div { class: "alert alert-error mb-4", span { "{err.message}" } }
                }
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body",
                        if let Some(list) = data() {
                            IssuesTable {
                                issues: list.items.clone(),
                                properties,
                                providers,
                                is_staff,
                                refetch_trigger,
                                on_edit: move |issue: IssueDto| {
                                    editing.set(Some(issue));
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
            IssueFormModal {
                show: show_form,
                issue: editing(),
                properties,
                tenants,
                providers,
                is_staff,
                refetch_trigger,
            }
        }
    }
}

#[component]
fn IssuesTable(
    issues: Vec<IssueDto>,
    properties: Options,
    providers: Options,
    is_staff: bool,
    mut refetch_trigger: Signal<u32>,
    on_edit: EventHandler<IssueDto>,
) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut issue_to_delete = use_signal(|| None::<(i32, String)>);
    #[allow(unused_mut)]
    let mut is_deleting = use_signal(|| false);
    #[allow(unused_mut)]
    let mut table_error = use_signal(|| None::<String>);

    let on_confirm_delete = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            let Some((id, _)) = issue_to_delete() else {
                return;
            };
            is_deleting.set(true);
            match delete_issue(id).await {
                Ok(()) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_delete_modal.set(false);
                    table_error.set(None);
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to delete issue: {}", err);
                    table_error.set(Some(err.message));
                }
            }
            is_deleting.set(false);
        });
    };

    rsx! {
        if let Some(err) = table_error() {
            if !show_delete_modal() {
                div { class: "alert alert-error mb-2", span { "{err}" } }
            }
        }
        if issues.is_empty() {
            div { class: "text-center py-8 opacity-50", "No issues found" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Property" }
                            th { "Provider" }
                            th { "Priority" }
                            th { "Status" }
                            th { "Reported" }
                            if is_staff {
                                th { class: "text-right", "Actions" }
                            }
                        }
                    }
                    tbody {
                        for issue in issues {
                            {
                                let issue_id = issue.id;
                                let issue_title = issue.title.clone();
                                let edit_issue = issue.clone();
                                let property_name = option_name(&properties(), issue.property_id);
                                let provider_name = issue
                                    .provider_id
                                    .map(|id| option_name(&providers(), id))
                                    .unwrap_or_default();
                                let reported = issue.created_at.format("%Y-%m-%d").to_string();
                                rsx! {
                                    tr {
                                        key: "{issue.id}",
                                        td { "{issue.title}" }
                                        td { "{property_name}" }
                                        td { "{provider_name}" }
                                        td {
                                            span { class: "badge {priority_badge(issue.priority)}", "{issue.priority}" }
                                        }
                                        td {
                                            if is_staff {
                                                select {
                                                    class: "select select-bordered select-xs",
                                                    value: "{issue.status}",
                                                    onchange: move |evt| {
                                                        let Ok(status) = evt.value().parse::<IssueStatus>() else {
                                                            return;
                                                        };
                                                        #[cfg(feature = "web")]
                                                        spawn(async move {
                                                            match update_issue_status(issue_id, status).await {
                                                                Ok(_) => refetch_trigger.set(refetch_trigger() + 1),
                                                                Err(err) => table_error.set(Some(err.message)),
                                                            }
                                                        });
                                                        #[cfg(not(feature = "web"))]
                                                        let _ = status;
                                                    },
                                                    for status in IssueStatus::ALL {
                                                        option {
                                                            value: "{status}",
                                                            selected: *status == issue.status,
                                                            "{status}"
                                                        }
                                                    }
                                                }
                                            } else {
                                                span { class: "badge", "{issue.status}" }
                                            }
                                        }
                                        td { "{reported}" }
                                        if is_staff {
                                            td {
                                                div {
                                                    class: "flex gap-2 justify-end",
                                                    button {
                                                        class: "btn btn-sm btn-primary",
                                                        onclick: move |_| on_edit.call(edit_issue.clone()),
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-sm btn-error",
                                                        onclick: move |_| {
                                                            issue_to_delete.set(Some((issue_id, issue_title.clone())));
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
            title: "Delete Issue".to_string(),
            message: rsx!(
                if let Some((_, title)) = issue_to_delete() {
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
fn IssueFormModal(
    show: Signal<bool>,
    issue: Option<IssueDto>,
    properties: Options,
    tenants: Options,
    providers: Options,
    is_staff: bool,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let initial = issue.clone();
    let id_value = |id: Option<i32>| id.map(|id| id.to_string()).unwrap_or_default();
    let property_id = use_signal(|| id_value(initial.as_ref().map(|i| i.property_id)));
    let tenant_id = use_signal(|| id_value(initial.as_ref().and_then(|i| i.tenant_id)));
    let provider_id = use_signal(|| id_value(initial.as_ref().and_then(|i| i.provider_id)));
    let title = use_signal(|| initial.as_ref().map(|i| i.title.clone()).unwrap_or_default());
    let description =
        use_signal(|| initial.as_ref().map(|i| i.description.clone()).unwrap_or_default());
    let priority = use_signal(|| {
        initial
            .as_ref()
            .map(|i| i.priority)
            .unwrap_or(IssuePriority::Medium)
            .to_string()
    });
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    let issue_id = issue.as_ref().map(|i| i.id);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let Some(property) = selected_id(&property_id()) else {
                error_message.set(Some("Please select a property".to_string()));
                return;
            };
            let payload = IssueFormDto {
                property_id: property,
                tenant_id: selected_id(&tenant_id()),
                provider_id: selected_id(&provider_id()),
                title: title().trim().to_string(),
                description: description().trim().to_string(),
                priority: priority().parse().unwrap_or(IssuePriority::Medium),
            };
            spawn(async move {
                is_submitting.set(true);
                let result = match issue_id {
                    Some(id) => update_issue(id, payload).await.map(|_| ()),
                    None => create_issue(payload).await.map(|_| ()),
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

    let modal_title = if issue_id.is_some() { "Edit Issue" } else { "Report Issue" };

    rsx! {
        Modal {
            show,
            title: modal_title.to_string(),
            prevent_close: is_submitting(),
            class: "max-w-2xl",
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                SelectField { label: "Property", value: property_id, options: id_options("Select a property", &properties()) }
                if is_staff {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                        SelectField { label: "Tenant", value: tenant_id, options: id_options("No tenant", &tenants()) }
                        SelectField { label: "Provider", value: provider_id, options: id_options("Unassigned", &providers()) }
                    }
                }
                TextField { label: "Title", value: title, required: true }
                TextAreaField { label: "Description", value: description }
                SelectField { label: "Priority", value: priority, options: enum_options(None, IssuePriority::ALL) }
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
            if let Some(id) = issue_id {
                Attachments { entity_type: FileEntityType::Issue, entity_id: id }
            }
        }
    }
}
