use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            id_options, ConfirmationModal, ListToolbar, Modal, Page, Pagination, PaginationData,
            SelectField, TextField,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        route::options::{use_owner_options, use_provider_options, use_tenant_options, Options},
        store::user::UserState,
    },
    model::{
        api::PaginatedDto,
        user::{UserDto, UserRole},
    },
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::user::{create_user, delete_user, get_users, update_user},
        component::selected_id,
    },
    model::user::{CreateUserDto, UpdateUserDto},
};

#[component]
pub fn Users() -> Element {
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);
    let search = use_signal(String::new);
    let refetch_trigger = use_signal(|| 0u32);
    #[allow(unused_mut)]
    let mut data = use_signal(|| None::<PaginatedDto<UserDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<UserDto>);

    let owners = use_owner_options(true);
    let tenants = use_tenant_options(true);
    let providers = use_provider_options(true);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_users(page(), per_page(), search()).await
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
                    dioxus_logger::tracing::error!("Failed to fetch users: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Users | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                ListToolbar {
                    title: "Users",
                    search,
                    page,
                    add_label: "Add User".to_string(),
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
                            UsersTable {
                                users: list.items.clone(),
                                refetch_trigger,
                                on_edit: move |user: UserDto| {
                                    editing.set(Some(user));
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
            UserFormModal {
                show: show_form,
                user: editing(),
                owners,
                tenants,
                providers,
                refetch_trigger,
            }
        }
    }
}

#[component]
fn UsersTable(
    users: Vec<UserDto>,
    mut refetch_trigger: Signal<u32>,
    on_edit: EventHandler<UserDto>,
) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let current_user_id = user_state.read().user.as_ref().map(|u| u.id);

    let mut show_delete_modal = use_signal(|| false);
    let mut user_to_delete = use_signal(|| None::<(i32, String)>);
    #[allow(unused_mut)]
    let mut is_deleting = use_signal(|| false);
    #[allow(unused_mut)]
    let mut delete_error = use_signal(|| None::<String>);

    let on_confirm_delete = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            let Some((id, _)) = user_to_delete() else {
                return;
            };
            is_deleting.set(true);
            match delete_user(id).await {
                Ok(()) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_delete_modal.set(false);
                    delete_error.set(None);
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to delete user: {}", err);
                    delete_error.set(Some(err.message));
                }
            }
            is_deleting.set(false);
        });
    };

    rsx! {
        if users.is_empty() {
            div { class: "text-center py-8 opacity-50", "No users found" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Last login" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for user in users {
                            {
                                let user_id = user.id;
                                let user_name = user.name.clone();
                                let edit_user = user.clone();
                                let is_current_user = Some(user_id) == current_user_id;
                                let last_login = user
                                    .last_login_at
                                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                                    .unwrap_or_else(|| "never".to_string());
                                rsx! {
                                    tr {
                                        key: "{user.id}",
                                        td {
                                            div {
                                                class: "flex items-center gap-2",
                                                span { "{user.name}" }
                                                if is_current_user {
                                                    span { class: "badge badge-sm badge-primary", "You" }
                                                }
                                                if !user.active {
                                                    span { class: "badge badge-sm badge-ghost", "Disabled" }
                                                }
                                            }
                                        }
                                        td { "{user.email}" }
                                        td { {user.role.label()} }
                                        td { "{last_login}" }
                                        td {
                                            div {
                                                class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-sm btn-primary",
                                                    onclick: move |_| on_edit.call(edit_user.clone()),
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn btn-sm btn-error",
                                                    disabled: is_current_user,
                                                    onclick: move |_| {
                                                        user_to_delete.set(Some((user_id, user_name.clone())));
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
            title: "Delete User".to_string(),
            message: rsx!(
                if let Some((_, name)) = user_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete "
                        span { class: "font-bold", "\"{name}\"" }
                        "? They will no longer be able to log in."
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
fn UserFormModal(
    show: Signal<bool>,
    user: Option<UserDto>,
    owners: Options,
    tenants: Options,
    providers: Options,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let initial = user.clone();
    let id_value = |id: Option<i32>| id.map(|id| id.to_string()).unwrap_or_default();
    let name = use_signal(|| initial.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = use_signal(|| initial.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let password = use_signal(String::new);
    let role = use_signal(|| {
        initial
            .as_ref()
            .map(|u| u.role)
            .unwrap_or(UserRole::Manager)
            .to_string()
    });
    let active = use_signal(|| initial.as_ref().map(|u| u.active).unwrap_or(true));
    let owner_id = use_signal(|| id_value(initial.as_ref().and_then(|u| u.owner_id)));
    let tenant_id = use_signal(|| id_value(initial.as_ref().and_then(|u| u.tenant_id)));
    let provider_id = use_signal(|| id_value(initial.as_ref().and_then(|u| u.provider_id)));
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    let user_id = user.as_ref().map(|u| u.id);
    let selected_role = role().parse::<UserRole>().unwrap_or(UserRole::Manager);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let role = role().parse::<UserRole>().unwrap_or(UserRole::Manager);
            // Only the profile matching the role is kept
            let owner = (role == UserRole::Owner).then(|| selected_id(&owner_id())).flatten();
            let tenant = (role == UserRole::Tenant).then(|| selected_id(&tenant_id())).flatten();
            let provider = (role == UserRole::Provider)
                .then(|| selected_id(&provider_id()))
                .flatten();

            let name = name().trim().to_string();
            let email = email().trim().to_string();
            let password = password();
            let active = active();

            spawn(async move {
                is_submitting.set(true);
                let result = match user_id {
                    Some(id) => update_user(
                        id,
                        UpdateUserDto {
                            name,
                            role,
                            active,
                            owner_id: owner,
                            tenant_id: tenant,
                            provider_id: provider,
                        },
                    )
                    .await
                    .map(|_| ()),
                    None => create_user(CreateUserDto {
                        email,
                        name,
                        password,
                        role,
                        owner_id: owner,
                        tenant_id: tenant,
                        provider_id: provider,
                    })
                    .await
                    .map(|_| ()),
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

    let title = if user_id.is_some() { "Edit User" } else { "Add User" };
    let role_options = UserRole::ALL
        .iter()
        .map(|r| (r.to_string(), r.label().to_string()))
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
                TextField { label: "Name", value: name, required: true }
                if user_id.is_none() {
                    TextField { label: "Email", value: email, r#type: "email", required: true }
                    TextField { label: "Initial password (8+ characters)", value: password, r#type: "password", required: true }
                }
                SelectField { label: "Role", value: role, options: role_options }
                {match selected_role {
                    UserRole::Owner => rsx! {
                        SelectField { label: "Owner profile", value: owner_id, options: id_options("Select an owner", &owners()) }
                    },
                    UserRole::Tenant => rsx! {
                        SelectField { label: "Tenant profile", value: tenant_id, options: id_options("Select a tenant", &tenants()) }
                    },
                    UserRole::Provider => rsx! {
                        SelectField { label: "Provider profile", value: provider_id, options: id_options("Select a provider", &providers()) }
                    },
                    UserRole::Admin | UserRole::Manager => rsx! {},
                }}
                if user_id.is_some() {
                    UserActiveToggle { active }
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
        }
    }
}

#[component]
fn UserActiveToggle(active: Signal<bool>) -> Element {
    rsx! {
        label {
            class: "label cursor-pointer justify-start gap-3",
            input {
                r#type: "checkbox",
                class: "toggle",
                checked: active(),
                onchange: move |evt| active.set(evt.checked()),
            }
            span { class: "label-text", "Account active" }
        }
    }
}
