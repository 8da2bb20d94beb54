use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
        store::user::UserState,
    },
    model::report::DashboardDto,
};

#[cfg(feature = "web")]
use crate::client::api::report::get_dashboard;

#[component]
pub fn Dashboard() -> Element {
    let is_staff = use_context::<Signal<UserState>>().read().is_staff();
    #[allow(unused_mut)]
    let mut dashboard = use_signal(|| None::<DashboardDto>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    let future = use_resource(get_dashboard);

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    dashboard.set(Some(data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to fetch dashboard: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        if let Some(data) = dashboard() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-6xl",
                    h1 { class: "text-lg sm:text-2xl mb-6", "Dashboard" }
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4",
                        StatCard { label: "Properties", value: data.properties, to: Route::Properties {} }
                        StatCard { label: "Active contracts", value: data.active_contracts, to: Route::Contracts {} }
                        StatCard { label: "Expiring within 30 days", value: data.expiring_contracts, to: Route::Contracts {} }
                        StatCard { label: "Open issues", value: data.open_issues, to: Route::Issues {} }
                        StatCard { label: "Pending offers", value: data.pending_offers, to: Route::Offers {} }
                        if is_staff {
                            StatCard { label: "Owners", value: data.owners, to: Route::Owners {} }
                            StatCard { label: "Tenants", value: data.tenants, to: Route::Tenants {} }
                        }
                    }
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage { }
        }
    }
}

#[component]
fn StatCard(label: String, value: u64, to: Route) -> Element {
    rsx! {
        Link {
            to,
            class: "card bg-base-200 hover:bg-base-300",
            div {
                class: "card-body",
                p { class: "text-sm opacity-70", "{label}" }
                p { class: "text-3xl font-semibold", "{value}" }
            }
        }
    }
}
