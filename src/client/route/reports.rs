use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        component::{NumberField, Page, SelectField},
        constant::SITE_NAME,
        model::error::ApiError,
        store::user::UserState,
    },
    model::{
        api::format_cents,
        report::{FinancialReportDto, FinancialTotalsDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::report::get_financial_report;

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Download link for the report workbook of the selected period.
fn report_export_url(year: i32, month: Option<u32>) -> String {
    match month {
        Some(month) => format!("/api/export/report?year={}&month={}", year, month),
        None => format!("/api/export/report?year={}", year),
    }
}

#[component]
pub fn Reports() -> Element {
    let is_staff = use_context::<Signal<UserState>>().read().is_staff();
    let today = Utc::now().date_naive();
    let year = use_signal(|| today.year().to_string());
    let month = use_signal(|| today.month().to_string());
    #[allow(unused_mut)]
    let mut report = use_signal(|| None::<FinancialReportDto>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);

    let selected_year = year().trim().parse::<i32>().ok();
    let selected_month = month().parse::<u32>().ok();

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let Ok(year) = year().trim().parse::<i32>() else {
            return None;
        };
        let month = month().parse::<u32>().ok();
        Some(get_financial_report(year, month).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    report.set(Some(data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to fetch financial report: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    let month_options = std::iter::once(("".to_string(), "Whole year".to_string()))
        .chain(
            MONTHS
                .iter()
                .enumerate()
                .map(|(i, name)| ((i + 1).to_string(), name.to_string())),
        )
        .collect::<Vec<_>>();

    rsx! {
        Title { "Reports | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                div {
                    class: "flex flex-wrap items-end justify-between gap-4",
                    h1 { class: "text-lg sm:text-2xl", "Financial report" }
                    div {
                        class: "flex flex-wrap items-end gap-3",
                        div { class: "w-32", NumberField { label: "Year", value: year, step: "1", min: "2000", max: "2100" } }
                        div { class: "w-44", SelectField { label: "Month", value: month, options: month_options } }
                        if is_staff {
                            if let Some(year) = selected_year {
                                a {
                                    class: "btn btn-outline",
                                    href: report_export_url(year, selected_month),
                                    "Export"
                                }
                            }
                        }
                    }
                }
                if let Some(err) = error() {
                    div { class: "alert alert-error", span { "{err.message}" } }
                }
                if let Some(data) = report() {
                    ReportTotals { totals: data.totals.clone(), management_fee_bps: data.management_fee_bps }
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body overflow-x-auto",
                            h2 { class: "card-title", "Per property" }
                            if data.properties.is_empty() {
                                div { class: "text-center py-8 opacity-50", "No properties in this period" }
                            } else {
                                table {
                                    class: "table table-zebra w-full",
                                    thead {
                                        tr {
                                            th { "Property" }
                                            th { class: "text-right", "Income" }
                                            th { class: "text-right", "Management fee" }
                                            th { class: "text-right", "Expenses" }
                                            th { class: "text-right", "Net" }
                                        }
                                    }
                                    tbody {
                                        for row in data.properties.iter() {
                                            tr {
                                                key: "{row.property_id}",
                                                td { "{row.property_name}" }
                                                td { class: "text-right", {format_cents(row.income_cents)} }
                                                td { class: "text-right", {format_cents(row.management_fee_cents)} }
                                                td { class: "text-right", {format_cents(row.expenses_cents)} }
                                                td { class: "text-right font-bold", {format_cents(row.net_cents)} }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body overflow-x-auto",
                            h2 { class: "card-title", "Per owner" }
                            if data.owners.is_empty() {
                                div { class: "text-center py-8 opacity-50", "No owners in this period" }
                            } else {
                                table {
                                    class: "table table-zebra w-full",
                                    thead {
                                        tr {
                                            th { "Owner" }
                                            th { class: "text-right", "Income" }
                                            th { class: "text-right", "Management fee" }
                                            th { class: "text-right", "Expenses" }
                                            th { class: "text-right", "Net payout" }
                                        }
                                    }
                                    tbody {
                                        for row in data.owners.iter() {
                                            tr {
                                                key: "{row.owner_id}",
                                                td { "{row.owner_name}" }
                                                td { class: "text-right", {format_cents(row.income_cents)} }
                                                td { class: "text-right", {format_cents(row.management_fee_cents)} }
                                                td { class: "text-right", {format_cents(row.expenses_cents)} }
                                                td { class: "text-right font-bold", {format_cents(row.net_cents)} }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                } else if error().is_none() {
                    div { class: "flex justify-center py-8", span { class: "loading loading-spinner" } }
                }
            }
        }
    }
}

#[component]
fn ReportTotals(totals: FinancialTotalsDto, management_fee_bps: i32) -> Element {
    let fee_percent = format!("{}.{:02}%", management_fee_bps / 100, management_fee_bps % 100);

    rsx! {
        div {
            class: "stats stats-vertical sm:stats-horizontal bg-base-200 w-full",
            div {
                class: "stat",
                div { class: "stat-title", "Income" }
                div { class: "stat-value text-2xl", {format_cents(totals.income_cents)} }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Management fee" }
                div { class: "stat-value text-2xl", {format_cents(totals.management_fee_cents)} }
                div { class: "stat-desc", "{fee_percent} of income" }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Expenses" }
                div { class: "stat-value text-2xl", {format_cents(totals.expenses_cents)} }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Net" }
                div { class: "stat-value text-2xl", {format_cents(totals.net_cents)} }
            }
        }
    }
}
