use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            NumberField, Page, TextAreaField, TextField,
        },
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::company::CompanyDto,
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::company::{get_company, update_company},
        component::optional,
    },
    model::company::UpdateCompanyDto,
};

#[component]
pub fn CompanySettings() -> Element {
    #[allow(unused_mut)]
    let mut company = use_signal(|| None::<CompanyDto>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    let future = use_resource(get_company);

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    company.set(Some(data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to fetch company: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Company | {SITE_NAME}" }
        if let Some(data) = company() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-2xl",
                    h1 { class: "text-lg sm:text-2xl mb-6", "Company settings" }
                    CompanyForm { key: "{data.id}", company: data, on_saved: move |saved| company.set(Some(saved)) }
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
fn CompanyForm(company: CompanyDto, on_saved: EventHandler<CompanyDto>) -> Element {
    let name = use_signal(|| company.name.clone());
    let email = use_signal(|| company.email.clone());
    let phone = use_signal(|| company.phone.clone().unwrap_or_default());
    let address = use_signal(|| company.address.clone().unwrap_or_default());
    let fee_bps = use_signal(|| company.management_fee_bps.to_string());
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut saved_message = use_signal(|| false);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let Ok(management_fee_bps) = fee_bps().trim().parse::<i32>() else {
                error_message.set(Some("Management fee must be a whole number".to_string()));
                return;
            };
            let payload = UpdateCompanyDto {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                phone: optional(phone()),
                address: optional(address()),
                management_fee_bps,
            };
            spawn(async move {
                is_submitting.set(true);
                saved_message.set(false);
                match update_company(payload).await {
                    Ok(company) => {
                        error_message.set(None);
                        saved_message.set(true);
                        on_saved.call(company);
                    }
                    Err(err) => error_message.set(Some(err.message)),
                }
                is_submitting.set(false);
            });
        }
    };

    rsx! {
        div {
            class: "card bg-base-200",
            form {
                class: "card-body flex flex-col gap-3",
                onsubmit: on_submit,
                TextField { label: "Name", value: name, required: true }
                TextField { label: "Email", value: email, r#type: "email", required: true }
                TextField { label: "Phone", value: phone }
                TextAreaField { label: "Address", value: address }
                NumberField {
                    label: "Management fee (basis points, 100 = 1%)",
                    value: fee_bps,
                    step: "1",
                    min: "0",
                    max: "10000",
                }
                p { class: "text-sm opacity-60", "Slug: {company.slug}" }
                if let Some(err) = error_message() {
                    div { class: "alert alert-error", span { "{err}" } }
                }
                if saved_message() {
                    div { class: "alert alert-success", span { "Company settings saved" } }
                }
                div {
                    class: "flex justify-end",
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
