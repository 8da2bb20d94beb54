//! Labelled form inputs bound to string signals.

use chrono::NaiveDate;
use dioxus::prelude::*;

#[component]
pub fn TextField(
    label: String,
    value: Signal<String>,
    r#type: Option<&'static str>,
    required: Option<bool>,
    disabled: Option<bool>,
    placeholder: Option<String>,
) -> Element {
    rsx!(
        label {
            class: "form-control w-full flex flex-col gap-1",
            span { class: "label-text", "{label}" }
            input {
                r#type: r#type.unwrap_or("text"),
                class: "input input-bordered w-full",
                required: required.unwrap_or(false),
                disabled: disabled.unwrap_or(false),
                placeholder: placeholder.unwrap_or_default(),
                value: "{value()}",
                oninput: move |evt| value.set(evt.value()),
            }
        }
    )
}

/// Decimal input, e.g. an amount in the company's currency.
#[component]
pub fn NumberField(
    label: String,
    value: Signal<String>,
    step: Option<&'static str>,
    min: Option<&'static str>,
    max: Option<&'static str>,
    disabled: Option<bool>,
) -> Element {
    rsx!(
        label {
            class: "form-control w-full flex flex-col gap-1",
            span { class: "label-text", "{label}" }
            input {
                r#type: "number",
                class: "input input-bordered w-full",
                step: step.unwrap_or("any"),
                min: min.unwrap_or_default(),
                max: max.unwrap_or_default(),
                disabled: disabled.unwrap_or(false),
                value: "{value()}",
                oninput: move |evt| value.set(evt.value()),
            }
        }
    )
}

#[component]
pub fn TextAreaField(label: String, value: Signal<String>, disabled: Option<bool>) -> Element {
    rsx!(
        label {
            class: "form-control w-full flex flex-col gap-1",
            span { class: "label-text", "{label}" }
            textarea {
                class: "textarea textarea-bordered w-full",
                rows: "3",
                disabled: disabled.unwrap_or(false),
                value: "{value()}",
                oninput: move |evt| value.set(evt.value()),
            }
        }
    )
}

/// Select over `(value, label)` pairs. An empty value stands for "none".
#[component]
pub fn SelectField(
    label: String,
    value: Signal<String>,
    options: Vec<(String, String)>,
    disabled: Option<bool>,
) -> Element {
    rsx!(
        label {
            class: "form-control w-full flex flex-col gap-1",
            span { class: "label-text", "{label}" }
            select {
                class: "select select-bordered w-full",
                disabled: disabled.unwrap_or(false),
                value: "{value()}",
                onchange: move |evt| value.set(evt.value()),
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: option_value == value(),
                        "{option_label}"
                    }
                }
            }
        }
    )
}

/// Trimmed input, `None` when blank.
pub fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Selected id of a [`SelectField`], `None` for the empty option.
pub fn selected_id(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

/// Select options for ids, led by an empty "none" entry.
pub fn id_options(none_label: &str, items: &[(i32, String)]) -> Vec<(String, String)> {
    std::iter::once((String::new(), none_label.to_string()))
        .chain(items.iter().map(|(id, name)| (id.to_string(), name.clone())))
        .collect()
}

/// Value for a [`NumberField`] holding an amount in cents.
pub fn cents_input(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, cents.unsigned_abs() / 100, cents.unsigned_abs() % 100)
}

/// Parses the `YYYY-MM-DD` value of a date input.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
