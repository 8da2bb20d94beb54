//! Id and name pairs feeding the select inputs of the forms.
//!
//! Each hook loads the first 100 records visible to the user. Hooks given
//! `enabled = false` skip the request, for lists the role may not read.

use dioxus::prelude::*;

#[cfg(feature = "web")]
use crate::client::api::{
    issue::get_issues, owner::get_owners, property::get_properties, provider::get_providers,
    tenant::get_tenants,
};

#[cfg(feature = "web")]
const OPTION_LIMIT: u64 = 100;

pub type Options = Signal<Vec<(i32, String)>>;

/// Name of `id` in `options`, or `#id` when it is not loaded.
pub fn option_name(options: &[(i32, String)], id: i32) -> String {
    options
        .iter()
        .find(|(option_id, _)| *option_id == id)
        .map(|(_, name)| name.clone())
        .unwrap_or_else(|| format!("#{}", id))
}

macro_rules! options_hook {
    ($name:ident, $fetch:ident, $label:expr) => {
        #[allow(unused_variables, unused_mut)]
        pub fn $name(enabled: bool) -> Options {
            let mut options = use_signal(Vec::<(i32, String)>::new);

            #[cfg(feature = "web")]
            let _ = use_resource(move || async move {
                if !enabled {
                    return;
                }
                match $fetch(0, OPTION_LIMIT, String::new()).await {
                    Ok(list) => options.set(list.items.iter().map($label).collect()),
                    Err(err) => {
                        dioxus_logger::tracing::error!("Failed to load options: {}", err)
                    }
                }
            });

            options
        }
    };
}

options_hook!(use_owner_options, get_owners, |o| (o.id, o.name.clone()));
options_hook!(use_tenant_options, get_tenants, |t| (t.id, t.name.clone()));
options_hook!(use_provider_options, get_providers, |p| (p.id, p.name.clone()));

#[allow(unused_variables, unused_mut)]
pub fn use_property_options(enabled: bool) -> Options {
    let mut options = use_signal(Vec::<(i32, String)>::new);

    #[cfg(feature = "web")]
    let _ = use_resource(move || async move {
        if !enabled {
            return;
        }
        match get_properties(0, OPTION_LIMIT, String::new(), None).await {
            Ok(list) => options.set(
                list.items
                    .iter()
                    .map(|p| (p.id, format!("{} ({})", p.name, p.city)))
                    .collect(),
            ),
            Err(err) => dioxus_logger::tracing::error!("Failed to load properties: {}", err),
        }
    });

    options
}

#[allow(unused_variables, unused_mut)]
pub fn use_issue_options(enabled: bool) -> Options {
    let mut options = use_signal(Vec::<(i32, String)>::new);

    #[cfg(feature = "web")]
    let _ = use_resource(move || async move {
        if !enabled {
            return;
        }
        match get_issues(0, OPTION_LIMIT, String::new(), None, None).await {
            Ok(list) => options.set(
                list.items
                    .iter()
                    .map(|i| (i.id, format!("#{} {}", i.id, i.title)))
                    .collect(),
            ),
            Err(err) => dioxus_logger::tracing::error!("Failed to load issues: {}", err),
        }
    });

    options
}
