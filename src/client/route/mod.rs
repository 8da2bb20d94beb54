pub mod account;
pub mod company;
pub mod contracts;
pub mod dashboard;
pub mod issues;
pub mod login;
pub mod offers;
pub mod options;
pub mod owners;
pub mod properties;
pub mod providers;
pub mod reports;
pub mod setup;
pub mod tenants;
pub mod users;

use dioxus::prelude::*;

use crate::client::{component::page::ErrorPage, constant::SITE_NAME};

pub use account::Account;
pub use company::CompanySettings;
pub use contracts::Contracts;
pub use dashboard::Dashboard;
pub use issues::Issues;
pub use login::Login;
pub use offers::Offers;
pub use owners::Owners;
pub use properties::Properties;
pub use providers::Providers;
pub use reports::Reports;
pub use setup::Setup;
pub use tenants::Tenants;
pub use users::Users;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        ErrorPage { status: 404, message: "Page not found" }
    }
}
