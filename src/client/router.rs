use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn, RequiresStaff};
use crate::client::route::{
    Account, CompanySettings, Contracts, Dashboard, Issues, Login, NotFound, Offers, Owners,
    Properties, Providers, Reports, Setup, Tenants, Users,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/login")]
    Login {},

    #[route("/setup?:code")]
    Setup { code: String },

    #[layout(RequiresLoggedIn)]
        #[route("/")]
        Dashboard {},

        #[route("/properties")]
        Properties {},

        #[route("/contracts")]
        Contracts {},

        #[route("/issues")]
        Issues {},

        #[route("/offers")]
        Offers {},

        #[route("/reports")]
        Reports {},

        #[route("/account")]
        Account {},
    #[end_layout]

    #[layout(RequiresStaff)]
        #[route("/owners")]
        Owners {},

        #[route("/tenants")]
        Tenants {},

        #[route("/providers")]
        Providers {},
    #[end_layout]

    #[layout(RequiresAdmin)]
        #[route("/users")]
        Users {},

        #[route("/company")]
        CompanySettings {},
    #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
