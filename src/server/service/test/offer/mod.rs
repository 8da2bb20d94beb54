use super::as_user;
use crate::{
    model::offer::OfferStatus,
    server::{
        error::{auth::AuthError, AppError},
        model::offer::OfferParams,
        service::offer::OfferService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod decide;

fn params(issue_id: Option<i32>, property_id: Option<i32>) -> OfferParams {
    OfferParams {
        // Overwritten with the actor's company
        company_id: 0,
        issue_id,
        property_id,
        provider_id: None,
        title: "Replace tap".to_string(),
        description: None,
        amount_cents: 18_000,
        valid_until: None,
    }
}
