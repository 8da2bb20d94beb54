use super::as_user;
use crate::{
    model::issue::{IssuePriority, IssueStatus},
    server::{
        error::{auth::AuthError, AppError},
        model::issue::IssueParams,
        service::issue::IssueService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;

fn params(property_id: i32) -> IssueParams {
    IssueParams {
        // Overwritten with the actor's company
        company_id: 0,
        property_id,
        tenant_id: None,
        provider_id: None,
        title: "Leaking tap".to_string(),
        description: "The kitchen tap drips".to_string(),
        priority: IssuePriority::High,
    }
}
