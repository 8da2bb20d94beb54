use crate::server::{
    data::workflow_notification::WorkflowNotificationRepository,
    model::workflow::{Notification, NotificationKind},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod record;
