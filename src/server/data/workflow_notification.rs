use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::workflow::Notification;

/// Log of sent workflow notifications, used to send each one only once.
pub struct WorkflowNotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkflowNotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether `notification` was already sent to its recipient
    pub async fn exists(&self, notification: &Notification) -> Result<bool, DbErr> {
        let count = entity::prelude::WorkflowNotification::find()
            .filter(entity::workflow_notification::Column::Kind.eq(notification.kind.as_str()))
            .filter(entity::workflow_notification::Column::EntityId.eq(notification.entity_id))
            .filter(
                entity::workflow_notification::Column::PeriodKey
                    .eq(notification.period_key.as_str()),
            )
            .filter(
                entity::workflow_notification::Column::Recipient
                    .eq(notification.recipient.as_str()),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Records that `notification` was sent
    pub async fn record(&self, notification: &Notification) -> Result<(), DbErr> {
        entity::workflow_notification::ActiveModel {
            company_id: ActiveValue::Set(notification.company_id),
            kind: ActiveValue::Set(notification.kind.as_str().to_string()),
            entity_id: ActiveValue::Set(notification.entity_id),
            period_key: ActiveValue::Set(notification.period_key.clone()),
            recipient: ActiveValue::Set(notification.recipient.clone()),
            sent_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}
