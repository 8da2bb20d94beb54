use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    ExprTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::issue::IssueStatus,
    server::{
        data::property::owner_property_ids,
        model::{
            issue::{Issue, IssueFilter, IssueParams},
            scope::{Scope, Visibility},
        },
    },
};

/// Restricts issues to the caller's company and visibility.
fn scope_condition(scope: &Scope) -> Option<Condition> {
    let company = Condition::all().add(entity::issue::Column::CompanyId.eq(scope.company_id));

    match scope.visibility {
        Visibility::Company => Some(company),
        Visibility::Owner(owner_id) => Some(
            company
                .add(entity::issue::Column::PropertyId.in_subquery(owner_property_ids(owner_id))),
        ),
        Visibility::Tenant(tenant_id) => {
            Some(company.add(entity::issue::Column::TenantId.eq(tenant_id)))
        }
        Visibility::Provider(provider_id) => {
            Some(company.add(entity::issue::Column::ProviderId.eq(provider_id)))
        }
        Visibility::Nothing => None,
    }
}

/// Statuses counted as not yet done.
const OPEN_STATUSES: [IssueStatus; 2] = [IssueStatus::Open, IssueStatus::InProgress];

pub struct IssueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IssueRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an open issue
    pub async fn create(&self, params: IssueParams) -> Result<Issue, DbErr> {
        let now = Utc::now();
        let issue = entity::issue::ActiveModel {
            company_id: ActiveValue::Set(params.company_id),
            property_id: ActiveValue::Set(params.property_id),
            tenant_id: ActiveValue::Set(params.tenant_id),
            provider_id: ActiveValue::Set(params.provider_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            priority: ActiveValue::Set(params.priority.as_str().to_string()),
            status: ActiveValue::Set(IssueStatus::Open.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            resolved_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Issue::from_entity(issue)
    }

    pub async fn find_by_id(&self, scope: &Scope, id: i32) -> Result<Option<Issue>, DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok(None);
        };

        entity::prelude::Issue::find_by_id(id)
            .filter(condition)
            .one(self.db)
            .await?
            .map(Issue::from_entity)
            .transpose()
    }

    /// Gets a page of issues, most recently updated first
    ///
    /// `search` matches title and description.
    pub async fn get_paginated(
        &self,
        scope: &Scope,
        filter: IssueFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Issue>, u64), DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok((Vec::new(), 0));
        };

        let mut query = entity::prelude::Issue::find().filter(condition);

        if let Some(term) = filter.search {
            query = query.filter(
                entity::issue::Column::Title
                    .contains(&term)
                    .or(entity::issue::Column::Description.contains(&term)),
            );
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::issue::Column::Status.eq(status.as_str()));
        }
        if let Some(priority) = filter.priority {
            query = query.filter(entity::issue::Column::Priority.eq(priority.as_str()));
        }
        if let Some(property_id) = filter.property_id {
            query = query.filter(entity::issue::Column::PropertyId.eq(property_id));
        }
        if let Some(provider_id) = filter.provider_id {
            query = query.filter(entity::issue::Column::ProviderId.eq(provider_id));
        }

        let paginator = query
            .order_by_desc(entity::issue::Column::UpdatedAt)
            .order_by_desc(entity::issue::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let issues = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Issue::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((issues, total))
    }

    pub async fn get_all(&self, scope: &Scope) -> Result<Vec<Issue>, DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok(Vec::new());
        };

        entity::prelude::Issue::find()
            .filter(condition)
            .order_by_desc(entity::issue::Column::UpdatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Issue::from_entity)
            .collect()
    }

    /// Updates the editable fields of an issue; status is changed through `set_status`
    pub async fn update(&self, id: i32, params: IssueParams) -> Result<Option<Issue>, DbErr> {
        let Some(issue) = entity::prelude::Issue::find_by_id(id)
            .filter(entity::issue::Column::CompanyId.eq(params.company_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = issue.into_active_model();
        active.property_id = ActiveValue::Set(params.property_id);
        active.tenant_id = ActiveValue::Set(params.tenant_id);
        active.provider_id = ActiveValue::Set(params.provider_id);
        active.title = ActiveValue::Set(params.title);
        active.description = ActiveValue::Set(params.description);
        active.priority = ActiveValue::Set(params.priority.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        let issue = active.update(self.db).await?;

        Issue::from_entity(issue).map(Some)
    }

    /// Sets the status of an issue
    ///
    /// `resolved_at` is stamped when the issue becomes resolved or closed and
    /// cleared when it is reopened.
    pub async fn set_status(
        &self,
        company_id: i32,
        id: i32,
        status: IssueStatus,
    ) -> Result<Option<Issue>, DbErr> {
        let Some(issue) = entity::prelude::Issue::find_by_id(id)
            .filter(entity::issue::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let now = Utc::now();
        let resolved_at = if status.is_done() {
            Some(issue.resolved_at.unwrap_or(now))
        } else {
            None
        };

        let mut active = issue.into_active_model();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.resolved_at = ActiveValue::Set(resolved_at);
        active.updated_at = ActiveValue::Set(now);

        let issue = active.update(self.db).await?;

        Issue::from_entity(issue).map(Some)
    }

    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Issue::delete_many()
            .filter(entity::issue::Column::Id.eq(id))
            .filter(entity::issue::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts open and in-progress issues visible under `scope`
    pub async fn count_open(&self, scope: &Scope) -> Result<u64, DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok(0);
        };

        entity::prelude::Issue::find()
            .filter(condition)
            .filter(entity::issue::Column::Status.is_in(OPEN_STATUSES.map(|s| s.as_str())))
            .count(self.db)
            .await
    }

    /// Gets issues of all companies still `open` that were created before `cutoff`
    pub async fn get_open_created_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Issue>, DbErr> {
        entity::prelude::Issue::find()
            .filter(entity::issue::Column::Status.eq(IssueStatus::Open.as_str()))
            .filter(entity::issue::Column::CreatedAt.lt(cutoff))
            .order_by_asc(entity::issue::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Issue::from_entity)
            .collect()
    }
}
