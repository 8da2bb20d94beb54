use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::offer::OfferStatus,
    server::{
        data::property::owner_property_ids,
        model::{
            offer::{Offer, OfferFilter, OfferParams},
            scope::{Scope, Visibility},
        },
    },
};

/// Restricts offers to the caller's company and visibility.
fn scope_condition(scope: &Scope) -> Option<Condition> {
    let company = Condition::all().add(entity::offer::Column::CompanyId.eq(scope.company_id));

    match scope.visibility {
        Visibility::Company => Some(company),
        Visibility::Owner(owner_id) => Some(
            company.add(entity::offer::Column::PropertyId.in_subquery(owner_property_ids(owner_id))),
        ),
        Visibility::Provider(provider_id) => {
            Some(company.add(entity::offer::Column::ProviderId.eq(provider_id)))
        }
        Visibility::Tenant(_) | Visibility::Nothing => None,
    }
}

const PENDING_STATUSES: [OfferStatus; 2] = [OfferStatus::Draft, OfferStatus::Sent];

pub struct OfferRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OfferRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a draft offer
    pub async fn create(&self, params: OfferParams) -> Result<Offer, DbErr> {
        let offer = entity::offer::ActiveModel {
            company_id: ActiveValue::Set(params.company_id),
            issue_id: ActiveValue::Set(params.issue_id),
            property_id: ActiveValue::Set(params.property_id),
            provider_id: ActiveValue::Set(params.provider_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            amount_cents: ActiveValue::Set(params.amount_cents),
            status: ActiveValue::Set(OfferStatus::Draft.as_str().to_string()),
            valid_until: ActiveValue::Set(params.valid_until),
            created_at: ActiveValue::Set(Utc::now()),
            decided_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Offer::from_entity(offer)
    }

    pub async fn find_by_id(&self, scope: &Scope, id: i32) -> Result<Option<Offer>, DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok(None);
        };

        entity::prelude::Offer::find_by_id(id)
            .filter(condition)
            .one(self.db)
            .await?
            .map(Offer::from_entity)
            .transpose()
    }

    /// Gets a page of offers, newest first
    ///
    /// `search` matches the title.
    pub async fn get_paginated(
        &self,
        scope: &Scope,
        filter: OfferFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Offer>, u64), DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok((Vec::new(), 0));
        };

        let mut query = entity::prelude::Offer::find().filter(condition);

        if let Some(term) = filter.search {
            query = query.filter(entity::offer::Column::Title.contains(&term));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::offer::Column::Status.eq(status.as_str()));
        }
        if let Some(issue_id) = filter.issue_id {
            query = query.filter(entity::offer::Column::IssueId.eq(issue_id));
        }
        if let Some(property_id) = filter.property_id {
            query = query.filter(entity::offer::Column::PropertyId.eq(property_id));
        }

        let paginator = query
            .order_by_desc(entity::offer::Column::CreatedAt)
            .order_by_desc(entity::offer::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let offers = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Offer::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((offers, total))
    }

    pub async fn get_all(&self, scope: &Scope) -> Result<Vec<Offer>, DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok(Vec::new());
        };

        entity::prelude::Offer::find()
            .filter(condition)
            .order_by_desc(entity::offer::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Offer::from_entity)
            .collect()
    }

    /// Gets accepted offers of a company decided within `[from, to)`
    pub async fn get_accepted_between(
        &self,
        company_id: i32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Offer>, DbErr> {
        entity::prelude::Offer::find()
            .filter(entity::offer::Column::CompanyId.eq(company_id))
            .filter(entity::offer::Column::Status.eq(OfferStatus::Accepted.as_str()))
            .filter(entity::offer::Column::DecidedAt.gte(from))
            .filter(entity::offer::Column::DecidedAt.lt(to))
            .all(self.db)
            .await?
            .into_iter()
            .map(Offer::from_entity)
            .collect()
    }

    pub async fn update(&self, id: i32, params: OfferParams) -> Result<Option<Offer>, DbErr> {
        let Some(offer) = entity::prelude::Offer::find_by_id(id)
            .filter(entity::offer::Column::CompanyId.eq(params.company_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = offer.into_active_model();
        active.issue_id = ActiveValue::Set(params.issue_id);
        active.property_id = ActiveValue::Set(params.property_id);
        active.provider_id = ActiveValue::Set(params.provider_id);
        active.title = ActiveValue::Set(params.title);
        active.description = ActiveValue::Set(params.description);
        active.amount_cents = ActiveValue::Set(params.amount_cents);
        active.valid_until = ActiveValue::Set(params.valid_until);

        let offer = active.update(self.db).await?;

        Offer::from_entity(offer).map(Some)
    }

    /// Sets the status of an offer
    ///
    /// Accepted and rejected offers get `decided_at` stamped.
    pub async fn set_status(
        &self,
        company_id: i32,
        id: i32,
        status: OfferStatus,
    ) -> Result<Option<Offer>, DbErr> {
        let Some(offer) = entity::prelude::Offer::find_by_id(id)
            .filter(entity::offer::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let decided_at = match status {
            OfferStatus::Accepted | OfferStatus::Rejected => Some(Utc::now()),
            _ => offer.decided_at,
        };

        let mut active = offer.into_active_model();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.decided_at = ActiveValue::Set(decided_at);

        let offer = active.update(self.db).await?;

        Offer::from_entity(offer).map(Some)
    }

    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Offer::delete_many()
            .filter(entity::offer::Column::Id.eq(id))
            .filter(entity::offer::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts draft and sent offers visible under `scope`
    pub async fn count_pending(&self, scope: &Scope) -> Result<u64, DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok(0);
        };

        entity::prelude::Offer::find()
            .filter(condition)
            .filter(entity::offer::Column::Status.is_in(PENDING_STATUSES.map(|s| s.as_str())))
            .count(self.db)
            .await
    }

    /// Marks `sent` offers of all companies valid until before `today` as expired
    ///
    /// Returns the number of offers expired.
    pub async fn expire_sent_before(&self, today: NaiveDate) -> Result<u64, DbErr> {
        let result = entity::prelude::Offer::update_many()
            .col_expr(
                entity::offer::Column::Status,
                Expr::value(OfferStatus::Expired.as_str()),
            )
            .filter(entity::offer::Column::Status.eq(OfferStatus::Sent.as_str()))
            .filter(entity::offer::Column::ValidUntil.lt(today))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
