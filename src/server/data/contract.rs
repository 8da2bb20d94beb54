use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::contract::ContractStatus,
    server::{
        data::property::owner_property_ids,
        model::{
            contract::{Contract, ContractFilter, ContractParams},
            scope::{Scope, Visibility},
        },
    },
};

/// Restricts contracts to the caller's company and visibility.
fn scope_condition(scope: &Scope) -> Option<Condition> {
    let company = Condition::all().add(entity::contract::Column::CompanyId.eq(scope.company_id));

    match scope.visibility {
        Visibility::Company => Some(company),
        Visibility::Owner(owner_id) => Some(
            company.add(entity::contract::Column::PropertyId.in_subquery(owner_property_ids(owner_id))),
        ),
        Visibility::Tenant(tenant_id) => {
            Some(company.add(entity::contract::Column::TenantId.eq(tenant_id)))
        }
        Visibility::Provider(_) | Visibility::Nothing => None,
    }
}

fn collect(models: Vec<entity::contract::Model>) -> Result<Vec<Contract>, DbErr> {
    models.into_iter().map(Contract::from_entity).collect()
}

pub struct ContractRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContractRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ContractParams) -> Result<Contract, DbErr> {
        let contract = entity::contract::ActiveModel {
            company_id: ActiveValue::Set(params.company_id),
            property_id: ActiveValue::Set(params.property_id),
            tenant_id: ActiveValue::Set(params.tenant_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            monthly_rent_cents: ActiveValue::Set(params.monthly_rent_cents),
            deposit_cents: ActiveValue::Set(params.deposit_cents),
            payment_day: ActiveValue::Set(params.payment_day),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Contract::from_entity(contract)
    }

    /// Finds a contract visible under `scope`
    pub async fn find_by_id(&self, scope: &Scope, id: i32) -> Result<Option<Contract>, DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok(None);
        };

        entity::prelude::Contract::find_by_id(id)
            .filter(condition)
            .one(self.db)
            .await?
            .map(Contract::from_entity)
            .transpose()
    }

    /// Gets a page of contracts, newest start date first
    ///
    /// `search` matches the notes column.
    pub async fn get_paginated(
        &self,
        scope: &Scope,
        filter: ContractFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Contract>, u64), DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok((Vec::new(), 0));
        };

        let mut query = entity::prelude::Contract::find().filter(condition);

        if let Some(term) = filter.search {
            query = query.filter(entity::contract::Column::Notes.contains(&term));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::contract::Column::Status.eq(status.as_str()));
        }
        if let Some(property_id) = filter.property_id {
            query = query.filter(entity::contract::Column::PropertyId.eq(property_id));
        }
        if let Some(tenant_id) = filter.tenant_id {
            query = query.filter(entity::contract::Column::TenantId.eq(tenant_id));
        }

        let paginator = query
            .order_by_desc(entity::contract::Column::StartDate)
            .order_by_desc(entity::contract::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let contracts = collect(paginator.fetch_page(page).await?)?;

        Ok((contracts, total))
    }

    /// Gets every contract visible under `scope`
    pub async fn get_all(&self, scope: &Scope) -> Result<Vec<Contract>, DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok(Vec::new());
        };

        let contracts = entity::prelude::Contract::find()
            .filter(condition)
            .order_by_desc(entity::contract::Column::StartDate)
            .all(self.db)
            .await?;

        collect(contracts)
    }

    /// Gets every contract of a company that is not a draft, for financial reporting
    pub async fn get_in_force(&self, company_id: i32) -> Result<Vec<Contract>, DbErr> {
        let contracts = entity::prelude::Contract::find()
            .filter(entity::contract::Column::CompanyId.eq(company_id))
            .filter(entity::contract::Column::Status.ne(ContractStatus::Draft.as_str()))
            .all(self.db)
            .await?;

        collect(contracts)
    }

    /// Finds the active contract of a property other than `exclude_id`
    pub async fn find_active_for_property(
        &self,
        property_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<Option<Contract>, DbErr> {
        let mut query = entity::prelude::Contract::find()
            .filter(entity::contract::Column::PropertyId.eq(property_id))
            .filter(entity::contract::Column::Status.eq(ContractStatus::Active.as_str()));

        if let Some(id) = exclude_id {
            query = query.filter(entity::contract::Column::Id.ne(id));
        }

        query
            .one(self.db)
            .await?
            .map(Contract::from_entity)
            .transpose()
    }

    /// Whether a tenant holds an active contract on a property
    pub async fn tenant_has_active_contract(
        &self,
        tenant_id: i32,
        property_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Contract::find()
            .filter(entity::contract::Column::TenantId.eq(tenant_id))
            .filter(entity::contract::Column::PropertyId.eq(property_id))
            .filter(entity::contract::Column::Status.eq(ContractStatus::Active.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn update(
        &self,
        id: i32,
        params: ContractParams,
    ) -> Result<Option<Contract>, DbErr> {
        let Some(contract) = entity::prelude::Contract::find_by_id(id)
            .filter(entity::contract::Column::CompanyId.eq(params.company_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = contract.into_active_model();
        active.property_id = ActiveValue::Set(params.property_id);
        active.tenant_id = ActiveValue::Set(params.tenant_id);
        active.start_date = ActiveValue::Set(params.start_date);
        active.end_date = ActiveValue::Set(params.end_date);
        active.monthly_rent_cents = ActiveValue::Set(params.monthly_rent_cents);
        active.deposit_cents = ActiveValue::Set(params.deposit_cents);
        active.payment_day = ActiveValue::Set(params.payment_day);
        active.status = ActiveValue::Set(params.status.as_str().to_string());
        active.notes = ActiveValue::Set(params.notes);

        let contract = active.update(self.db).await?;

        Contract::from_entity(contract).map(Some)
    }

    /// Sets the status and end date of a contract
    pub async fn set_status(
        &self,
        company_id: i32,
        id: i32,
        status: ContractStatus,
        end_date: Option<NaiveDate>,
    ) -> Result<Option<Contract>, DbErr> {
        let Some(contract) = entity::prelude::Contract::find_by_id(id)
            .filter(entity::contract::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = contract.into_active_model();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.end_date = ActiveValue::Set(end_date);

        let contract = active.update(self.db).await?;

        Contract::from_entity(contract).map(Some)
    }

    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Contract::delete_many()
            .filter(entity::contract::Column::Id.eq(id))
            .filter(entity::contract::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts contracts referencing a property
    pub async fn count_by_property(&self, property_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Contract::find()
            .filter(entity::contract::Column::PropertyId.eq(property_id))
            .count(self.db)
            .await
    }

    /// Counts contracts referencing a tenant
    pub async fn count_by_tenant(&self, tenant_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Contract::find()
            .filter(entity::contract::Column::TenantId.eq(tenant_id))
            .count(self.db)
            .await
    }

    /// Counts active contracts, optionally only those ending between the two dates
    /// inclusive
    pub async fn count_active(
        &self,
        scope: &Scope,
        ending_between: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<u64, DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok(0);
        };

        let mut query = entity::prelude::Contract::find()
            .filter(condition)
            .filter(entity::contract::Column::Status.eq(ContractStatus::Active.as_str()));

        if let Some((from, to)) = ending_between {
            query = query
                .filter(entity::contract::Column::EndDate.gte(from))
                .filter(entity::contract::Column::EndDate.lte(to));
        }

        query.count(self.db).await
    }

    /// Gets active contracts of all companies whose end date lies before `today`
    pub async fn get_active_ended_before(&self, today: NaiveDate) -> Result<Vec<Contract>, DbErr> {
        let contracts = entity::prelude::Contract::find()
            .filter(entity::contract::Column::Status.eq(ContractStatus::Active.as_str()))
            .filter(entity::contract::Column::EndDate.lt(today))
            .all(self.db)
            .await?;

        collect(contracts)
    }

    /// Gets active contracts of all companies ending between `from` and `to` inclusive
    pub async fn get_active_ending_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Contract>, DbErr> {
        let contracts = entity::prelude::Contract::find()
            .filter(entity::contract::Column::Status.eq(ContractStatus::Active.as_str()))
            .filter(entity::contract::Column::EndDate.between(from, to))
            .all(self.db)
            .await?;

        collect(contracts)
    }

    /// Gets active contracts of all companies with the given payment day
    pub async fn get_active_by_payment_day(&self, day: i32) -> Result<Vec<Contract>, DbErr> {
        let contracts = entity::prelude::Contract::find()
            .filter(entity::contract::Column::Status.eq(ContractStatus::Active.as_str()))
            .filter(entity::contract::Column::PaymentDay.eq(day))
            .all(self.db)
            .await?;

        collect(contracts)
    }

    /// Marks the given active contracts as expired, returning the number of rows changed
    pub async fn expire(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Contract::update_many()
            .col_expr(
                entity::contract::Column::Status,
                Expr::value(ContractStatus::Expired.as_str()),
            )
            .filter(entity::contract::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::contract::Column::Status.eq(ContractStatus::Active.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
