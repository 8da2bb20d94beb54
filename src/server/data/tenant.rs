use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::tenant::{Tenant, TenantParams};

pub struct TenantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TenantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: TenantParams) -> Result<Tenant, DbErr> {
        let tenant = entity::tenant::ActiveModel {
            company_id: ActiveValue::Set(params.company_id),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Tenant::from_entity(tenant))
    }

    pub async fn find_by_id(&self, company_id: i32, id: i32) -> Result<Option<Tenant>, DbErr> {
        let tenant = entity::prelude::Tenant::find_by_id(id)
            .filter(entity::tenant::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await?;

        Ok(tenant.map(Tenant::from_entity))
    }

    /// Gets a page of tenants ordered by name, optionally matching `search` against
    /// name and email
    pub async fn get_paginated(
        &self,
        company_id: i32,
        search: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Tenant>, u64), DbErr> {
        let mut query = entity::prelude::Tenant::find()
            .filter(entity::tenant::Column::CompanyId.eq(company_id));

        if let Some(term) = search {
            query = query.filter(
                entity::tenant::Column::Name
                    .contains(&term)
                    .or(entity::tenant::Column::Email.contains(&term)),
            );
        }

        let paginator = query
            .order_by_asc(entity::tenant::Column::Name)
            .order_by_asc(entity::tenant::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let tenants = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Tenant::from_entity)
            .collect();

        Ok((tenants, total))
    }

    pub async fn get_all(&self, company_id: i32) -> Result<Vec<Tenant>, DbErr> {
        let tenants = entity::prelude::Tenant::find()
            .filter(entity::tenant::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::tenant::Column::Name)
            .all(self.db)
            .await?;

        Ok(tenants.into_iter().map(Tenant::from_entity).collect())
    }

    pub async fn update(&self, id: i32, params: TenantParams) -> Result<Option<Tenant>, DbErr> {
        let Some(tenant) = entity::prelude::Tenant::find_by_id(id)
            .filter(entity::tenant::Column::CompanyId.eq(params.company_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = tenant.into_active_model();
        active.name = ActiveValue::Set(params.name);
        active.email = ActiveValue::Set(params.email);
        active.phone = ActiveValue::Set(params.phone);
        active.notes = ActiveValue::Set(params.notes);

        let tenant = active.update(self.db).await?;

        Ok(Some(Tenant::from_entity(tenant)))
    }

    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Tenant::delete_many()
            .filter(entity::tenant::Column::Id.eq(id))
            .filter(entity::tenant::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self, company_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Tenant::find()
            .filter(entity::tenant::Column::CompanyId.eq(company_id))
            .count(self.db)
            .await
    }
}
