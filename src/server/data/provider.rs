use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::provider::{Provider, ProviderParams};

pub struct ProviderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProviderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ProviderParams) -> Result<Provider, DbErr> {
        let provider = entity::provider::ActiveModel {
            company_id: ActiveValue::Set(params.company_id),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            service_type: ActiveValue::Set(params.service_type),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Provider::from_entity(provider))
    }

    pub async fn find_by_id(&self, company_id: i32, id: i32) -> Result<Option<Provider>, DbErr> {
        let provider = entity::prelude::Provider::find_by_id(id)
            .filter(entity::provider::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await?;

        Ok(provider.map(Provider::from_entity))
    }

    /// Gets a page of providers ordered by name, optionally matching `search` against
    /// name and service type
    pub async fn get_paginated(
        &self,
        company_id: i32,
        search: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Provider>, u64), DbErr> {
        let mut query = entity::prelude::Provider::find()
            .filter(entity::provider::Column::CompanyId.eq(company_id));

        if let Some(term) = search {
            query = query.filter(
                entity::provider::Column::Name
                    .contains(&term)
                    .or(entity::provider::Column::ServiceType.contains(&term)),
            );
        }

        let paginator = query
            .order_by_asc(entity::provider::Column::Name)
            .order_by_asc(entity::provider::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let providers = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Provider::from_entity)
            .collect();

        Ok((providers, total))
    }

    pub async fn get_all(&self, company_id: i32) -> Result<Vec<Provider>, DbErr> {
        let providers = entity::prelude::Provider::find()
            .filter(entity::provider::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::provider::Column::Name)
            .all(self.db)
            .await?;

        Ok(providers.into_iter().map(Provider::from_entity).collect())
    }

    pub async fn update(&self, id: i32, params: ProviderParams) -> Result<Option<Provider>, DbErr> {
        let Some(provider) = entity::prelude::Provider::find_by_id(id)
            .filter(entity::provider::Column::CompanyId.eq(params.company_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = provider.into_active_model();
        active.name = ActiveValue::Set(params.name);
        active.email = ActiveValue::Set(params.email);
        active.phone = ActiveValue::Set(params.phone);
        active.service_type = ActiveValue::Set(params.service_type);
        active.notes = ActiveValue::Set(params.notes);

        let provider = active.update(self.db).await?;

        Ok(Some(Provider::from_entity(provider)))
    }

    /// Deletes a provider; issues and offers referencing it keep their rows with the
    /// reference cleared
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Provider::delete_many()
            .filter(entity::provider::Column::Id.eq(id))
            .filter(entity::provider::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
