use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::owner::{Owner, OwnerParams};

pub struct OwnerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new owner
    pub async fn create(&self, params: OwnerParams) -> Result<Owner, DbErr> {
        let owner = entity::owner::ActiveModel {
            company_id: ActiveValue::Set(params.company_id),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            address: ActiveValue::Set(params.address),
            iban: ActiveValue::Set(params.iban),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Owner::from_entity(owner))
    }

    /// Finds an owner by id within a company
    pub async fn find_by_id(&self, company_id: i32, id: i32) -> Result<Option<Owner>, DbErr> {
        let owner = entity::prelude::Owner::find_by_id(id)
            .filter(entity::owner::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await?;

        Ok(owner.map(Owner::from_entity))
    }

    /// Gets a page of owners ordered by name, optionally matching `search` against
    /// name and email
    pub async fn get_paginated(
        &self,
        company_id: i32,
        search: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Owner>, u64), DbErr> {
        let mut query =
            entity::prelude::Owner::find().filter(entity::owner::Column::CompanyId.eq(company_id));

        if let Some(term) = search {
            query = query.filter(
                entity::owner::Column::Name
                    .contains(&term)
                    .or(entity::owner::Column::Email.contains(&term)),
            );
        }

        let paginator = query
            .order_by_asc(entity::owner::Column::Name)
            .order_by_asc(entity::owner::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let owners = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Owner::from_entity)
            .collect();

        Ok((owners, total))
    }

    /// Gets every owner of a company ordered by name
    pub async fn get_all(&self, company_id: i32) -> Result<Vec<Owner>, DbErr> {
        let owners = entity::prelude::Owner::find()
            .filter(entity::owner::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::owner::Column::Name)
            .all(self.db)
            .await?;

        Ok(owners.into_iter().map(Owner::from_entity).collect())
    }

    /// Updates an owner, returning `None` if it doesn't exist in the company
    pub async fn update(&self, id: i32, params: OwnerParams) -> Result<Option<Owner>, DbErr> {
        let Some(owner) = entity::prelude::Owner::find_by_id(id)
            .filter(entity::owner::Column::CompanyId.eq(params.company_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = owner.into_active_model();
        active.name = ActiveValue::Set(params.name);
        active.email = ActiveValue::Set(params.email);
        active.phone = ActiveValue::Set(params.phone);
        active.address = ActiveValue::Set(params.address);
        active.iban = ActiveValue::Set(params.iban);
        active.notes = ActiveValue::Set(params.notes);

        let owner = active.update(self.db).await?;

        Ok(Some(Owner::from_entity(owner)))
    }

    /// Deletes an owner, returning whether a row was removed
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Owner::delete_many()
            .filter(entity::owner::Column::Id.eq(id))
            .filter(entity::owner::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts the owners of a company
    pub async fn count(&self, company_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Owner::find()
            .filter(entity::owner::Column::CompanyId.eq(company_id))
            .count(self.db)
            .await
    }
}
