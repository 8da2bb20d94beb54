use chrono::Utc;
use sea_orm::{
    sea_query::{Query, SelectStatement},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    property::{Property, PropertyFilter, PropertyParams},
    scope::{Scope, Visibility},
};

/// Subquery selecting the ids of all properties of an owner.
pub fn owner_property_ids(owner_id: i32) -> SelectStatement {
    Query::select()
        .column(entity::property::Column::Id)
        .from(entity::property::Entity)
        .and_where(entity::property::Column::OwnerId.eq(owner_id))
        .to_owned()
}

/// Subquery selecting the ids of properties a tenant holds a contract on.
fn tenant_property_ids(tenant_id: i32) -> SelectStatement {
    Query::select()
        .column(entity::contract::Column::PropertyId)
        .from(entity::contract::Entity)
        .and_where(entity::contract::Column::TenantId.eq(tenant_id))
        .to_owned()
}

/// Restricts properties to the caller's company and visibility.
///
/// Returns `None` when the scope cannot see any property.
fn scope_condition(scope: &Scope) -> Option<Condition> {
    let company = Condition::all().add(entity::property::Column::CompanyId.eq(scope.company_id));

    match scope.visibility {
        Visibility::Company => Some(company),
        Visibility::Owner(owner_id) => {
            Some(company.add(entity::property::Column::OwnerId.eq(owner_id)))
        }
        Visibility::Tenant(tenant_id) => Some(
            company.add(entity::property::Column::Id.in_subquery(tenant_property_ids(tenant_id))),
        ),
        Visibility::Provider(_) | Visibility::Nothing => None,
    }
}

pub struct PropertyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: PropertyParams) -> Result<Property, DbErr> {
        let property = entity::property::ActiveModel {
            company_id: ActiveValue::Set(params.company_id),
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            city: ActiveValue::Set(params.city),
            postal_code: ActiveValue::Set(params.postal_code),
            property_type: ActiveValue::Set(params.property_type),
            monthly_rent_cents: ActiveValue::Set(params.monthly_rent_cents),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Property::from_entity(property))
    }

    /// Finds a property visible under `scope`
    pub async fn find_by_id(&self, scope: &Scope, id: i32) -> Result<Option<Property>, DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok(None);
        };

        let property = entity::prelude::Property::find_by_id(id)
            .filter(condition)
            .one(self.db)
            .await?;

        Ok(property.map(Property::from_entity))
    }

    /// Gets a page of properties ordered by name
    ///
    /// `search` matches name, address and city.
    pub async fn get_paginated(
        &self,
        scope: &Scope,
        filter: PropertyFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Property>, u64), DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok((Vec::new(), 0));
        };

        let mut query = entity::prelude::Property::find().filter(condition);

        if let Some(term) = filter.search {
            query = query.filter(
                Condition::any()
                    .add(entity::property::Column::Name.contains(&term))
                    .add(entity::property::Column::Address.contains(&term))
                    .add(entity::property::Column::City.contains(&term)),
            );
        }
        if let Some(owner_id) = filter.owner_id {
            query = query.filter(entity::property::Column::OwnerId.eq(owner_id));
        }
        if let Some(city) = filter.city {
            query = query.filter(entity::property::Column::City.eq(city));
        }

        let paginator = query
            .order_by_asc(entity::property::Column::Name)
            .order_by_asc(entity::property::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let properties = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Property::from_entity)
            .collect();

        Ok((properties, total))
    }

    /// Gets every property visible under `scope`, ordered by name
    pub async fn get_all(&self, scope: &Scope) -> Result<Vec<Property>, DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok(Vec::new());
        };

        let properties = entity::prelude::Property::find()
            .filter(condition)
            .order_by_asc(entity::property::Column::Name)
            .all(self.db)
            .await?;

        Ok(properties.into_iter().map(Property::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: PropertyParams,
    ) -> Result<Option<Property>, DbErr> {
        let Some(property) = entity::prelude::Property::find_by_id(id)
            .filter(entity::property::Column::CompanyId.eq(params.company_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = property.into_active_model();
        active.owner_id = ActiveValue::Set(params.owner_id);
        active.name = ActiveValue::Set(params.name);
        active.address = ActiveValue::Set(params.address);
        active.city = ActiveValue::Set(params.city);
        active.postal_code = ActiveValue::Set(params.postal_code);
        active.property_type = ActiveValue::Set(params.property_type);
        active.monthly_rent_cents = ActiveValue::Set(params.monthly_rent_cents);
        active.notes = ActiveValue::Set(params.notes);

        let property = active.update(self.db).await?;

        Ok(Some(Property::from_entity(property)))
    }

    /// Deletes a property together with its issues
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Property::delete_many()
            .filter(entity::property::Column::Id.eq(id))
            .filter(entity::property::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts the properties of an owner
    pub async fn count_by_owner(&self, owner_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Property::find()
            .filter(entity::property::Column::OwnerId.eq(owner_id))
            .count(self.db)
            .await
    }

    /// Counts the properties visible under `scope`
    pub async fn count(&self, scope: &Scope) -> Result<u64, DbErr> {
        let Some(condition) = scope_condition(scope) else {
            return Ok(0);
        };

        entity::prelude::Property::find()
            .filter(condition)
            .count(self.db)
            .await
    }
}
