use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
};

use crate::server::model::company::{Company, CreateCompanyParams, UpdateCompanyParams};

/// Repository for companies, the top-level tenant rows.
///
/// Generic over the connection so company creation can join the transaction that
/// also inserts the first admin.
pub struct CompanyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompanyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a company with no management fee
    pub async fn create(&self, params: CreateCompanyParams) -> Result<Company, DbErr> {
        let company = entity::company::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            management_fee_bps: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Company::from_entity(company))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Company>, DbErr> {
        let company = entity::prelude::Company::find_by_id(id).one(self.db).await?;

        Ok(company.map(Company::from_entity))
    }

    /// Whether a company already uses `slug`
    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Company::find()
            .filter(entity::company::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every company, used by the workflow run
    pub async fn get_all(&self) -> Result<Vec<Company>, DbErr> {
        let companies = entity::prelude::Company::find().all(self.db).await?;

        Ok(companies.into_iter().map(Company::from_entity).collect())
    }

    pub async fn update(&self, params: UpdateCompanyParams) -> Result<Option<Company>, DbErr> {
        let Some(company) = entity::prelude::Company::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = company.into_active_model();
        active.name = ActiveValue::Set(params.name);
        active.email = ActiveValue::Set(params.email);
        active.phone = ActiveValue::Set(params.phone);
        active.address = ActiveValue::Set(params.address);
        active.management_fee_bps = ActiveValue::Set(params.management_fee_bps);

        let company = active.update(self.db).await?;

        Ok(Some(Company::from_entity(company)))
    }
}
