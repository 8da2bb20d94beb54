//! Provider offers and their decision flow.
//!
//! An offer starts as `draft`, is `sent` to the owner, and is then `accepted` or
//! `rejected`. Sent offers whose validity ran out are expired by the workflow run.
//! Accepted offers count as expenses in the financial report.

use sea_orm::DatabaseConnection;

use crate::{
    model::{offer::OfferStatus, user::UserRole},
    server::{
        data::{
            issue::IssueRepository, offer::OfferRepository, property::PropertyRepository,
            provider::ProviderRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            offer::{Offer, OfferFilter, OfferParams},
            scope::Scope,
            user::User,
            Paginated,
        },
    },
};

pub struct OfferService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OfferService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        scope: &Scope,
        filter: OfferFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Offer>, AppError> {
        let (offers, total) = OfferRepository::new(self.db)
            .get_paginated(scope, filter, page, per_page)
            .await?;

        Ok(Paginated::new(offers, total, page, per_page))
    }

    pub async fn get_by_id(&self, scope: &Scope, id: i32) -> Result<Offer, AppError> {
        OfferRepository::new(self.db)
            .find_by_id(scope, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates a draft offer on behalf of `actor`.
    ///
    /// Providers can only quote for issues assigned to them; the offer is always
    /// recorded under their own provider profile.
    ///
    /// # Returns
    /// - `Ok(Offer)` - The created draft offer
    /// - `Err(AppError::BadRequest)` - Missing target or a reference outside the company
    /// - `Err(AppError::AuthErr(AccessDenied))` - Provider quoting for an issue that is
    ///   not theirs, or a role that cannot create offers
    pub async fn create(&self, actor: &User, mut params: OfferParams) -> Result<Offer, AppError> {
        params.company_id = actor.company_id;

        match actor.role {
            UserRole::Admin | UserRole::Manager => {}
            UserRole::Provider => {
                let (Some(provider_id), Some(issue_id)) = (actor.provider_id, params.issue_id)
                else {
                    return Err(AuthError::AccessDenied(
                        actor.id,
                        "provider offers must reference an assigned issue".to_string(),
                    )
                    .into());
                };

                let scope = Scope::for_user(actor);
                let assigned = IssueRepository::new(self.db)
                    .find_by_id(&scope, issue_id)
                    .await?;
                if assigned.is_none() {
                    return Err(AuthError::AccessDenied(
                        actor.id,
                        format!("issue {} is not assigned to provider {}", issue_id, provider_id),
                    )
                    .into());
                }

                params.provider_id = Some(provider_id);
            }
            role => {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    format!("{} user attempted to create an offer", role),
                )
                .into())
            }
        }

        let params = self.resolve_references(params).await?;

        Ok(OfferRepository::new(self.db).create(params).await?)
    }

    /// Updates an offer that has not been decided yet
    pub async fn update(&self, id: i32, params: OfferParams) -> Result<Offer, AppError> {
        let offer = self
            .get_by_id(&Scope::company(params.company_id), id)
            .await?;
        if !offer.status.is_pending() {
            return Err(AppError::BadRequest(format!(
                "Offer {} is {} and can no longer be edited",
                id, offer.status
            )));
        }

        let params = self.resolve_references(params).await?;

        OfferRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Marks a draft offer as sent
    pub async fn send(&self, company_id: i32, id: i32) -> Result<Offer, AppError> {
        self.transition(company_id, id, &[OfferStatus::Draft], OfferStatus::Sent)
            .await
    }

    pub async fn accept(&self, company_id: i32, id: i32) -> Result<Offer, AppError> {
        self.transition(
            company_id,
            id,
            &[OfferStatus::Draft, OfferStatus::Sent],
            OfferStatus::Accepted,
        )
        .await
    }

    pub async fn reject(&self, company_id: i32, id: i32) -> Result<Offer, AppError> {
        self.transition(
            company_id,
            id,
            &[OfferStatus::Draft, OfferStatus::Sent],
            OfferStatus::Rejected,
        )
        .await
    }

    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        if !OfferRepository::new(self.db).delete(company_id, id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn transition(
        &self,
        company_id: i32,
        id: i32,
        from: &[OfferStatus],
        to: OfferStatus,
    ) -> Result<Offer, AppError> {
        let offer = self.get_by_id(&Scope::company(company_id), id).await?;

        if !from.contains(&offer.status) {
            return Err(AppError::BadRequest(format!(
                "Offer {} is {} and cannot be marked {}",
                id, offer.status, to
            )));
        }

        OfferRepository::new(self.db)
            .set_status(company_id, id, to)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Checks that every reference belongs to the company and fills in the
    /// property from the issue when only the issue is given.
    async fn resolve_references(&self, mut params: OfferParams) -> Result<OfferParams, AppError> {
        let scope = Scope::company(params.company_id);

        if let Some(issue_id) = params.issue_id {
            let Some(issue) = IssueRepository::new(self.db)
                .find_by_id(&scope, issue_id)
                .await?
            else {
                return Err(AppError::BadRequest(format!(
                    "Issue {} does not exist",
                    issue_id
                )));
            };

            match params.property_id {
                None => params.property_id = Some(issue.property_id),
                Some(property_id) if property_id != issue.property_id => {
                    return Err(AppError::BadRequest(format!(
                        "Issue {} belongs to another property",
                        issue_id
                    )));
                }
                Some(_) => {}
            }
        }

        let Some(property_id) = params.property_id else {
            return Err(AppError::BadRequest(
                "An offer needs an issue or a property".to_string(),
            ));
        };

        if PropertyRepository::new(self.db)
            .find_by_id(&scope, property_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Property {} does not exist",
                property_id
            )));
        }

        if let Some(provider_id) = params.provider_id {
            if ProviderRepository::new(self.db)
                .find_by_id(params.company_id, provider_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Provider {} does not exist",
                    provider_id
                )));
            }
        }

        Ok(params)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Offer {} not found", id))
}
