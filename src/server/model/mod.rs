//! Domain models and operation parameters used on the server.
//!
//! Repositories convert SeaORM entity models into the domain models defined here so
//! entity types never leak into services or controllers. Each model offers
//! `from_entity` for the data layer boundary and `into_dto` for the API boundary;
//! `*Params` types carry validated input from controllers down to repositories.

pub mod company;
pub mod contract;
pub mod export;
pub mod file;
pub mod issue;
pub mod offer;
pub mod owner;
pub mod property;
pub mod provider;
pub mod rate_limit;
pub mod report;
pub mod scope;
pub mod tenant;
pub mod user;
pub mod workflow;

/// A page of domain models plus the pagination metadata of the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    /// Converts every item to its DTO.
    pub fn into_dto<D>(self, convert: impl FnMut(T) -> D) -> crate::model::api::PaginatedDto<D> {
        crate::model::api::PaginatedDto {
            items: self.items.into_iter().map(convert).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_total_pages() {
        assert_eq!(Paginated::<i32>::new(vec![], 0, 0, 10).total_pages, 0);
        assert_eq!(Paginated::<i32>::new(vec![], 10, 0, 10).total_pages, 1);
        assert_eq!(Paginated::<i32>::new(vec![], 11, 0, 10).total_pages, 2);
    }
}
