//! Fixed-size page fetching for listings.
//!
//! One extra row is requested so `has_more` needs no separate count query.

use common::types::{Page, PAGE_SIZE};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QuerySelect, Select};

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u64,
}

impl Pagination {
    /// Missing or zero pages become page 1.
    pub fn from_query(page: Option<u64>) -> Self { Self { page: page.filter(|p| *p > 0).unwrap_or(1) } }

    pub fn offset(self) -> u64 { (self.page - 1) * PAGE_SIZE }

    pub async fn fetch<E, C>(self, select: Select<E>, conn: &C) -> Result<Page<E::Model>, DbErr>
    where
        E: EntityTrait,
        C: ConnectionTrait,
    {
        let mut items = select.offset(self.offset()).limit(PAGE_SIZE + 1).all(conn).await?;
        let has_more = items.len() as u64 > PAGE_SIZE;
        items.truncate(PAGE_SIZE as usize);
        Ok(Page { items, page: self.page, has_more })
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1 } }
}

#[cfg(test)]
mod tests {
    use super::Pagination;
    use common::types::PAGE_SIZE;

    #[test]
    fn zero_and_missing_pages_start_at_one() {
        assert_eq!(Pagination::from_query(None).page, 1);
        assert_eq!(Pagination::from_query(Some(0)).page, 1);
        assert_eq!(Pagination::from_query(Some(0)).offset(), 0);
    }

    #[test]
    fn offset_advances_by_page_size() {
        assert_eq!(Pagination::from_query(Some(3)).offset(), 2 * PAGE_SIZE);
    }

    #[test]
    fn default_is_first_page() {
        assert_eq!(Pagination::default(), Pagination { page: 1 });
    }
}
