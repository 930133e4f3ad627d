use crate::model::sale::SaleWithItem;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynSaleQueryRepository = Arc<dyn SaleQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SaleQueryRepositoryTrait {
    async fn find_sold_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<SaleWithItem>, RepositoryError>;
}
