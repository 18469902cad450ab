use chrono::Utc;
use diesel::prelude::*;
use pathway_shared::Inquiry;
use thiserror::Error;

use crate::{
    models::inquiry_models::{InquiryRow, NewInquiry, StoredInquiry},
    schema::inquiries,
    DbPool,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("created_at out of range: {0}")]
    InvalidTimestamp(i64),
}

pub struct InquiryRepository {
    pool: DbPool,
}

impl InquiryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(&self, inquiry: &Inquiry) -> Result<StoredInquiry, StoreError> {
        let mut conn = self.pool.get()?;
        let new_inquiry = NewInquiry::from_inquiry(inquiry, Utc::now().timestamp())?;
        diesel::insert_into(inquiries::table)
            .values(&new_inquiry)
            .execute(&mut conn)?;
        let row = inquiries::table
            .find(new_inquiry.id.as_str())
            .select(InquiryRow::as_select())
            .first::<InquiryRow>(&mut conn)?;
        row.try_into()
    }

    /// Newest first.
    pub fn list(&self, unread_only: bool) -> Result<Vec<StoredInquiry>, StoreError> {
        let mut conn = self.pool.get()?;
        let mut query = inquiries::table
            .select(InquiryRow::as_select())
            .order(inquiries::created_at.desc())
            .into_boxed();
        if unread_only {
            query = query.filter(inquiries::is_read.eq(false));
        }
        let rows: Vec<InquiryRow> = query.load(&mut conn)?;
        rows.into_iter().map(StoredInquiry::try_from).collect()
    }

    pub fn find(&self, id: &str) -> Result<Option<StoredInquiry>, StoreError> {
        let mut conn = self.pool.get()?;
        let row = inquiries::table
            .find(id)
            .select(InquiryRow::as_select())
            .first::<InquiryRow>(&mut conn)
            .optional()?;
        row.map(StoredInquiry::try_from).transpose()
    }

    /// Returns false when no inquiry has that id.
    pub fn mark_read(&self, id: &str) -> Result<bool, StoreError> {
        let mut conn = self.pool.get()?;
        let updated = diesel::update(inquiries::table.find(id))
            .set(inquiries::is_read.eq(true))
            .execute(&mut conn)?;
        Ok(updated > 0)
    }

    pub fn unread_count(&self) -> Result<i64, StoreError> {
        let mut conn = self.pool.get()?;
        let count: i64 = inquiries::table
            .filter(inquiries::is_read.eq(false))
            .count()
            .get_result(&mut conn)?;
        Ok(count)
    }
}
