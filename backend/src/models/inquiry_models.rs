use chrono::{TimeZone, Utc};
use diesel::prelude::*;
use pathway_shared::Inquiry;
use serde::Serialize;
use uuid::Uuid;

use crate::{repositories::inquiry_repository::StoreError, schema::inquiries};

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = inquiries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InquiryRow {
    pub id: String, // uuid v4
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub education_level: String,
    pub interested_in: String, // json array of interest codes
    pub message: Option<String>,
    pub created_at: i64, // epoch seconds utc
    pub is_read: bool,
}

#[derive(Insertable)]
#[diesel(table_name = inquiries)]
pub struct NewInquiry {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub education_level: String,
    pub interested_in: String,
    pub message: Option<String>,
    pub created_at: i64,
    pub is_read: bool,
}

impl NewInquiry {
    pub fn from_inquiry(inquiry: &Inquiry, created_at: i64) -> Result<Self, serde_json::Error> {
        Ok(NewInquiry {
            id: Uuid::new_v4().to_string(),
            first_name: inquiry.first_name.clone(),
            last_name: inquiry.last_name.clone(),
            email: inquiry.email.clone(),
            phone: inquiry.phone.clone(),
            education_level: inquiry.education_level.code().to_string(),
            interested_in: serde_json::to_string(&inquiry.interested_in)?,
            message: inquiry.message.clone(),
            created_at,
            is_read: false,
        })
    }
}

/// An inquiry as the admin routes return it.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredInquiry {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub education_level: String,
    pub interested_in: Vec<String>,
    pub message: Option<String>,
    pub created_at: String, // rfc3339
    pub is_read: bool,
}

impl TryFrom<InquiryRow> for StoredInquiry {
    type Error = StoreError;

    fn try_from(row: InquiryRow) -> Result<Self, Self::Error> {
        let created_at = Utc
            .timestamp_opt(row.created_at, 0)
            .single()
            .ok_or(StoreError::InvalidTimestamp(row.created_at))?
            .to_rfc3339();
        Ok(StoredInquiry {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            education_level: row.education_level,
            interested_in: serde_json::from_str(&row.interested_in)?,
            message: row.message,
            created_at,
            is_read: row.is_read,
        })
    }
}
