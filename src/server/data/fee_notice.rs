use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct FeeNoticeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeeNoticeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a dispatched-notice audit row
    ///
    /// The month list is stored JSON-encoded in a text column.
    ///
    /// # Arguments
    /// - `fee_record_id`: Fee record the notice refers to, when one exists
    /// - `message`: Message body that was delivered
    /// - `remark`: Free-form remark
    /// - `due_amount`: Outstanding amount the notice reported
    /// - `months`: Names of the months the notice covered
    ///
    /// # Returns
    /// - `Ok(Model)`: The created notice
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        fee_record_id: Option<i32>,
        message: String,
        remark: Option<String>,
        due_amount: Decimal,
        months: Vec<String>,
    ) -> Result<entity::fee_notice::Model, DbErr> {
        let months = serde_json::to_string(&months)
            .map_err(|err| DbErr::Custom(format!("Failed to encode notice months: {}", err)))?;

        entity::fee_notice::ActiveModel {
            fee_record_id: ActiveValue::Set(fee_record_id),
            message: ActiveValue::Set(message),
            remark: ActiveValue::Set(remark),
            due_amount: ActiveValue::Set(due_amount),
            months: ActiveValue::Set(months),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all notices sent against a fee record, oldest first
    ///
    /// # Returns
    /// - `Ok(notices)`: Vector of notices for the record
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_record(
        &self,
        fee_record_id: i32,
    ) -> Result<Vec<entity::fee_notice::Model>, DbErr> {
        entity::prelude::FeeNotice::find()
            .filter(entity::fee_notice::Column::FeeRecordId.eq(fee_record_id))
            .order_by_asc(entity::fee_notice::Column::CreatedAt)
            .order_by_asc(entity::fee_notice::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the most recently dispatched notices
    ///
    /// # Arguments
    /// - `limit`: Maximum number of notices to return
    ///
    /// # Returns
    /// - `Ok(notices)`: Vector of notices, newest first
    /// - `Err(DbErr)`: Database error
    pub async fn list_recent(&self, limit: u64) -> Result<Vec<entity::fee_notice::Model>, DbErr> {
        entity::prelude::FeeNotice::find()
            .order_by_desc(entity::fee_notice::Column::CreatedAt)
            .order_by_desc(entity::fee_notice::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
