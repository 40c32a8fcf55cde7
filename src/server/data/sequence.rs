use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    SqlErr,
};

/// Named global counters backing receipt and serial number assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceName {
    ReceiptNo,
    SrNo,
}

impl SequenceName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceName::ReceiptNo => "receipt_no",
            SequenceName::SrNo => "sr_no",
        }
    }
}

/// Repository for atomically assigned sequence numbers.
///
/// Each counter lives in its own row. Assignment increments the row before
/// reading it back, so on databases that lock rows on write (SQLite locks
/// the whole database) two concurrent callers can never observe the same
/// value. Callers that need the increment to hold the lock for longer than
/// one statement run the repository on a transaction.
pub struct SequenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SequenceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Assigns the next value of a sequence
    ///
    /// Seeds the counter at 1 on first use. When two callers race to seed
    /// the same counter, the loser of the insert falls back to a plain
    /// increment, so both still receive distinct values.
    ///
    /// # Arguments
    /// - `name`: Which counter to advance
    ///
    /// # Returns
    /// - `Ok(i64)`: The assigned value, unique to this caller
    /// - `Err(DbErr)`: Database error
    pub async fn next_value(&self, name: SequenceName) -> Result<i64, DbErr> {
        let updated = self.increment(name).await?;

        if updated == 0 {
            let seeded = entity::sequence::ActiveModel {
                name: ActiveValue::Set(name.as_str().to_string()),
                value: ActiveValue::Set(1),
            }
            .insert(self.db)
            .await;

            match seeded {
                Ok(row) => return Ok(row.value),
                Err(err) => {
                    // Lost the seeding race; the row exists now, increment it.
                    if !matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                        return Err(err);
                    }
                    self.increment(name).await?;
                }
            }
        }

        let row = entity::prelude::Sequence::find_by_id(name.as_str())
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Sequence {} not found",
                name.as_str()
            )))?;

        Ok(row.value)
    }

    /// Raises a sequence so its value is at least `floor`
    ///
    /// Used to resynchronize a counter with numbers already present in the
    /// table, e.g. rows imported from an older system. Does nothing when the
    /// counter is already at or past the floor.
    ///
    /// # Arguments
    /// - `name`: Which counter to raise
    /// - `floor`: Lowest acceptable counter value
    ///
    /// # Returns
    /// - `Ok(())`: The counter is now at least `floor`
    /// - `Err(DbErr)`: Database error
    pub async fn raise_to(&self, name: SequenceName, floor: i64) -> Result<(), DbErr> {
        let updated = entity::prelude::Sequence::update_many()
            .col_expr(entity::sequence::Column::Value, Expr::value(floor))
            .filter(entity::sequence::Column::Name.eq(name.as_str()))
            .filter(entity::sequence::Column::Value.lt(floor))
            .exec(self.db)
            .await?;

        if updated.rows_affected == 0 {
            let seeded = entity::sequence::ActiveModel {
                name: ActiveValue::Set(name.as_str().to_string()),
                value: ActiveValue::Set(floor),
            }
            .insert(self.db)
            .await;

            if let Err(err) = seeded {
                // The counter already sits at or past the floor.
                if !matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    return Err(err);
                }
            }
        }

        Ok(())
    }

    async fn increment(&self, name: SequenceName) -> Result<u64, DbErr> {
        let result = entity::prelude::Sequence::update_many()
            .col_expr(
                entity::sequence::Column::Value,
                Expr::col(entity::sequence::Column::Value).add(1),
            )
            .filter(entity::sequence::Column::Name.eq(name.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
