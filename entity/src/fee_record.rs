use chrono::{Datelike, NaiveDate};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fee_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub fee_month: FeeMonth,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub fee_paid: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub other_fee: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub paid_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub total: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub extra_fee: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub due_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub total_dues: Decimal,
    pub status: FeeStatus,
    #[sea_orm(unique)]
    pub receipt_no: i64,
    #[sea_orm(unique)]
    pub sr_no: i64,
    pub amount_in_words: String,
    pub payment_mode: Option<String>,
    pub payment_reference: Option<String>,
    pub bank_name: Option<String>,
    pub remark: Option<String>,
    pub received_by: Option<String>,
    pub created_at: DateTimeUtc,
}

/// Calendar month a fee payment settles, stored by name.
///
/// The fee year runs January through December; carry-forward credit only
/// ever reaches one month ahead, so January never has a carry-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum FeeMonth {
    #[sea_orm(string_value = "January")]
    January,
    #[sea_orm(string_value = "February")]
    February,
    #[sea_orm(string_value = "March")]
    March,
    #[sea_orm(string_value = "April")]
    April,
    #[sea_orm(string_value = "May")]
    May,
    #[sea_orm(string_value = "June")]
    June,
    #[sea_orm(string_value = "July")]
    July,
    #[sea_orm(string_value = "August")]
    August,
    #[sea_orm(string_value = "September")]
    September,
    #[sea_orm(string_value = "October")]
    October,
    #[sea_orm(string_value = "November")]
    November,
    #[sea_orm(string_value = "December")]
    December,
}

impl FeeMonth {
    /// Month preceding this one within the fee year, `None` for January.
    pub fn previous(self) -> Option<FeeMonth> {
        use FeeMonth::*;
        match self {
            January => None,
            February => Some(January),
            March => Some(February),
            April => Some(March),
            May => Some(April),
            June => Some(May),
            July => Some(June),
            August => Some(July),
            September => Some(August),
            October => Some(September),
            November => Some(October),
            December => Some(November),
        }
    }

    /// Fee month a calendar date falls into.
    pub fn for_date(date: NaiveDate) -> FeeMonth {
        use FeeMonth::*;
        match date.month() {
            1 => January,
            2 => February,
            3 => March,
            4 => April,
            5 => May,
            6 => June,
            7 => July,
            8 => August,
            9 => September,
            10 => October,
            11 => November,
            _ => December,
        }
    }

    /// Parses a month from its stored name, case-sensitively.
    pub fn from_name(name: &str) -> Option<FeeMonth> {
        use FeeMonth::*;
        match name {
            "January" => Some(January),
            "February" => Some(February),
            "March" => Some(March),
            "April" => Some(April),
            "May" => Some(May),
            "June" => Some(June),
            "July" => Some(July),
            "August" => Some(August),
            "September" => Some(September),
            "October" => Some(October),
            "November" => Some(November),
            "December" => Some(December),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        use FeeMonth::*;
        match self {
            January => "January",
            February => "February",
            March => "March",
            April => "April",
            May => "May",
            June => "June",
            July => "July",
            August => "August",
            September => "September",
            October => "October",
            November => "November",
            December => "December",
        }
    }
}

/// Settlement state of a fee record, derived from `total_dues`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum FeeStatus {
    #[sea_orm(string_value = "Due")]
    Due,
    #[sea_orm(string_value = "Paid")]
    Paid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(has_many = "super::fee_notice::Entity")]
    FeeNotice,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::fee_notice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeeNotice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
