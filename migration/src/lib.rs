pub use sea_orm_migration::prelude::*;

mod m20260114_000001_create_school_class_table;
mod m20260114_000002_create_student_table;
mod m20260115_000003_create_fee_record_table;
mod m20260115_000004_create_month_due_table;
mod m20260115_000005_create_sequence_table;
mod m20260116_000006_create_attendance_table;
mod m20260116_000007_create_attendance_entry_table;
mod m20260117_000008_create_fee_notice_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260114_000001_create_school_class_table::Migration),
            Box::new(m20260114_000002_create_student_table::Migration),
            Box::new(m20260115_000003_create_fee_record_table::Migration),
            Box::new(m20260115_000004_create_month_due_table::Migration),
            Box::new(m20260115_000005_create_sequence_table::Migration),
            Box::new(m20260116_000006_create_attendance_table::Migration),
            Box::new(m20260116_000007_create_attendance_entry_table::Migration),
            Box::new(m20260117_000008_create_fee_notice_table::Migration),
        ]
    }
}
