pub mod prelude;

pub mod attendance;
pub mod attendance_entry;
pub mod fee_notice;
pub mod fee_record;
pub mod month_due;
pub mod school_class;
pub mod sequence;
pub mod student;
