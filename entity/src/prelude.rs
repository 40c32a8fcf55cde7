pub use super::attendance::Entity as Attendance;
pub use super::attendance_entry::Entity as AttendanceEntry;
pub use super::fee_notice::Entity as FeeNotice;
pub use super::fee_record::Entity as FeeRecord;
pub use super::month_due::Entity as MonthDue;
pub use super::school_class::Entity as SchoolClass;
pub use super::sequence::Entity as Sequence;
pub use super::student::Entity as Student;
