mod attendance;
mod fee_notice;
mod fee_record;
mod month_due;
mod sequence;
mod student;
