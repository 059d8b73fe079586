pub mod break_interval;
pub mod record;
pub mod record_kind;
pub mod work_day;
