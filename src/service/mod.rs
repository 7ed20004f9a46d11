pub mod attendance_query;

pub use attendance_query::AttendanceQueryService;
