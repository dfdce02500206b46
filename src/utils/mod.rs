pub mod excel_parser;
pub mod productivity;
pub mod reports;
pub mod time_norm;
pub mod working_hours;
