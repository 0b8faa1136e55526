pub mod grade;
pub mod ranges;
