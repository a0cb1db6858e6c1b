pub mod icons;
pub mod skills;
pub mod submission;
pub mod uploads;
