pub mod dismiss;
pub mod lang;
pub mod report;
pub mod show;
pub mod songs;
pub mod sync_cn;
