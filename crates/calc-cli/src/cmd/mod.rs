pub mod backlog;
pub mod features;
pub mod run;
