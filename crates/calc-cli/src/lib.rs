pub mod cmd;
pub mod output;
