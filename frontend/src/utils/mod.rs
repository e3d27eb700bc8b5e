pub mod download;
pub mod storage;
pub mod time;
pub mod validation;
