pub mod clock;
pub mod storage;
pub mod wikipedia;
