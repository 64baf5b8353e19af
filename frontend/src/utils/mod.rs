pub mod files;
pub mod nav;
pub mod storage;
