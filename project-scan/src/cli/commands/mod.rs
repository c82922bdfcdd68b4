pub mod init_config;
pub mod report;
pub mod scan;
