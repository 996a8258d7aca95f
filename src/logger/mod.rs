pub mod response_logger;
