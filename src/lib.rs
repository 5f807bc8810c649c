pub mod config;
pub mod dcavg;
pub mod device;
pub mod drawing;
pub mod error;
pub mod logger;
pub mod routes;
