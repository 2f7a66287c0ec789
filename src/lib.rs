pub mod shared;
pub mod domain;
pub mod ports;
pub mod infrastructure;
pub mod presentation;
