#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Mechanism;
#[allow(non_snake_case)]
pub mod Utils;
pub mod config_manager;
