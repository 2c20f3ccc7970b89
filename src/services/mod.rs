pub mod image_proxy;
pub mod sharp;
pub mod worker;
