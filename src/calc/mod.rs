pub mod awards;
pub mod batch;
pub mod catalog;
pub mod error;
pub mod factors;
pub mod industrial;
pub mod packaging;
pub mod recommend;
