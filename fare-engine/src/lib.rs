//! MTR fare lookup and split-ticket planning.
//!
//! A library that answers: "what does this journey cost, and would
//! splitting it into two tickets at an intermediate station cost less?"

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod feed;
pub mod planner;
pub mod savings;
