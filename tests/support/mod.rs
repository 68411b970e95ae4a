#![allow(dead_code)]

pub mod factory;
pub mod fixtures;
pub mod harness;
