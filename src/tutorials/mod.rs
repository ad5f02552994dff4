//! The tutorials, in the order they introduce new concepts.

pub mod tutorial01;
pub mod tutorial02;
pub mod tutorial03;
pub mod tutorial04;
pub mod tutorial05;
pub mod tutorial06;
pub mod tutorial07;
