pub mod action;
pub mod design;
pub mod search;
