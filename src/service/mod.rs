pub mod action;
pub mod completion;
pub mod design;
pub mod prompt;
pub mod search;
