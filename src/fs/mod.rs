pub mod path_stack;
pub mod reader;
