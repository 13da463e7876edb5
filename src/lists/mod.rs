pub mod linked_list;
pub mod queue;
pub mod stack;
