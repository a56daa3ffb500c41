pub mod assignment_generator;
pub mod failure_writer;
pub mod open_ended_selector;
pub mod quota_allocator;

pub use assignment_generator::AssignmentTable;
pub use failure_writer::FailureWriter;
