pub use self::student::{Proactiveness, Student, StudentId};
pub use self::task::{TaskRecord, TaskStatus};

mod student;
mod task;
