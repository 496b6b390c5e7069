//! Tasks module - domain models, services, and traits.

mod tasks_model;
mod tasks_service;
mod tasks_traits;


// Re-export the public interface
pub use tasks_model::{
    AssignedTask, AssignmentWithUser, NewTask, NewTaskAssignment, Task, TaskAssignment,
    TaskStatus, TaskWithRecords,
};
pub use tasks_service::TaskService;
pub use tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};
