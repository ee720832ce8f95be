pub mod feedback;

pub use feedback::Entity as Feedback;
