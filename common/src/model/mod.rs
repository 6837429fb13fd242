pub mod analytics;
pub mod feedback;
pub mod id;
pub mod template;
