pub mod advice;
pub mod aggregate;
pub mod reflection;
pub mod sentiment;
