pub mod content;
pub mod models;
pub mod sanitizers;
pub mod schema;
pub mod validators;

pub use content::*;
pub use models::*;
pub use sanitizers::*;
pub use schema::*;
pub use validators::*;
