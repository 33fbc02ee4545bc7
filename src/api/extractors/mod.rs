pub mod body;

pub use body::ApiBody;
