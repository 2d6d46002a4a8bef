mod mapper;
mod session;

pub use mapper::{DocumentMapper, UpdateMapper};
pub use session::{DocumentHandle, DocumentSessionPool};
