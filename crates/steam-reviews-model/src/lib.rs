pub mod app_list;
pub mod collection;
pub mod response;

pub use app_list::*;
pub use collection::*;
pub use response::*;
