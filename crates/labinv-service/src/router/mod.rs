//! The view router: picks exactly one view per request cycle.

pub mod link_code;
pub mod resolve;
pub mod view;

pub use link_code::LinkCodeView;
pub use resolve::{Rendered, RouteQuery, ViewRouter};
pub use view::View;
