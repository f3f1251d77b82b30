//! Outgoing request types.

mod method;
mod path;
mod spec;

pub use method::HttpMethod;
pub use path::{PathParams, PathTemplate};
pub use spec::{DEFAULT_TIMEOUT, RequestSpec, join_url};
