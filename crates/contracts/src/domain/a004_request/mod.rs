pub mod aggregate;
pub mod filter;
pub mod fixtures;

pub use aggregate::{RequestError, RequestRecord, RequestStatus};
pub use filter::{approval_queue, filter_requests, parse_date_input, RequestFilter};
