pub mod request_log;

pub use request_log::{RequestTraceLayer, request_trace_layer};
