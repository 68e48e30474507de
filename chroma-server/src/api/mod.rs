//! Wire types shared by the color endpoints.
//!
//! Every JSON body carries a `success` flag; the browser client branches on
//! it before reading anything else.

pub mod responses;

pub use responses::*;
