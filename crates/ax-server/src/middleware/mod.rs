//! HTTP middleware.

pub(crate) mod redirects;
pub(crate) mod security;
