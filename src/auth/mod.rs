//! Session authentication module.
//!
//! Private routes take a [`SessionAuth`] extractor argument. Requests
//! without an authenticated principal are redirected to `/login`, never
//! answered with an error status.

mod extractor;

pub use extractor::SessionAuth;
