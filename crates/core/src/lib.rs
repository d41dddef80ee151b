//! Domain logic for the DetailWorks portfolio backend.
//!
//! Pure, I/O-free building blocks: the content store model, the brand
//! classifier, gallery grouping, the import/merge reducer, contact-form
//! validation, the media scan filter, and the rate limiter. HTTP concerns
//! live in `detailworks-api`.

pub mod brands;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod importer;
pub mod media_scan;
pub mod rate_limit;
pub mod store;
pub mod types;
