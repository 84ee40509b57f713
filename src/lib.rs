//! graylab - grayscale image-difference teaching toolkit
//!
//! Loads course images, explains uint8 pixel math step by step, and renders
//! matplotlib-style figures as PNG. This library exposes modules for
//! integration testing.

pub mod arithmetic;
pub mod convert;
pub mod demos;
pub mod difference;
pub mod error;
pub mod figures;
pub mod models;
pub mod narrate;
pub mod region;
pub mod rendering;
pub mod store;
