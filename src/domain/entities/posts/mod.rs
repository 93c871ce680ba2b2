//! Posts Entity Module

pub mod post;
