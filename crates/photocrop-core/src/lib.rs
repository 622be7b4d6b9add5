pub mod config;
pub mod consts;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod handles;
pub mod pixels;
