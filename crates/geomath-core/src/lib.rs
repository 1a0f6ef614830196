pub mod assets;
pub mod composite;
pub mod config;
pub mod consts;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod overlay;
pub mod prepare;
pub mod tool;
pub mod transform;
pub mod view;
