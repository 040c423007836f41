pub mod cmd;
pub mod error;
pub mod eventbus;
pub mod icons;
pub mod library;
pub mod media;
pub mod menu;
pub mod selector;
pub mod settings;
pub mod storage;
