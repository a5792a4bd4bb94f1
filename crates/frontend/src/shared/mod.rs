pub mod api;
pub mod browser;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list_controller;
pub mod list_store;
pub mod modal;
pub mod modal_form;
pub mod named_list;
pub mod notify;
pub mod page_frame;
pub mod page_standard;
