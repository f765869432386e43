pub mod api_error;
pub mod api_utils;
pub mod browser;
pub mod components;
pub mod icons;
pub mod page_frame;
pub mod request_generation;
