pub mod api_utils;
pub mod icons;
pub mod labels;
pub mod navigation;
pub mod number_format;
pub mod toast_service;
