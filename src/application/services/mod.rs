/// Module containing the content service for category data
pub mod content_service;
/// Module containing the platform service for campaigns, reports and templates
pub mod platform_service;

pub use crate::application::interfaces::content::*;
pub use crate::application::interfaces::platform::*;
pub use content_service::ContentServiceImpl;
pub use platform_service::PlatformServiceImpl;
