mod get_resource;
mod list_resources;

pub use get_resource::GetResourceHandler;
pub use list_resources::ListResourcesHandler;
