mod create_resource;
mod delete_resource;
mod helpers;
mod partial_update_resource;
mod update_resource;

pub use create_resource::CreateResourceCommandHandler;
pub use delete_resource::DeleteResourceCommandHandler;
pub use partial_update_resource::PartialUpdateResourceCommandHandler;
pub use update_resource::UpdateResourceCommandHandler;
