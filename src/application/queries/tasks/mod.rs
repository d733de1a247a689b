mod list;
mod resolve_slug;
mod service;
mod share_link;

pub use resolve_slug::ResolveTaskSlugQuery;
pub use service::TaskQueryService;
pub use share_link::GetTaskLinkQuery;
