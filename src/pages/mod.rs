//! Route Pages

mod bookmarks;
mod community;
mod login;
mod post_detail;
mod profile;
mod project_detail;

pub use bookmarks::Bookmarks;
pub use community::Community;
pub use login::Login;
pub use post_detail::PostDetail;
pub use profile::Profile;
pub use project_detail::ProjectDetail;
