//! UI Components
//!
//! Reusable Leptos components.

mod answer_list;
mod comment_section;
mod delete_confirm_button;
mod nav_bar;
mod poll_widget;
mod post_card;
mod response_form;
mod room_card;
mod summary_panel;
mod toc_sidebar;

pub use answer_list::AnswerList;
pub use comment_section::CommentSection;
pub use delete_confirm_button::DeleteConfirmButton;
pub use nav_bar::NavBar;
pub use poll_widget::PollWidget;
pub use post_card::PostCard;
pub use response_form::ResponseForm;
pub use room_card::RoomCard;
pub use summary_panel::SummaryPanel;
pub use toc_sidebar::TocSidebar;
