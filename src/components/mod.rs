//! UI Components
//!
//! Leptos views and the reusable pieces they share.

mod require_auth;
mod logout_button;
mod paragraph_list;
mod function_card;
mod query_form;
mod login_page;
mod dashboard;
mod function_page;
mod not_found;

pub use require_auth::RequireAuth;
pub use logout_button::LogoutButton;
pub use paragraph_list::ParagraphList;
pub use function_card::FunctionCard;
pub use query_form::QueryForm;
pub use login_page::LoginPage;
pub use dashboard::Dashboard;
pub use function_page::FunctionPage;
pub use not_found::NotFound;
