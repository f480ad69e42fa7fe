pub mod get_user;
pub mod get_user_form;
pub mod list_users;
