mod create_user;
pub use create_user::CreateUser;

mod list_users;
pub use list_users::ListUsers;

mod tab_layout;
pub use tab_layout::TabLayout;
