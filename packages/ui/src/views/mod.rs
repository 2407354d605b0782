mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod create_user;
pub use create_user::CreateUserView;

mod list_users;
pub use list_users::ListUsersView;

mod user_card;
pub use user_card::UserCard;

mod user_detail;
pub use user_detail::UserDetailModal;
