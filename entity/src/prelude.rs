pub use super::character::Entity as Character;
pub use super::favourite::Entity as Favourite;
pub use super::user::Entity as User;
