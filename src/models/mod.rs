//! Data models for the users feed.

pub mod user;

pub use user::{PageInfo, User, UserLogin, UserName, UserPicture, UsersResponse};
