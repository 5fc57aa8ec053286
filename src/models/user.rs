//! User records returned by the randomuser.me API.
//!
//! Only the fields selected through `inc=login,email,name,picture` are
//! modelled. Inner fields are trusted: anything missing decodes to an empty
//! string instead of rejecting the whole page.

use serde::{Deserialize, Serialize};

/// Pagination metadata attached to every page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    /// Page number the server answered for
    pub page: u32,
    /// Number of results on this page
    pub results: u32,
    /// Seed used to generate the results
    pub seed: String,
    /// API version string
    pub version: String,
}

/// A page envelope: metadata plus the users on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersResponse {
    pub info: PageInfo,
    pub results: Vec<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserLogin {
    pub uuid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserName {
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPicture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

/// A single user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub email: String,
    pub login: UserLogin,
    pub name: UserName,
    pub picture: UserPicture,
}

impl User {
    /// Unique login token used as the card key.
    pub fn id(&self) -> &str {
        &self.login.uuid
    }

    /// "Title First Last", as shown on the card heading.
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.name.title, self.name.first, self.name.last)
    }

    /// Avatar reference shown on the card.
    pub fn avatar(&self) -> &str {
        &self.picture.thumbnail
    }
}
