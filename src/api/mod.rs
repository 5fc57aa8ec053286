//! Users API client.
//!
//! [`UsersClient::fetch_users`] turns a page number into a validated
//! [`UsersResponse`](crate::models::UsersResponse):
//!
//! ```ignore
//! use userfeed::api::UsersClient;
//!
//! let client = UsersClient::with_reqwest(base_url, Duration::from_secs(30))?;
//! let page = client.fetch_users(1u32).await?;
//! println!("{} users", page.results.len());
//! ```

mod client;
mod error;
mod page;

pub use client::{
    build_users_url, UsersClient, DEFAULT_BASE_URL, INCLUDED_FIELDS, RESULTS_PER_PAGE,
};
pub use error::ApiError;
pub use page::PageNumber;
