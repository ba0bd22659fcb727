pub mod card;
pub mod error;
pub mod overlay;

pub use card::listing_card;
pub use error::html_error_response;
pub use overlay::overlay;
