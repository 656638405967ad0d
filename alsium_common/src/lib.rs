mod paise;
mod secret;

pub use paise::{Paise, INR_CURRENCY_CODE};
pub use secret::Secret;
