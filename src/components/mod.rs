//! UI Components for InspireFlow.

mod footer;
mod header;
mod quote_box;
mod today_date;

pub use footer::Footer;
pub use header::Header;
pub use quote_box::QuoteBox;
pub use today_date::TodayDate;
