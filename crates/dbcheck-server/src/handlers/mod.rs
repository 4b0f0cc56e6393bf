mod db_check;
mod health;
mod page;

pub use db_check::db_check;
pub use health::health;
pub use page::{render_status_page, status_page};
