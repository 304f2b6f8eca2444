pub mod page_header;
pub mod sales_chart;
pub mod stat_card;
pub mod ui;
pub mod welcome_card;

pub use page_header::PageHeader;
pub use sales_chart::SalesChart;
pub use stat_card::StatCard;
pub use welcome_card::WelcomeCard;
