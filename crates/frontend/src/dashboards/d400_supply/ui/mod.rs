pub mod dashboard;

pub use dashboard::SupplyDashboard;
