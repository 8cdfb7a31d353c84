mod entry_list;
pub use entry_list::EntryList;

mod dashboard;
pub use dashboard::DashboardView;
