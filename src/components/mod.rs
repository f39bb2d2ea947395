pub mod budget_overview;
pub mod district_detail;
pub mod district_list;
pub mod language_toggle;
pub mod metric_card;
pub mod notice;
pub mod skeleton;
pub mod trend_chart;

pub use district_detail::DistrictDetailView;
pub use district_list::DistrictListView;
