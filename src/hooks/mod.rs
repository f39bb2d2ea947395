pub mod use_district_data;
pub mod use_districts;
pub mod use_language;
