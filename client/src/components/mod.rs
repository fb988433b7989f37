//! UI components composed by the home page.

pub mod design_detail;
pub mod dsm_table;
pub mod login_dialog;
pub mod nav_bar;
pub mod requirement_list;
pub mod tradespace_chart;
pub mod tradespace_table;
pub mod upload_dialog;
