pub mod detail_view;
pub mod formatting;
pub mod table_renderer;
pub mod test_mode;
