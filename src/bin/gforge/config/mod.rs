mod sheet;

pub use sheet::build_sheet_config;
