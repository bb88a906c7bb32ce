// Adapters layer: concrete implementations for external systems (sheet formats).

pub mod csv_sheet;
