//! Spreadsheet export engine: sheet discovery, row projection and batch
//! orchestration.

mod anchor_locator;
mod cell_formatter;
mod config_resolver;
mod export_model;
mod export_service;
mod export_traits;
mod field_resolver;
mod filters;
mod grid_assembler;
mod grid_traits;
mod metadata;
mod row_projector;
mod sheet_sync;


pub use anchor_locator::locate_anchors;
pub use cell_formatter::{CellFormatter, DisplayZone};
pub use config_resolver::{apply_global_config, resolve_sheet_configs};
pub use export_model::*;
pub use export_service::SheetsExportService;
pub use export_traits::SheetsExportServiceTrait;
pub use field_resolver::{resolve_elements, ExportRoot, ResolvedElement};
pub use filters::matches_filters;
pub use grid_assembler::{assemble_payload, build_sheet_payload};
pub use grid_traits::GridClientTrait;
pub use metadata::{render_entity_updates_row, render_last_update_row};
pub use row_projector::{format_type_name, project_row};
pub use sheet_sync::SheetSynchronizer;
