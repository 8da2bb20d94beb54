use crate::server::{
    error::AppError,
    model::{export::ExportEntity, scope::Scope},
    service::{
        export::{ExportService, PDF_CONTENT_TYPE, XLSX_CONTENT_TYPE},
        report::ReportService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod documents;
mod workbooks;
