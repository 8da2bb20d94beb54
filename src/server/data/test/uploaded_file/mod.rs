use crate::{
    model::file::FileEntityType,
    server::{data::uploaded_file::UploadedFileRepository, model::file::CreateUploadedFileParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
