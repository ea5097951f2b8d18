//! Migration: legacy teacher records and their class links.

use sea_orm_migration::prelude::*;

use super::m20261001_000001_create_school_tables::{Classes, Subjects};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Teachers::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Teachers::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Teachers::Nip).string_len(64).not_null())
                    .col(ColumnDef::new(Teachers::SubjectId).string_len(32).not_null())
                    .col(ColumnDef::new(Teachers::AvatarUrl).string_len(512).not_null())
                    .col(ColumnDef::new(Teachers::AvatarHint).string_len(255).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teachers_subject")
                            .from(Teachers::Table, Teachers::SubjectId)
                            .to(Subjects::Table, Subjects::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TeacherClasses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TeacherClasses::TeacherId).string_len(32).not_null())
                    .col(ColumnDef::new(TeacherClasses::ClassId).string_len(32).not_null())
                    .primary_key(
                        Index::create()
                            .col(TeacherClasses::TeacherId)
                            .col(TeacherClasses::ClassId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_classes_teacher")
                            .from(TeacherClasses::Table, TeacherClasses::TeacherId)
                            .to(Teachers::Table, Teachers::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_classes_class")
                            .from(TeacherClasses::Table, TeacherClasses::ClassId)
                            .to(Classes::Table, Classes::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeacherClasses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum Teachers {
    Table,
    Id,
    Name,
    Nip,
    SubjectId,
    AvatarUrl,
    AvatarHint,
}

#[derive(DeriveIden)]
enum TeacherClasses {
    Table,
    TeacherId,
    ClassId,
}
