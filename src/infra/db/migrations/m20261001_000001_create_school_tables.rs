//! Migration: subjects, staff, classes, class links and students.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Subjects::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Subjects::Name).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Staff::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Staff::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Staff::Role).string_len(16).not_null())
                    .col(ColumnDef::new(Staff::Nip).string_len(64).null())
                    .col(ColumnDef::new(Staff::SubjectId).string_len(32).null())
                    .col(ColumnDef::new(Staff::JobTitle).string_len(255).null())
                    .col(ColumnDef::new(Staff::AvatarUrl).string_len(512).not_null())
                    .col(ColumnDef::new(Staff::AvatarHint).string_len(255).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_subject")
                            .from(Staff::Table, Staff::SubjectId)
                            .to(Subjects::Table, Subjects::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_staff_role")
                    .table(Staff::Table)
                    .col(Staff::Role)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Classes::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Classes::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Classes::WalikelasId).string_len(32).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classes_walikelas")
                            .from(Classes::Table, Classes::WalikelasId)
                            .to(Staff::Table, Staff::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StaffClasses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(StaffClasses::StaffId).string_len(32).not_null())
                    .col(ColumnDef::new(StaffClasses::ClassId).string_len(32).not_null())
                    .primary_key(
                        Index::create()
                            .col(StaffClasses::StaffId)
                            .col(StaffClasses::ClassId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_classes_staff")
                            .from(StaffClasses::Table, StaffClasses::StaffId)
                            .to(Staff::Table, Staff::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_classes_class")
                            .from(StaffClasses::Table, StaffClasses::ClassId)
                            .to(Classes::Table, Classes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Students::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Students::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Students::ClassId).string_len(32).not_null())
                    .col(ColumnDef::new(Students::AvatarUrl).string_len(512).not_null())
                    .col(ColumnDef::new(Students::AvatarHint).string_len(255).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_class")
                            .from(Students::Table, Students::ClassId)
                            .to(Classes::Table, Classes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_class_id")
                    .table(Students::Table)
                    .col(Students::ClassId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StaffClasses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum Subjects {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub(super) enum Staff {
    Table,
    Id,
    Name,
    Role,
    Nip,
    SubjectId,
    JobTitle,
    AvatarUrl,
    AvatarHint,
}

#[derive(DeriveIden)]
pub(super) enum Classes {
    Table,
    Id,
    Name,
    WalikelasId,
}

#[derive(DeriveIden)]
enum StaffClasses {
    Table,
    StaffId,
    ClassId,
}

#[derive(DeriveIden)]
pub(super) enum Students {
    Table,
    Id,
    Name,
    ClassId,
    AvatarUrl,
    AvatarHint,
}
