//! Migration: schedules, attendance logs, admissions and teaching journals.

use sea_orm_migration::prelude::*;

use super::m20261001_000001_create_school_tables::{Classes, Staff, Students, Subjects};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedules::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Schedules::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Schedules::ClassId).string_len(32).not_null())
                    .col(ColumnDef::new(Schedules::SubjectId).string_len(32).not_null())
                    .col(ColumnDef::new(Schedules::TeacherId).string_len(32).not_null())
                    .col(ColumnDef::new(Schedules::Day).string_len(16).not_null())
                    .col(ColumnDef::new(Schedules::StartTime).string_len(5).not_null())
                    .col(ColumnDef::new(Schedules::EndTime).string_len(5).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedules_class")
                            .from(Schedules::Table, Schedules::ClassId)
                            .to(Classes::Table, Classes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedules_subject")
                            .from(Schedules::Table, Schedules::SubjectId)
                            .to(Subjects::Table, Subjects::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedules_teacher")
                            .from(Schedules::Table, Schedules::TeacherId)
                            .to(Staff::Table, Staff::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AttendanceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceRecords::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AttendanceRecords::StudentId).string_len(32).not_null())
                    .col(ColumnDef::new(AttendanceRecords::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(AttendanceRecords::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceRecords::RecordedBy).string_len(32).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_student")
                            .from(AttendanceRecords::Table, AttendanceRecords::StudentId)
                            .to(Students::Table, Students::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_recorder")
                            .from(AttendanceRecords::Table, AttendanceRecords::RecordedBy)
                            .to(Staff::Table, Staff::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_timestamp")
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::Timestamp)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StaffAttendanceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StaffAttendanceRecords::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StaffAttendanceRecords::StaffId).string_len(32).not_null())
                    .col(ColumnDef::new(StaffAttendanceRecords::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(StaffAttendanceRecords::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_attendance_staff")
                            .from(StaffAttendanceRecords::Table, StaffAttendanceRecords::StaffId)
                            .to(Staff::Table, Staff::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_staff_attendance_timestamp")
                    .table(StaffAttendanceRecords::Table)
                    .col(StaffAttendanceRecords::Timestamp)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Admissions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Admissions::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Admissions::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Admissions::PreviousSchool).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Admissions::RegistrationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Admissions::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Admissions::ParentName).string_len(255).not_null())
                    .col(ColumnDef::new(Admissions::Contact).string_len(32).not_null())
                    .col(ColumnDef::new(Admissions::BirthPlace).string_len(255).not_null())
                    .col(ColumnDef::new(Admissions::BirthDate).date().not_null())
                    .col(ColumnDef::new(Admissions::Gender).string_len(16).not_null())
                    .col(ColumnDef::new(Admissions::Address).text().not_null())
                    .col(ColumnDef::new(Admissions::AcademicYear).string_len(16).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TeachingJournals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeachingJournals::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TeachingJournals::StaffId).string_len(32).not_null())
                    .col(ColumnDef::new(TeachingJournals::ClassId).string_len(32).not_null())
                    .col(ColumnDef::new(TeachingJournals::SubjectId).string_len(32).not_null())
                    .col(ColumnDef::new(TeachingJournals::Date).date().not_null())
                    .col(ColumnDef::new(TeachingJournals::Topic).string_len(255).not_null())
                    .col(ColumnDef::new(TeachingJournals::Notes).text().not_null())
                    .col(ColumnDef::new(TeachingJournals::MaterialFile).string_len(512).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journals_staff")
                            .from(TeachingJournals::Table, TeachingJournals::StaffId)
                            .to(Staff::Table, Staff::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journals_class")
                            .from(TeachingJournals::Table, TeachingJournals::ClassId)
                            .to(Classes::Table, Classes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journals_subject")
                            .from(TeachingJournals::Table, TeachingJournals::SubjectId)
                            .to(Subjects::Table, Subjects::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeachingJournals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StaffAttendanceRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttendanceRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Schedules::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Schedules {
    Table,
    Id,
    ClassId,
    SubjectId,
    TeacherId,
    Day,
    StartTime,
    EndTime,
}

#[derive(DeriveIden)]
enum AttendanceRecords {
    Table,
    Id,
    StudentId,
    Status,
    Timestamp,
    RecordedBy,
}

#[derive(DeriveIden)]
enum StaffAttendanceRecords {
    Table,
    Id,
    StaffId,
    Status,
    Timestamp,
}

#[derive(DeriveIden)]
enum Admissions {
    Table,
    Id,
    Name,
    PreviousSchool,
    RegistrationDate,
    Status,
    ParentName,
    Contact,
    BirthPlace,
    BirthDate,
    Gender,
    Address,
    AcademicYear,
}

#[derive(DeriveIden)]
enum TeachingJournals {
    Table,
    Id,
    StaffId,
    ClassId,
    SubjectId,
    Date,
    Topic,
    Notes,
    MaterialFile,
}
