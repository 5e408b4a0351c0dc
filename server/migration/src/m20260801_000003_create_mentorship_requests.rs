use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MentorshipRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MentorshipRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MentorshipRequests::MentorId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MentorshipRequests::MenteeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MentorshipRequests::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(MentorshipRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MentorshipRequests::Table, MentorshipRequests::MentorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MentorshipRequests::Table, MentorshipRequests::MenteeId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Active-pair lookups filter on (mentor_id | mentee_id) + status.
        manager
            .create_index(
                Index::create()
                    .table(MentorshipRequests::Table)
                    .col(MentorshipRequests::MentorId)
                    .col(MentorshipRequests::Status)
                    .name("idx_mentorship_requests_mentor_id_status")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(MentorshipRequests::Table)
                    .col(MentorshipRequests::MenteeId)
                    .col(MentorshipRequests::Status)
                    .name("idx_mentorship_requests_mentee_id_status")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MentorshipRequests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MentorshipRequests {
    Table,
    Id,
    MentorId,
    MenteeId,
    Status,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
