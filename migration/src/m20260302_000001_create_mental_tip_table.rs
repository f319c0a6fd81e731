use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MentalTip::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MentalTip::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MentalTip::MonthRelation).integer().not_null())
                    .col(ColumnDef::new(MentalTip::TipContent).text().not_null())
                    .col(
                        ColumnDef::new(MentalTip::DateCreated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Tips are looked up by exact month
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_mental_tip_month_relation")
                    .table(MentalTip::Table)
                    .col(MentalTip::MonthRelation)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MentalTip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MentalTip {
    Table,
    Id,
    MonthRelation,
    TipContent,
    DateCreated,
}
