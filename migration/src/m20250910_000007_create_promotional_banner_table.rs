use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PromotionalBanner::Table)
                    .if_not_exists()
                    .col(pk_auto(PromotionalBanner::BannerId))
                    .col(string(PromotionalBanner::Title))
                    .col(text_null(PromotionalBanner::Description))
                    .col(string(PromotionalBanner::ImageUrl))
                    .col(string_null(PromotionalBanner::TargetUrl))
                    .col(string_null(PromotionalBanner::DiscountCode))
                    .col(double_null(PromotionalBanner::DiscountPercentage))
                    .col(string(PromotionalBanner::StartDate))
                    .col(string(PromotionalBanner::EndDate))
                    .col(boolean(PromotionalBanner::IsActive).default(true))
                    .col(integer(PromotionalBanner::DisplayOrder).default(0))
                    .col(integer(PromotionalBanner::ClickCount).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PromotionalBanner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PromotionalBanner {
    Table,
    BannerId,
    Title,
    Description,
    ImageUrl,
    TargetUrl,
    DiscountCode,
    DiscountPercentage,
    StartDate,
    EndDate,
    IsActive,
    DisplayOrder,
    ClickCount,
}
