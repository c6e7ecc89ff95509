use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_uuid(Products::Id))
                    .col(string_len(Products::Name, 255))
                    .col(integer(Products::Quantity).default(0))
                    .col(string_len(Products::Type, 20))
                    .col(string_len(Products::Category, 100))
                    // JSON array of URLs
                    .col(text(Products::ImageUrls).default("[]"))
                    .col(double(Products::Price).default(0.0))
                    .col(double(Products::Width).default(0.0))
                    .col(double(Products::Height).default(0.0))
                    .col(double(Products::Weight).default(0.0))
                    .col(double(Products::ShippingBasePrice).default(0.0))
                    .col(integer(Products::BaseDeliveryTimelines).default(0))
                    .col(uuid(Products::SellerId))
                    .col(integer(Products::Version).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_seller_id")
                    .table(Products::Table)
                    .col(Products::SellerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dropping the table drops idx_products_seller_id with it
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Quantity,
    Type,
    Category,
    ImageUrls,
    Price,
    Width,
    Height,
    Weight,
    ShippingBasePrice,
    BaseDeliveryTimelines,
    SellerId,
    Version,
}
