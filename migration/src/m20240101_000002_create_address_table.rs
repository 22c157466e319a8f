use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Address {
    Table,
    Id,
    Country,
    Province,
    City,
    Street,
    House,
    ZipCode,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Address::Table)
                .if_not_exists()
                .col(ColumnDef::new(Address::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Address::Country).string_len(2).not_null())
                .col(ColumnDef::new(Address::Province).text().not_null())
                .col(ColumnDef::new(Address::City).text().not_null())
                .col(ColumnDef::new(Address::Street).text().not_null())
                .col(ColumnDef::new(Address::House).string_len(50).not_null())
                .col(ColumnDef::new(Address::ZipCode).string_len(5).null())
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_address_country")
                .table(Address::Table)
                .col(Address::Country)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Address::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
