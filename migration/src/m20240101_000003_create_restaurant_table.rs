use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Restaurant {
    Table,
    Id,
    Name,
    AddressId,
    Phone,
    Cuisine,
    Rating,
}

#[derive(DeriveIden)]
enum Address {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // FKs are declared inline so SQLite gets them too
        m.create_table(
            Table::create()
                .table(Restaurant::Table)
                .if_not_exists()
                .col(ColumnDef::new(Restaurant::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Restaurant::Name).string_len(255).not_null().unique_key())
                .col(ColumnDef::new(Restaurant::AddressId).integer().null())
                .col(ColumnDef::new(Restaurant::Phone).string_len(17).null())
                .col(ColumnDef::new(Restaurant::Cuisine).text().null())
                .col(ColumnDef::new(Restaurant::Rating).integer().null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_restaurant_address")
                        .from(Restaurant::Table, Restaurant::AddressId)
                        .to(Address::Table, Address::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_restaurant_address")
                .table(Restaurant::Table)
                .col(Restaurant::AddressId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Restaurant::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
