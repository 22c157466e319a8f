use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    RestaurantId,
    PersonId,
    Position,
}

#[derive(DeriveIden)]
enum Restaurant {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Person {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Employee::Table)
                .if_not_exists()
                .col(ColumnDef::new(Employee::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Employee::RestaurantId).integer().not_null())
                .col(ColumnDef::new(Employee::PersonId).integer().not_null())
                .col(ColumnDef::new(Employee::Position).integer().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_employee_restaurant")
                        .from(Employee::Table, Employee::RestaurantId)
                        .to(Restaurant::Table, Restaurant::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_employee_person")
                        .from(Employee::Table, Employee::PersonId)
                        .to(Person::Table, Person::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // one position per person per restaurant
        m.create_index(
            Index::create()
                .name("uk_employee_restaurant_person")
                .table(Employee::Table)
                .col(Employee::RestaurantId)
                .col(Employee::PersonId)
                .unique()
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_employee_person")
                .table(Employee::Table)
                .col(Employee::PersonId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Employee::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
