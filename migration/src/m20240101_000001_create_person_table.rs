use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Person::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Person::Firstname)
                            .string_len(100)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Person::Surname)
                            .string_len(100)
                            .not_null()
                    )
                    .col(ColumnDef::new(Person::Patronymic).string_len(100).null())
                    .col(ColumnDef::new(Person::DateOfBirth).date().null())
                    .col(ColumnDef::new(Person::Phone).string_len(17).null())
                    .to_owned()
            )
            .await?;

        // list ordering
        manager
            .create_index(
                Index::create()
                    .name("idx_person_surname_firstname")
                    .table(Person::Table)
                    .col(Person::Surname)
                    .col(Person::Firstname)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Person::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Person {
    Table,
    Id,
    Firstname,
    Surname,
    Patronymic,
    DateOfBirth,
    Phone,
}
