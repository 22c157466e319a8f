pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_person_table;
mod m20240101_000002_create_address_table;
mod m20240101_000003_create_restaurant_table;
mod m20240101_000004_create_employee_table;
mod m20240101_000005_create_auth_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_person_table::Migration),
            Box::new(m20240101_000002_create_address_table::Migration),
            Box::new(m20240101_000003_create_restaurant_table::Migration),
            Box::new(m20240101_000004_create_employee_table::Migration),
            Box::new(m20240101_000005_create_auth_tables::Migration),
        ]
    }
}
