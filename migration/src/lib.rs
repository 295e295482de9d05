pub use sea_orm_migration::prelude::*;

mod m20260402_000001_create_user_table;
mod m20260402_000002_create_workspace_tables;
mod m20260415_000003_create_invitation_table;
mod m20260502_000004_create_subscription_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260402_000001_create_user_table::Migration),
            Box::new(m20260402_000002_create_workspace_tables::Migration),
            Box::new(m20260415_000003_create_invitation_table::Migration),
            Box::new(m20260502_000004_create_subscription_table::Migration),
        ]
    }
}
