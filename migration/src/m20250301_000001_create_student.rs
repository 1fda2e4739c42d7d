use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 学生表沿用旧库的列名（全大写），不声明主键，行由 SQLite 的 rowid 标识
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Student::Name).string_len(255).null())
                    .col(ColumnDef::new(Student::Class).string_len(255).null())
                    .col(ColumnDef::new(Student::Section).string_len(255).null())
                    .col(ColumnDef::new(Student::Marks).integer().null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Student {
    #[sea_orm(iden = "STUDENT")]
    Table,
    #[sea_orm(iden = "NAME")]
    Name,
    #[sea_orm(iden = "CLASS")]
    Class,
    #[sea_orm(iden = "SECTION")]
    Section,
    #[sea_orm(iden = "MARKS")]
    Marks,
}
