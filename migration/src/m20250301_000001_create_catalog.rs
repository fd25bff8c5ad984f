use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Director::Table)
                    .if_not_exists()
                    .col(pk_auto(Director::Id))
                    .col(string_len(Director::Name, 200))
                    .col(integer_null(Director::BirthYear))
                    .to_owned(),
            )
            .await?;

        // No foreign key on director_id: a film may keep referencing a deleted
        // director. See DESIGN.md.
        manager
            .create_table(
                Table::create()
                    .table(Film::Table)
                    .if_not_exists()
                    .col(pk_auto(Film::Id))
                    .col(string_len(Film::Title, 200))
                    .col(integer(Film::Year))
                    .col(integer_null(Film::DirectorId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_film_director_id")
                    .table(Film::Table)
                    .col(Film::DirectorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Actor::Table)
                    .if_not_exists()
                    .col(pk_auto(Actor::Id))
                    .col(string_len(Actor::Name, 200))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FilmActor::Table)
                    .if_not_exists()
                    .col(pk_auto(FilmActor::Id))
                    .col(integer(FilmActor::FilmId))
                    .col(integer(FilmActor::ActorId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_film_actor_actor_id")
                    .table(FilmActor::Table)
                    .col(FilmActor::ActorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_film_actor_film_id")
                    .table(FilmActor::Table)
                    .col(FilmActor::FilmId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FilmActor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Actor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Film::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Director::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Film {
    Table,
    Id,
    Title,
    Year,
    DirectorId,
}

#[derive(DeriveIden)]
enum Director {
    Table,
    Id,
    Name,
    BirthYear,
}

#[derive(DeriveIden)]
enum Actor {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum FilmActor {
    Table,
    Id,
    FilmId,
    ActorId,
}
