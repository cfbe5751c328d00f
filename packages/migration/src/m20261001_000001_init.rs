use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Competitions {
    Table,
    Id,
    Name,
    CreatedBy,
    TeamAName,
    TeamBName,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Rounds {
    Table,
    Id,
    CompetitionId,
    RoundNo,
    Status,
    CreatedAt,
    CompletedAt,
}

#[derive(Iden)]
enum RoundHoles {
    Table,
    Id,
    RoundId,
    HoleNumber,
    Par,
    StrokeIndex,
}

#[derive(Iden)]
enum Matches {
    Table,
    Id,
    CompetitionId,
    RoundId,
    MatchNo,
    Format,
    Status,
    StrokesGiven,
    SubmittedPlayers,
    IsDecided,
    DecidedWinner,
    DecidedScore,
    ResultWinner,
    ResultScore,
    ConcededByTeam,
    ConcedeReason,
    CreatedAt,
    UpdatedAt,
    CompletedAt,
    LockVersion,
}

#[derive(Iden)]
enum MatchPlayers {
    Table,
    Id,
    MatchId,
    PlayerId,
    Team,
    Position,
    PlayingHandicap,
    Tee,
    MarksPlayerId,
}

#[derive(Iden)]
enum HoleScores {
    Table,
    Id,
    MatchId,
    HoleNumber,
    PlayerId,
    Team,
    OwnScore,
    OwnSubmitted,
    MarkerScore,
    MarkerSubmitted,
    StrokesReceived,
    NetScore,
    ValidationStatus,
    CreatedAt,
    UpdatedAt,
}

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

fn timestamp_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // competitions
        manager
            .create_table(
                Table::create()
                    .table(Competitions::Table)
                    .if_not_exists()
                    .col(id_col(Competitions::Id))
                    .col(ColumnDef::new(Competitions::Name).string().not_null())
                    .col(
                        ColumnDef::new(Competitions::CreatedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Competitions::TeamAName).string().not_null())
                    .col(ColumnDef::new(Competitions::TeamBName).string().not_null())
                    .col(timestamp_col(Competitions::CreatedAt))
                    .col(timestamp_col(Competitions::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // rounds
        manager
            .create_table(
                Table::create()
                    .table(Rounds::Table)
                    .if_not_exists()
                    .col(id_col(Rounds::Id))
                    .col(ColumnDef::new(Rounds::CompetitionId).big_integer().not_null())
                    .col(ColumnDef::new(Rounds::RoundNo).small_integer().not_null())
                    .col(
                        ColumnDef::new(Rounds::Status)
                            .string_len(16)
                            .not_null()
                            .default("SCHEDULED"),
                    )
                    .col(timestamp_col(Rounds::CreatedAt))
                    .col(
                        ColumnDef::new(Rounds::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rounds_competition_id")
                            .from(Rounds::Table, Rounds::CompetitionId)
                            .to(Competitions::Table, Competitions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_rounds_competition_round_no")
                    .table(Rounds::Table)
                    .col(Rounds::CompetitionId)
                    .col(Rounds::RoundNo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // round_holes
        manager
            .create_table(
                Table::create()
                    .table(RoundHoles::Table)
                    .if_not_exists()
                    .col(id_col(RoundHoles::Id))
                    .col(ColumnDef::new(RoundHoles::RoundId).big_integer().not_null())
                    .col(
                        ColumnDef::new(RoundHoles::HoleNumber)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RoundHoles::Par).small_integer().not_null())
                    .col(
                        ColumnDef::new(RoundHoles::StrokeIndex)
                            .small_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_round_holes_round_id")
                            .from(RoundHoles::Table, RoundHoles::RoundId)
                            .to(Rounds::Table, Rounds::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_round_holes_round_hole")
                    .table(RoundHoles::Table)
                    .col(RoundHoles::RoundId)
                    .col(RoundHoles::HoleNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_round_holes_round_stroke_index")
                    .table(RoundHoles::Table)
                    .col(RoundHoles::RoundId)
                    .col(RoundHoles::StrokeIndex)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // matches
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(id_col(Matches::Id))
                    .col(
                        ColumnDef::new(Matches::CompetitionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Matches::RoundId).big_integer().not_null())
                    .col(ColumnDef::new(Matches::MatchNo).small_integer().not_null())
                    .col(ColumnDef::new(Matches::Format).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Matches::Status)
                            .string_len(16)
                            .not_null()
                            .default("SCHEDULED"),
                    )
                    .col(ColumnDef::new(Matches::StrokesGiven).json().not_null())
                    .col(ColumnDef::new(Matches::SubmittedPlayers).json().not_null())
                    .col(
                        ColumnDef::new(Matches::IsDecided)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Matches::DecidedWinner).string_len(16).null())
                    .col(ColumnDef::new(Matches::DecidedScore).string_len(16).null())
                    .col(ColumnDef::new(Matches::ResultWinner).string_len(16).null())
                    .col(ColumnDef::new(Matches::ResultScore).string_len(16).null())
                    .col(ColumnDef::new(Matches::ConcededByTeam).string_len(16).null())
                    .col(ColumnDef::new(Matches::ConcedeReason).string().null())
                    .col(timestamp_col(Matches::CreatedAt))
                    .col(timestamp_col(Matches::UpdatedAt))
                    .col(
                        ColumnDef::new(Matches::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Matches::LockVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_round_id")
                            .from(Matches::Table, Matches::RoundId)
                            .to(Rounds::Table, Rounds::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_competition_id")
                            .from(Matches::Table, Matches::CompetitionId)
                            .to(Competitions::Table, Competitions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_matches_competition_id")
                    .table(Matches::Table)
                    .col(Matches::CompetitionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_matches_round_id")
                    .table(Matches::Table)
                    .col(Matches::RoundId)
                    .to_owned(),
            )
            .await?;

        // match_players
        manager
            .create_table(
                Table::create()
                    .table(MatchPlayers::Table)
                    .if_not_exists()
                    .col(id_col(MatchPlayers::Id))
                    .col(ColumnDef::new(MatchPlayers::MatchId).big_integer().not_null())
                    .col(
                        ColumnDef::new(MatchPlayers::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MatchPlayers::Team).string_len(1).not_null())
                    .col(
                        ColumnDef::new(MatchPlayers::Position)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchPlayers::PlayingHandicap)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MatchPlayers::Tee).string_len(16).not_null())
                    .col(
                        ColumnDef::new(MatchPlayers::MarksPlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_players_match_id")
                            .from(MatchPlayers::Table, MatchPlayers::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_match_players_match_player")
                    .table(MatchPlayers::Table)
                    .col(MatchPlayers::MatchId)
                    .col(MatchPlayers::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // hole_scores: one dual-entry cell per (match, hole, player)
        manager
            .create_table(
                Table::create()
                    .table(HoleScores::Table)
                    .if_not_exists()
                    .col(id_col(HoleScores::Id))
                    .col(ColumnDef::new(HoleScores::MatchId).big_integer().not_null())
                    .col(
                        ColumnDef::new(HoleScores::HoleNumber)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(HoleScores::PlayerId).big_integer().not_null())
                    .col(ColumnDef::new(HoleScores::Team).string_len(1).not_null())
                    .col(ColumnDef::new(HoleScores::OwnScore).small_integer().null())
                    .col(
                        ColumnDef::new(HoleScores::OwnSubmitted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(HoleScores::MarkerScore).small_integer().null())
                    .col(
                        ColumnDef::new(HoleScores::MarkerSubmitted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(HoleScores::StrokesReceived)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(HoleScores::NetScore).small_integer().null())
                    .col(
                        ColumnDef::new(HoleScores::ValidationStatus)
                            .string_len(16)
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(timestamp_col(HoleScores::CreatedAt))
                    .col(timestamp_col(HoleScores::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hole_scores_match_id")
                            .from(HoleScores::Table, HoleScores::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_hole_scores_match_hole_player")
                    .table(HoleScores::Table)
                    .col(HoleScores::MatchId)
                    .col(HoleScores::HoleNumber)
                    .col(HoleScores::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HoleScores::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MatchPlayers::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Matches::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RoundHoles::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rounds::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Competitions::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
