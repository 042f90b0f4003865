use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared("CREATE EXTENSION IF NOT EXISTS postgis")
            .await?;

        // ========== RUCHERS (apiaries) ==========
        // Geometry columns need the PostGIS type directly, so these two tables
        // are created with raw SQL rather than the schema builder.
        conn.execute_unprepared(
            r"
            CREATE TABLE IF NOT EXISTS ruchers (
                id SERIAL PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                description TEXT,
                geom geometry(Geometry, 4326) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            ",
        )
        .await?;

        conn.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS ruchers_geom_idx ON ruchers USING GIST (geom)",
        )
        .await?;

        // ========== RUCHES (hives) ==========
        conn.execute_unprepared(
            r"
            CREATE TABLE IF NOT EXISTS ruches (
                id SERIAL PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                rucher_id INTEGER REFERENCES ruchers(id) ON DELETE SET NULL,
                queen_info JSONB,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                geom geometry(Point, 4326) NOT NULL,
                active BOOLEAN NOT NULL DEFAULT TRUE
            )
            ",
        )
        .await?;

        conn.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS ruches_geom_idx ON ruches USING GIST (geom)",
        )
        .await?;

        conn.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS ruches_rucher_id_idx ON ruches (rucher_id)",
        )
        .await?;

        // ========== MEASUREMENTS ==========
        manager
            .create_table(
                Table::create()
                    .table(Measurements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Measurements::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Measurements::RucheId).integer().not_null())
                    .col(
                        ColumnDef::new(Measurements::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("DEFAULT NOW()"),
                    )
                    .col(ColumnDef::new(Measurements::Weight).double())
                    .col(ColumnDef::new(Measurements::Temperature).double())
                    .col(ColumnDef::new(Measurements::Humidity).double())
                    .col(ColumnDef::new(Measurements::Signal).double())
                    .col(ColumnDef::new(Measurements::Raw).json_binary())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_measurements_ruche")
                            .from(Measurements::Table, Measurements::RucheId)
                            .to(Ruches::Table, Ruches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("measurements_ruche_recorded_idx")
                    .table(Measurements::Table)
                    .col(Measurements::RucheId)
                    .col(Measurements::RecordedAt)
                    .to_owned(),
            )
            .await?;

        // ========== ALERT RULES ==========
        manager
            .create_table(
                Table::create()
                    .table(AlertRules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AlertRules::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AlertRules::RucheId).integer().not_null())
                    .col(
                        ColumnDef::new(AlertRules::RuleType)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(AlertRules::Params).json_binary())
                    .col(
                        ColumnDef::new(AlertRules::NotifyInApp)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(AlertRules::NotifyWhatsapp)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(AlertRules::WhatsappNumber).string_len(50))
                    .col(
                        ColumnDef::new(AlertRules::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alert_rules_ruche")
                            .from(AlertRules::Table, AlertRules::RucheId)
                            .to(Ruches::Table, Ruches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ========== ALERTS ==========
        manager
            .create_table(
                Table::create()
                    .table(Alerts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alerts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alerts::RuleId).integer().not_null())
                    .col(ColumnDef::new(Alerts::RucheId).integer().not_null())
                    .col(
                        ColumnDef::new(Alerts::TriggeredAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .extra("DEFAULT NOW()"),
                    )
                    .col(ColumnDef::new(Alerts::Payload).json_binary())
                    .col(
                        ColumnDef::new(Alerts::SentWhatsapp)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alerts_rule")
                            .from(Alerts::Table, Alerts::RuleId)
                            .to(AlertRules::Table, AlertRules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alerts_ruche")
                            .from(Alerts::Table, Alerts::RucheId)
                            .to(Ruches::Table, Ruches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alerts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AlertRules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Measurements::Table).to_owned())
            .await?;

        let conn = manager.get_connection();
        conn.execute_unprepared("DROP TABLE IF EXISTS ruches").await?;
        conn.execute_unprepared("DROP TABLE IF EXISTS ruchers")
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Ruches {
    Table,
    Id,
}

#[derive(Iden)]
enum Measurements {
    Table,
    Id,
    RucheId,
    RecordedAt,
    Weight,
    Temperature,
    Humidity,
    Signal,
    Raw,
}

#[derive(Iden)]
enum AlertRules {
    Table,
    Id,
    RucheId,
    RuleType,
    Params,
    NotifyInApp,
    NotifyWhatsapp,
    WhatsappNumber,
    Active,
}

#[derive(Iden)]
enum Alerts {
    Table,
    Id,
    RuleId,
    RucheId,
    TriggeredAt,
    Payload,
    SentWhatsapp,
}
