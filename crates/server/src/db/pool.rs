use sqlx::postgres::{PgPool, PgPoolOptions};

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Apply the schema inline. Every statement is idempotent.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Society members
CREATE TABLE IF NOT EXISTS players (
    id          BIGSERIAL PRIMARY KEY,
    name        TEXT NOT NULL,
    handicap    DOUBLE PRECISION NOT NULL DEFAULT 0,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_players_name_lower
    ON players (LOWER(name));

-- Courses: one array element per hole, in hole order
CREATE TABLE IF NOT EXISTS courses (
    id              BIGSERIAL PRIMARY KEY,
    name            TEXT NOT NULL,
    location        TEXT,
    par_values      INTEGER[] NOT NULL,
    stroke_indexes  INTEGER[] NOT NULL,
    hole_yardages   INTEGER[] NOT NULL DEFAULT '{}',
    course_rating   DOUBLE PRECISION NOT NULL DEFAULT 72,
    slope_rating    DOUBLE PRECISION NOT NULL DEFAULT 113,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Competitions
CREATE TABLE IF NOT EXISTS competitions (
    id                BIGSERIAL PRIMARY KEY,
    name              TEXT NOT NULL,
    date              DATE NOT NULL,
    course_id         BIGINT NOT NULL REFERENCES courses(id),
    competition_type  TEXT NOT NULL,
    scoring_mode      TEXT NOT NULL DEFAULT 'plain',
    created_at        TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_competitions_course_id ON competitions (course_id);

-- Recorded cards
CREATE TABLE IF NOT EXISTS scores (
    id                 BIGSERIAL PRIMARY KEY,
    player_id          BIGINT NOT NULL REFERENCES players(id),
    competition_id     BIGINT NOT NULL REFERENCES competitions(id),
    scoring_mode       TEXT NOT NULL,
    hole_scores        INTEGER[] NOT NULL,
    shots_received     INTEGER[] NOT NULL,
    total_strokes      INTEGER NOT NULL,
    stableford_points  INTEGER NOT NULL,
    super_par_points   INTEGER NOT NULL,
    points             INTEGER NOT NULL,
    eagles             INTEGER NOT NULL,
    birdies            INTEGER NOT NULL,
    pars               INTEGER NOT NULL,
    bogeys             INTEGER NOT NULL,
    doubles_or_worse   INTEGER NOT NULL,
    twos               INTEGER NOT NULL,
    created_at         TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_scores_competition_id ON scores (competition_id);
CREATE INDEX IF NOT EXISTS idx_scores_player_id      ON scores (player_id);
"#;
